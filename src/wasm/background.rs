use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, Window};

use crate::background::{Background, Flow};
use crate::config::{BackgroundConfig, PageConfig};
use crate::view::ContainerSize;

use super::dom::{self, Listener};
use super::render::GlPoints;

type Shared = Rc<RefCell<Background<GlPoints>>>;

/// A running background and the listeners feeding it.
struct Mounted {
    background: Shared,
    _listeners: [Listener; 2],
}

thread_local! {
    static ACTIVE: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

fn container_size(el: &Element) -> ContainerSize {
    ContainerSize::new(el.client_width().max(0) as u32, el.client_height().max(0) as u32)
}

fn seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Mount the particle background into the configured container, if the
/// page has one, and start its frame loop.
pub fn start(window: &Window, document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let container = document.get_element_by_id(config.canvas_container_id);
    let bg_config = match &container {
        Some(el) => BackgroundConfig::default().with_overrides(|key| el.get_attribute(&format!("data-{key}"))),
        None => BackgroundConfig::default(),
    };

    let mut rng = fastrand::Rng::with_seed(seed());
    let mounted = Background::mount(
        container.as_ref().map(container_size),
        window.device_pixel_ratio(),
        dom::now_ms(window),
        bg_config,
        &mut rng,
        |cfg: &BackgroundConfig| -> Result<GlPoints, JsValue> {
            let el = container.as_ref().ok_or("canvas container missing")?;
            GlPoints::new(document, el, cfg)
        },
    )?;
    let (Some(background), Some(container)) = (mounted, container) else {
        return Ok(());
    };
    let background: Shared = Rc::new(RefCell::new(background));

    // Keep the projection in step with the container.
    let resize = {
        let background = background.clone();
        Listener::new(window, "resize", move |_| {
            background.borrow_mut().resize(container_size(&container));
        })?
    };

    // Parallax follows the pointer anywhere on the page.
    let pointer = {
        let background = background.clone();
        let win = window.clone();
        Listener::new(document, "pointermove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            background.borrow_mut().pointer_moved(
                event.client_x() as f64,
                event.client_y() as f64,
                w,
                h,
            );
        })?
    };

    // The frame closure is never freed, so it must not keep the background
    // alive after stop.
    let weak: Weak<RefCell<Background<GlPoints>>> = Rc::downgrade(&background);
    dom::frame_loop(window, move |now| match weak.upgrade() {
        Some(background) => background.borrow_mut().tick(now),
        None => Flow::Stop,
    })?;

    let previous = ACTIVE.with(|active| {
        active.borrow_mut().replace(Mounted {
            background,
            _listeners: [resize, pointer],
        })
    });
    if let Some(previous) = previous {
        previous.background.borrow_mut().stop();
    }
    Ok(())
}

/// Stop the background loop, release its canvas and detach its resize and
/// pointer listeners.
#[wasm_bindgen(js_name = stopBackground)]
pub fn stop_background() {
    let active = ACTIVE.with(|active| active.borrow_mut().take());
    match active {
        Some(mounted) => mounted.background.borrow_mut().stop(),
        None => log::debug!("stopBackground: nothing running"),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn page_with_container(document: &Document) -> web_sys::HtmlElement {
        let el = document
            .create_element("div")
            .unwrap()
            .dyn_into::<web_sys::HtmlElement>()
            .unwrap();
        el.set_id(PageConfig::default().canvas_container_id);
        el.style().set_property("width", "300px").unwrap();
        el.style().set_property("height", "150px").unwrap();
        document.body().unwrap().append_child(&el).unwrap();
        el
    }

    #[wasm_bindgen_test]
    fn start_mounts_canvas_and_stop_tears_down() {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let container = page_with_container(&document);

        start(&window, &document, &PageConfig::default()).unwrap();
        assert!(container.query_selector("canvas").unwrap().is_some());

        let weak = ACTIVE.with(|active| {
            let active = active.borrow();
            Rc::downgrade(&active.as_ref().expect("background running").background)
        });
        assert_eq!(weak.upgrade().unwrap().borrow().view().aspect(), 2.0);

        stop_background();
        assert!(container.query_selector("canvas").unwrap().is_none());
        // Listeners are detached and the frame loop only holds a weak
        // reference, so nothing keeps the background alive.
        assert!(weak.upgrade().is_none());
        assert!(ACTIVE.with(|active| active.borrow().is_none()));

        container.remove();
    }

    #[wasm_bindgen_test]
    fn start_without_container_mounts_nothing() {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        start(&window, &document, &PageConfig::default()).unwrap();
        assert!(ACTIVE.with(|active| active.borrow().is_none()));
    }
}
