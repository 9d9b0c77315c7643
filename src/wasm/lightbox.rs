use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, KeyboardEvent, Window};

use crate::config::PageConfig;
use crate::lightbox::{self, Lightbox};

use super::dom;

#[derive(Clone)]
struct LightboxView {
    window: Window,
    body: Option<HtmlElement>,
    overlay: Element,
    image: HtmlImageElement,
    state: Rc<RefCell<Lightbox>>,
    clear_ms: i32,
}

impl LightboxView {
    fn open(&self, src: &str, alt: &str) {
        self.state.borrow_mut().open(src, alt);
        self.image.set_src(src);
        self.image.set_alt(alt);
        let _ = self.overlay.class_list().add_1("open");
        if let Some(body) = &self.body {
            dom::set_style(body, "overflow", "hidden");
        }
    }

    fn close(&self) {
        if !self.state.borrow_mut().close() {
            return;
        }
        let _ = self.overlay.class_list().remove_1("open");
        if let Some(body) = &self.body {
            dom::set_style(body, "overflow", "");
        }
        // Clear after the fade-out so the image doesn't vanish mid-transition.
        let (image, state) = (self.image.clone(), self.state.clone());
        let cleared = dom::set_timeout(&self.window, self.clear_ms, move || {
            if !state.borrow().is_open() {
                image.set_src("");
            }
        });
        if let Err(e) = cleared {
            log::warn!("lightbox clear failed: {e:?}");
        }
    }
}

fn card_title(link: &Element) -> Option<String> {
    link.closest(".cert-card")
        .ok()??
        .query_selector(".cert-title")
        .ok()??
        .text_content()
}

pub fn init(window: &Window, document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let (Some(overlay), Some(image)) = (
        dom::by_id::<Element>(document, "lightbox"),
        dom::by_id::<HtmlImageElement>(document, "lightboxImg"),
    ) else {
        log::debug!("no lightbox markup");
        return Ok(());
    };
    let view = LightboxView {
        window: window.clone(),
        body: document.body(),
        overlay,
        image,
        state: Rc::new(RefCell::new(Lightbox::default())),
        clear_ms: config.lightbox_clear_ms,
    };

    for link in dom::query_all::<Element>(document, ".cert-link")? {
        let view = view.clone();
        let target = link.clone();
        dom::listen(&link, "click", move |event| {
            let href = target.get_attribute("href");
            if !lightbox::opens_in_lightbox(href.as_deref()) {
                return;
            }
            event.prevent_default();
            let title = card_title(&target);
            let alt = lightbox::alt_text(title.as_deref());
            view.open(href.as_deref().unwrap_or_default(), alt);
        })?;
    }

    if let Some(close) = dom::by_id::<Element>(document, "lightboxClose") {
        let view = view.clone();
        dom::listen(&close, "click", move |_| view.close())?;
    }
    {
        let view = view.clone();
        let overlay: JsValue = view.overlay.clone().into();
        dom::listen(&view.overlay.clone(), "click", move |event| {
            if event.target().map(JsValue::from).as_ref() == Some(&overlay) {
                view.close();
            }
        })?;
    }
    dom::listen(document, "keydown", move |event| {
        if event.dyn_ref::<KeyboardEvent>().is_some_and(|k| k.key() == "Escape") {
            view.close();
        }
    })
}
