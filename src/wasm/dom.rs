//! Small wrappers over the web-sys calls every adapter repeats.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Event, EventTarget, NodeList, Window};

use crate::background::Flow;

/// Element by id, cast to `T`. `None` if missing or of another type.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Collect the nodes of `list` that are `T`.
pub fn nodes<T: JsCast>(list: NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<T>().ok())
        .collect()
}

pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, JsValue> {
    Ok(nodes(document.query_selector_all(selector)?))
}

/// Attach `handler` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Event listener that detaches itself from its target when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let removed = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        if let Err(e) = removed {
            log::warn!("removing {} listener failed: {e:?}", self.event);
        }
    }
}

/// Like [`listen`], registered as a passive listener.
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let opts = web_sys::AddEventListenerOptions::new();
    opts.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    )?;
    closure.forget();
    Ok(())
}

pub fn set_timeout<F>(window: &Window, ms: i32, f: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
}

pub fn now_ms(window: &Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or_default()
}

/// Run `step` once per animation frame until it returns [`Flow::Stop`].
pub fn frame_loop<F>(window: &Window, mut step: F) -> Result<(), JsValue>
where
    F: FnMut(f64) -> Flow + 'static,
{
    // `f` holds the animation-frame closure so that it can keep passing
    // itself to `request_animation_frame`. Once `step` stops, the closure is
    // simply not scheduled again.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let win = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if step(now) == Flow::Stop {
            return;
        }
        if let Some(cb) = f.borrow().as_ref() {
            if let Err(e) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("request_animation_frame failed: {e:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let first = g.borrow();
    let cb = first.as_ref().ok_or("frame callback missing")?;
    window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    Ok(())
}

/// `style.setProperty`, logging instead of failing.
pub fn set_style(el: &web_sys::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("setting {property} failed: {e:?}");
    }
}
