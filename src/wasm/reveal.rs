use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::config::PageConfig;
use crate::reveal;

use super::dom;

const ANIMATED: &str = ".fade-up, .fade-left, .fade-right";

fn sibling_index(target: &Element) -> Option<usize> {
    let parent = target.parent_element()?;
    let siblings: Vec<Element> = dom::nodes(parent.query_selector_all(ANIMATED).ok()?);
    let target: &JsValue = target.as_ref();
    siblings.iter().position(|s| {
        let s: &JsValue = s.as_ref();
        s == target
    })
}

fn show_later(window: &Window, el: Element, delay_ms: i32) {
    let shown = dom::set_timeout(window, delay_ms, move || {
        let _ = el.class_list().add_1("visible");
    });
    if let Err(e) = shown {
        log::warn!("reveal timeout failed: {e:?}");
    }
}

/// Reveal animated elements once they scroll into view, staggering
/// siblings.
pub fn init(window: &Window, document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let elements: Vec<Element> = dom::query_all(document, ANIMATED)?;
    if elements.is_empty() {
        return Ok(());
    }

    let win = window.clone();
    let cfg = config.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let delay = reveal::stagger_delay_ms(sibling_index(&target), &cfg);
                observer.unobserve(&target);
                show_later(&win, target, delay as i32);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let opts = IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    opts.set_root_margin(config.reveal_root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)?;
    callback.forget();

    for el in &elements {
        observer.observe(el);
    }
    Ok(())
}

/// Hero items animate in on load without waiting for the observer.
///
/// The module runs after the document is parsed, so the hero markup is
/// already present.
pub fn reveal_hero(window: &Window, document: &Document) -> Result<(), JsValue> {
    let items: Vec<HtmlElement> = dom::query_all(document, ".hero .fade-up")?;
    for (i, el) in items.into_iter().enumerate() {
        let (transition_delay, timeout) = reveal::hero_timing(i);
        dom::set_style(&el, "transition-delay", &transition_delay);
        show_later(window, el.into(), timeout);
    }
    Ok(())
}
