use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use crate::config::PageConfig;
use crate::typing::{Typewriter, START_DELAY_MS};

use super::dom;

fn schedule(window: Window, target: HtmlElement, writer: Rc<RefCell<Typewriter>>, delay: i32) {
    let win = window.clone();
    let scheduled = dom::set_timeout(&window, delay, move || {
        let step = writer.borrow_mut().step();
        if let Some((text, next)) = step {
            target.set_text_content(Some(&text));
            schedule(win, target, writer, next);
        }
    });
    if let Err(e) = scheduled {
        log::warn!("typing effect stopped: {e:?}");
    }
}

/// Cycle the hero subtitle through the configured roles.
pub fn init(window: &Window, document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let Some(target) = document
        .query_selector(".hero-sub")?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };

    target.set_text_content(Some(""));
    dom::set_style(&target, "border-right", "2px solid var(--accent)");
    dom::set_style(&target, "padding-right", "4px");
    dom::set_style(&target, "white-space", "nowrap");
    dom::set_style(&target, "overflow", "hidden");
    dom::set_style(&target, "display", "inline-block");

    let writer = Rc::new(RefCell::new(Typewriter::new(config.roles.iter().copied())));
    schedule(window.clone(), target, writer, START_DELAY_MS);
    Ok(())
}
