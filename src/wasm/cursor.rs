use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, MouseEvent, Window};

use crate::background::Flow;
use crate::config::PageConfig;
use crate::cursor::{self, CursorTrail};

use super::dom;

const INTERACTIVE: &str = "a, button, input, textarea, .project-card, .cert-card";

fn place(el: &HtmlElement, (x, y): (f64, f64)) {
    dom::set_style(el, "left", &format!("{x}px"));
    dom::set_style(el, "top", &format!("{y}px"));
}

/// Dot tracks the pointer exactly; the ring eases after it.
pub fn init(window: &Window, document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let dot = dom::by_id::<HtmlElement>(document, "cursor-dot");
    let ring = dom::by_id::<HtmlElement>(document, "cursor-ring");
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    if !cursor::enabled(dot.is_some() && ring.is_some(), width, config.cursor_min_width) {
        log::debug!("custom cursor disabled ({width}px)");
        return Ok(());
    }
    let (Some(dot), Some(ring)) = (dot, ring) else {
        return Ok(());
    };

    let trail = Rc::new(RefCell::new(CursorTrail::default()));
    {
        let trail = trail.clone();
        dom::listen(window, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let pos = (event.client_x() as f64, event.client_y() as f64);
            trail.borrow_mut().pointer_moved(pos.0, pos.1);
            place(&dot, pos);
        })?;
    }

    let lerp = config.cursor_lerp;
    dom::frame_loop(window, move |_| {
        let pos = trail.borrow_mut().step(lerp);
        place(&ring, pos);
        Flow::Continue
    })?;

    let Some(body) = document.body() else {
        return Ok(());
    };
    for el in dom::query_all::<Element>(document, INTERACTIVE)? {
        let b = body.clone();
        dom::listen(&el, "mouseenter", move |_| {
            let _ = b.class_list().add_1("hovering");
        })?;
        let b = body.clone();
        dom::listen(&el, "mouseleave", move |_| {
            let _ = b.class_list().remove_1("hovering");
        })?;
    }
    Ok(())
}
