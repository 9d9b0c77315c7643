use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollRestoration, ScrollToOptions, Window,
};

use crate::config::PageConfig;
use crate::nav::{self, SectionBounds, NAV_SHADOW};
use crate::throttle::Throttle;

use super::dom;

/// Always start at the top on load and refresh.
pub fn reset_scroll(window: &Window) {
    if let Ok(history) = window.history() {
        if let Err(e) = history.set_scroll_restoration(ScrollRestoration::Manual) {
            log::debug!("scroll restoration unsupported: {e:?}");
        }
    }
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or_default()
}

fn section_bounds(sections: &[HtmlElement]) -> Vec<SectionBounds> {
    sections
        .iter()
        .map(|s| SectionBounds {
            id: s.id(),
            top: s.offset_top() as f64,
            height: s.offset_height() as f64,
        })
        .collect()
}

fn highlight(links: &[Element], active: &str) {
    let target = nav::link_target(active);
    for link in links {
        let classes = link.class_list();
        let _ = classes.remove_1("active");
        if link.get_attribute("href").as_deref() == Some(target.as_str()) {
            let _ = classes.add_1("active");
        }
    }
}

fn toggle_back_to_top(button: &Element, show: bool) {
    let _ = button.class_list().toggle_with_force("show", show);
}

pub fn init(window: &Window, document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let links: Rc<Vec<Element>> = Rc::new(dom::query_all(document, ".nav-link")?);
    let sections: Rc<Vec<HtmlElement>> = Rc::new(dom::query_all(document, "section[id]")?);
    let back_to_top: Option<Element> = dom::by_id(document, "backToTop");

    if let Some(navbar) = dom::by_id::<HtmlElement>(document, "navbar") {
        let win = window.clone();
        let config = config.clone();
        dom::listen_passive(window, "scroll", move |_| {
            let shadow = if nav::shows_shadow(scroll_y(&win), &config) {
                NAV_SHADOW
            } else {
                "none"
            };
            dom::set_style(&navbar, "box-shadow", shadow);
        })?;
    }

    let (hamburger, menu) = (
        dom::by_id::<Element>(document, "hamburger"),
        dom::by_id::<Element>(document, "navLinks"),
    );
    if let (Some(hamburger), Some(menu)) = (hamburger, menu) {
        {
            let (button, menu) = (hamburger.clone(), menu.clone());
            dom::listen(&hamburger, "click", move |_| {
                let open = menu.class_list().toggle("open").unwrap_or(false);
                let _ = button.set_attribute("aria-expanded", if open { "true" } else { "false" });
            })?;
        }
        for link in links.iter() {
            let menu = menu.clone();
            dom::listen(link, "click", move |_| {
                let _ = menu.class_list().remove_1("open");
            })?;
        }
    }

    let update = {
        let win = window.clone();
        let config = config.clone();
        let (links, sections, back_to_top) = (links.clone(), sections.clone(), back_to_top.clone());
        move || {
            let state = nav::nav_state(scroll_y(&win), &section_bounds(&sections), &config);
            if let Some(active) = &state.active {
                highlight(&links, active);
            }
            if let Some(button) = &back_to_top {
                toggle_back_to_top(button, state.back_to_top);
            }
        }
    };
    update();

    if let Some(button) = &back_to_top {
        let win = window.clone();
        dom::listen(button, "click", move |_| {
            let opts = ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&opts);
        })?;
    }

    let throttle = Rc::new(RefCell::new(Throttle::new(config.scroll_throttle_ms)));
    let win = window.clone();
    dom::listen_passive(window, "scroll", move |_| {
        if throttle.borrow_mut().ready(dom::now_ms(&win)) {
            update();
        }
    })
}
