use wasm_bindgen::prelude::*;

use crate::config::PageConfig;

mod background;
mod contact;
mod cursor;
mod dom;
mod lightbox;
mod nav;
mod render;
mod reveal;
mod theme;
mod typing;

pub use background::stop_background;
pub use contact::handle_form_submit;

/// Log a component's setup failure without taking the rest of the page down.
fn isolate(component: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::error!("{component} setup failed: {e:?}");
    }
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let config = PageConfig::default();

    nav::reset_scroll(&window);

    isolate("theme", theme::init(&window, &document, &config));
    isolate("nav", nav::init(&window, &document, &config));
    isolate("reveal", reveal::init(&window, &document, &config));
    isolate("hero", reveal::reveal_hero(&window, &document));
    isolate("lightbox", lightbox::init(&window, &document, &config));
    isolate("contact", contact::expose(&window));
    isolate("typing", typing::init(&window, &document, &config));
    isolate("cursor", cursor::init(&window, &document, &config));
    isolate("background", background::start(&window, &document, &config));

    log::info!("portfolio page ready");
    Ok(())
}
