use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, Window,
};

use crate::config::PageConfig;
use crate::contact::{ContactMessage, FormNote};

use super::dom;

struct ContactForm {
    form: HtmlFormElement,
    name: HtmlInputElement,
    email: HtmlInputElement,
    message: HtmlTextAreaElement,
    button: HtmlButtonElement,
    button_text: HtmlElement,
    loader: HtmlElement,
    note: HtmlElement,
}

impl ContactForm {
    fn find(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            form: dom::by_id(document, "contactForm").ok_or("#contactForm missing")?,
            name: dom::by_id(document, "name").ok_or("#name missing")?,
            email: dom::by_id(document, "email").ok_or("#email missing")?,
            message: dom::by_id(document, "message").ok_or("#message missing")?,
            button: dom::by_id(document, "submitBtn").ok_or("#submitBtn missing")?,
            button_text: dom::by_id(document, "btnText").ok_or("#btnText missing")?,
            loader: dom::by_id(document, "btnLoader").ok_or("#btnLoader missing")?,
            note: dom::by_id(document, "formNote").ok_or("#formNote missing")?,
        })
    }

    fn show_note(&self, note: FormNote) {
        self.note.set_text_content(Some(note.text()));
        self.note.set_class_name(note.class_name());
    }

    fn set_loading(&self, loading: bool) {
        dom::set_style(&self.button_text, "display", if loading { "none" } else { "inline" });
        dom::set_style(&self.loader, "display", if loading { "inline" } else { "none" });
        self.button.set_disabled(loading);
    }
}

fn encode(s: &str) -> String {
    js_sys::encode_uri_component(s).into()
}

fn submit(window: &Window, config: &PageConfig) -> Result<(), JsValue> {
    let document = window.document().ok_or("no document")?;
    let ui = ContactForm::find(&document)?;

    let Some(msg) = ContactMessage::from_fields(&ui.name.value(), &ui.email.value(), &ui.message.value())
    else {
        ui.show_note(FormNote::Error);
        return Ok(());
    };

    ui.set_loading(true);
    ui.show_note(FormNote::Clear);

    let recipient = ui
        .form
        .get_attribute("data-recipient")
        .unwrap_or_else(|| config.mail_recipient.to_owned());
    let mailto = msg.mailto(&recipient, encode);
    let (win, note_clear_ms) = (window.clone(), config.note_clear_ms);

    dom::set_timeout(window, config.submit_delay_ms, move || {
        if let Err(e) = win.location().set_href(&mailto) {
            log::error!("opening mail client failed: {e:?}");
        }
        ui.set_loading(false);
        ui.show_note(FormNote::Success);
        ui.form.reset();
        let note = ui.note.clone();
        let cleared = dom::set_timeout(&win, note_clear_ms, move || {
            note.set_text_content(Some(FormNote::Clear.text()));
            note.set_class_name(FormNote::Clear.class_name());
        });
        if let Err(e) = cleared {
            log::warn!("note clear failed: {e:?}");
        }
    })?;
    Ok(())
}

/// `onsubmit` handler for the contact form.
#[wasm_bindgen(js_name = handleFormSubmit)]
pub fn handle_form_submit(event: Event) {
    event.prevent_default();
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = submit(&window, &PageConfig::default()) {
        log::error!("contact form: {e:?}");
    }
}

/// Publish `handleFormSubmit` on `window` so inline `onsubmit` attributes
/// can reach it.
pub fn expose(window: &Window) -> Result<(), JsValue> {
    let handler = Closure::wrap(Box::new(handle_form_submit) as Box<dyn FnMut(Event)>);
    js_sys::Reflect::set(window, &"handleFormSubmit".into(), handler.as_ref())?;
    handler.forget();
    Ok(())
}
