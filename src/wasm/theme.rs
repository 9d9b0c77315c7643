use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, Storage, Window};

use crate::config::PageConfig;
use crate::theme::Theme;

use super::dom;

struct ThemeTargets {
    document: Document,
    icon: Option<HtmlElement>,
    label: Option<HtmlElement>,
    storage: Option<Storage>,
    key: &'static str,
}

impl ThemeTargets {
    fn apply(&self, theme: Theme) {
        if let Some(root) = self.document.document_element() {
            if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
                log::warn!("setting data-theme failed: {e:?}");
            }
        }
        if let Some(icon) = &self.icon {
            icon.set_text_content(Some(theme.icon()));
        }
        if let Some(label) = &self.label {
            label.set_text_content(Some(theme.label()));
        }
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(self.key, theme.as_str()) {
                log::warn!("could not persist theme: {e:?}");
            }
        }
    }
}

/// Restore the saved theme and wire up the toggle button.
pub fn init(window: &Window, document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let storage = window.local_storage().ok().flatten();
    let saved = storage
        .as_ref()
        .and_then(|s| s.get_item(config.theme_storage_key).ok().flatten());

    let targets = ThemeTargets {
        document: document.clone(),
        icon: dom::by_id(document, "themeIcon"),
        label: dom::by_id(document, "themeLabel"),
        storage,
        key: config.theme_storage_key,
    };
    let current = Rc::new(Cell::new(Theme::from_stored(saved.as_deref())));
    targets.apply(current.get());

    let Some(toggle) = dom::by_id::<HtmlElement>(document, "themeToggle") else {
        log::debug!("no #themeToggle, theme fixed");
        return Ok(());
    };
    dom::listen(&toggle, "click", move |_| {
        let next = current.get().toggled();
        targets.apply(next);
        current.set(next);
    })
}
