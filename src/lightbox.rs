const IMAGE_SUFFIXES: [&str; 3] = [".png", ".jpg", ".jpeg"];

pub const DEFAULT_ALT: &str = "Certificate";

/// Only local raster images open in the lightbox; other links navigate.
pub fn opens_in_lightbox(href: Option<&str>) -> bool {
    href.is_some_and(|h| IMAGE_SUFFIXES.iter().any(|s| h.ends_with(s)))
}

pub fn alt_text(card_title: Option<&str>) -> &str {
    match card_title {
        Some(t) if !t.is_empty() => t,
        _ => DEFAULT_ALT,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lightbox {
    image: Option<(String, String)>,
}

impl Lightbox {
    pub fn open(&mut self, src: &str, alt: &str) {
        self.image = Some((src.to_owned(), alt.to_owned()));
    }

    /// Returns whether it was open.
    pub fn close(&mut self) -> bool {
        self.image.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<(&str, &str)> {
        self.image.as_ref().map(|(s, a)| (s.as_str(), a.as_str()))
    }
}
