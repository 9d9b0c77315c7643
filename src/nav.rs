//! Scroll-driven navbar state.

use crate::config::PageConfig;

/// Vertical extent of a page section, in document pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// What the navbar should look like at a given scroll position.
#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    pub shadow: bool,
    pub back_to_top: bool,
    pub active: Option<String>,
}

pub const NAV_SHADOW: &str = "0 4px 24px rgba(0,0,0,0.4)";

pub fn shows_shadow(scroll_y: f64, config: &PageConfig) -> bool {
    scroll_y > config.shadow_scroll_y
}

pub fn shows_back_to_top(scroll_y: f64, config: &PageConfig) -> bool {
    scroll_y > config.back_to_top_scroll_y
}

/// Section containing `scroll_y` plus the header offset. Later sections win
/// when bounds overlap.
pub fn active_section<'a>(
    scroll_y: f64,
    sections: &'a [SectionBounds],
    config: &PageConfig,
) -> Option<&'a str> {
    let probe = scroll_y + config.active_link_offset;
    sections
        .iter()
        .filter(|s| probe >= s.top && probe < s.top + s.height)
        .last()
        .map(|s| s.id.as_str())
}

pub fn nav_state(scroll_y: f64, sections: &[SectionBounds], config: &PageConfig) -> NavState {
    NavState {
        shadow: shows_shadow(scroll_y, config),
        back_to_top: shows_back_to_top(scroll_y, config),
        active: active_section(scroll_y, sections, config).map(str::to_owned),
    }
}

/// `href` a nav link must carry to be highlighted for section `id`.
pub fn link_target(id: &str) -> String {
    format!("#{id}")
}
