//! Tunables for the background field and the page behaviours.
//!
//! Defaults carry the literal values the site was designed with. The
//! background can be tuned per page through `data-*` attributes on its
//! container; everything else is fixed at build time.

/// Parameters of the animated particle background.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundConfig {
    pub particle_count: usize,
    /// Side length of the cube the particles are sampled from.
    pub extent: f32,
    /// Vertical field of view, in degrees.
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub camera_z: f32,
    pub point_size: f32,
    /// 0xRRGGBB
    pub color: u32,
    pub opacity: f32,
    /// Radians per second about the vertical axis.
    pub spin_speed: f64,
    /// Radians per pixel of pointer offset.
    pub parallax: f64,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            particle_count: 400,
            extent: 60.0,
            fov_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            camera_z: 30.0,
            point_size: 0.15,
            color: 0x7c3aed,
            opacity: 0.8,
            spin_speed: 0.05,
            parallax: 0.0001,
        }
    }
}

impl BackgroundConfig {
    /// Apply overrides looked up by `data-*` key (without the `data-` prefix).
    ///
    /// Unparseable or out-of-range values are logged and skipped.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("particle-count") {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => self.particle_count = n,
                _ => log::warn!("ignoring data-particle-count={raw:?}"),
            }
        }
        if let Some(raw) = lookup("point-size") {
            match raw.trim().parse::<f32>() {
                Ok(v) if v.is_finite() && v > 0.0 => self.point_size = v,
                _ => log::warn!("ignoring data-point-size={raw:?}"),
            }
        }
        if let Some(raw) = lookup("color") {
            match parse_hex_color(&raw) {
                Some(c) => self.color = c,
                None => log::warn!("ignoring data-color={raw:?}"),
            }
        }
        if let Some(raw) = lookup("opacity") {
            match raw.trim().parse::<f32>() {
                Ok(v) if (0.0..=1.0).contains(&v) => self.opacity = v,
                _ => log::warn!("ignoring data-opacity={raw:?}"),
            }
        }
        self
    }

    /// Colour as normalised RGB.
    pub fn rgb(&self) -> [f32; 3] {
        [
            ((self.color >> 16) & 0xff) as f32 / 255.0,
            ((self.color >> 8) & 0xff) as f32 / 255.0,
            (self.color & 0xff) as f32 / 255.0,
        ]
    }
}

/// Accepts `#rrggbb`, `0xrrggbb` or bare `rrggbb`.
pub fn parse_hex_color(raw: &str) -> Option<u32> {
    let s = raw.trim();
    let hex = s
        .strip_prefix('#')
        .or_else(|| s.strip_prefix("0x"))
        .unwrap_or(s);
    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

/// Element ids, thresholds and timings used by the page behaviours.
#[derive(Clone, Debug)]
pub struct PageConfig {
    pub canvas_container_id: &'static str,
    pub theme_storage_key: &'static str,

    pub shadow_scroll_y: f64,
    pub back_to_top_scroll_y: f64,
    pub active_link_offset: f64,
    pub scroll_throttle_ms: f64,

    pub reveal_step_ms: u32,
    pub reveal_max_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: &'static str,

    pub lightbox_clear_ms: i32,

    pub mail_recipient: &'static str,
    pub submit_delay_ms: i32,
    pub note_clear_ms: i32,

    pub roles: &'static [&'static str],

    pub cursor_min_width: f64,
    pub cursor_lerp: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            canvas_container_id: "hero-canvas-container",
            theme_storage_key: "portfolio-theme",
            shadow_scroll_y: 40.0,
            back_to_top_scroll_y: 300.0,
            active_link_offset: 100.0,
            scroll_throttle_ms: 60.0,
            reveal_step_ms: 120,
            reveal_max_ms: 600,
            reveal_threshold: 0.12,
            reveal_root_margin: "0px 0px -40px 0px",
            lightbox_clear_ms: 300,
            mail_recipient: "hetpce2005@gmail.com",
            submit_delay_ms: 1000,
            note_clear_ms: 6000,
            roles: &[
                "ML & Data Science Engineer",
                "Python Developer",
                "AI Solutions Builder",
                "Data Analyst",
            ],
            cursor_min_width: 992.0,
            cursor_lerp: 0.15,
        }
    }
}
