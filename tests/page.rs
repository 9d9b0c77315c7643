use std::collections::HashMap;

use portfolio_fx::config::{parse_hex_color, BackgroundConfig, PageConfig};
use portfolio_fx::contact::{ContactMessage, FormNote};
use portfolio_fx::cursor::{self, CursorTrail};
use portfolio_fx::lightbox::{self, Lightbox};
use portfolio_fx::nav::{self, SectionBounds};
use portfolio_fx::reveal;
use portfolio_fx::theme::Theme;
use portfolio_fx::throttle::Throttle;
use portfolio_fx::typing::Typewriter;

/// Same output as `encodeURIComponent` for the inputs used here.
fn encode_uri_component(s: &str) -> String {
    s.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' => (b as char).to_string(),
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => (b as char).to_string(),
            _ => format!("%{b:02X}"),
        })
        .collect()
}

#[test]
fn theme_defaults_to_dark() {
    assert_eq!(Theme::from_stored(None), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("sepia")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
}

#[test]
fn theme_toggle_offers_the_other_theme() {
    let dark = Theme::Dark;
    assert_eq!(dark.toggled(), Theme::Light);
    assert_eq!(dark.toggled().toggled(), Theme::Dark);
    assert_eq!((dark.icon(), dark.label()), ("☀️", "Light"));
    assert_eq!((Theme::Light.icon(), Theme::Light.label()), ("🌙", "Dark"));
    assert_eq!(Theme::from_stored(Some(Theme::Light.as_str())), Theme::Light);
}

#[test]
fn throttle_passes_once_per_window() {
    let mut t = Throttle::new(60.0);
    assert!(t.ready(1_000.0));
    assert!(!t.ready(1_030.0));
    assert!(!t.ready(1_059.9));
    assert!(t.ready(1_060.0));
    assert!(!t.ready(1_100.0));
}

fn sections() -> Vec<SectionBounds> {
    [("hero", 0.0, 600.0), ("about", 600.0, 800.0), ("contact", 1400.0, 600.0)]
        .into_iter()
        .map(|(id, top, height)| SectionBounds { id: id.into(), top, height })
        .collect()
}

#[test]
fn active_section_uses_header_offset() {
    let cfg = PageConfig::default();
    let s = sections();
    assert_eq!(nav::active_section(0.0, &s, &cfg), Some("hero"));
    assert_eq!(nav::active_section(499.0, &s, &cfg), Some("hero"));
    assert_eq!(nav::active_section(500.0, &s, &cfg), Some("about"));
    assert_eq!(nav::active_section(1950.0, &s, &cfg), None);
    assert_eq!(nav::link_target("about"), "#about");
}

#[test]
fn nav_thresholds() {
    let cfg = PageConfig::default();
    let top = nav::nav_state(40.0, &sections(), &cfg);
    assert!(!top.shadow && !top.back_to_top);
    let mid = nav::nav_state(301.0, &sections(), &cfg);
    assert!(mid.shadow && mid.back_to_top);
    assert_eq!(mid.active.as_deref(), Some("hero"));
}

#[test]
fn reveal_stagger_is_capped() {
    let cfg = PageConfig::default();
    assert_eq!(reveal::stagger_delay_ms(None, &cfg), 0);
    assert_eq!(reveal::stagger_delay_ms(Some(0), &cfg), 0);
    assert_eq!(reveal::stagger_delay_ms(Some(2), &cfg), 240);
    assert_eq!(reveal::stagger_delay_ms(Some(50), &cfg), 600);
    assert_eq!(reveal::hero_timing(0), ("0s".to_string(), 100));
    assert_eq!(reveal::hero_timing(1), ("0.12s".to_string(), 220));
}

#[test]
fn lightbox_only_for_local_images() {
    assert!(lightbox::opens_in_lightbox(Some("certs/aws.png")));
    assert!(lightbox::opens_in_lightbox(Some("certs/ml.jpeg")));
    assert!(!lightbox::opens_in_lightbox(Some("https://coursera.org/verify/XYZ")));
    assert!(!lightbox::opens_in_lightbox(Some("certs/aws.pdf")));
    assert!(!lightbox::opens_in_lightbox(None));
}

#[test]
fn lightbox_alt_falls_back() {
    assert_eq!(lightbox::alt_text(Some("Deep Learning")), "Deep Learning");
    assert_eq!(lightbox::alt_text(Some("")), "Certificate");
    assert_eq!(lightbox::alt_text(None), "Certificate");
}

#[test]
fn lightbox_open_close() {
    let mut lb = Lightbox::default();
    assert!(!lb.close());
    lb.open("a.png", "A");
    assert_eq!(lb.image(), Some(("a.png", "A")));
    assert!(lb.close());
    assert!(!lb.is_open());
}

#[test]
fn contact_requires_every_field() {
    assert!(ContactMessage::from_fields("Ada", "ada@example.com", "   ").is_none());
    assert!(ContactMessage::from_fields("", "ada@example.com", "hi").is_none());
    let msg = ContactMessage::from_fields(" Ada ", "ada@example.com\n", " hi ").unwrap();
    assert_eq!(msg.name, "Ada");
    assert_eq!(msg.email, "ada@example.com");
    assert_eq!(msg.message, "hi");
}

#[test]
fn contact_mailto_is_encoded() {
    let msg = ContactMessage::from_fields("Ada L", "ada@example.com", "Hello & bye").unwrap();
    assert_eq!(msg.subject(), "Portfolio Contact: Ada L");
    assert_eq!(
        msg.body(),
        "Name: Ada L\nEmail: ada@example.com\n\nMessage:\nHello & bye"
    );
    assert_eq!(
        msg.mailto("me@example.com", encode_uri_component),
        "mailto:me@example.com?subject=Portfolio%20Contact%3A%20Ada%20L\
         &body=Name%3A%20Ada%20L%0AEmail%3A%20ada%40example.com%0A%0AMessage%3A%0AHello%20%26%20bye"
    );
}

#[test]
fn form_notes() {
    assert_eq!(FormNote::Error.text(), "Please fill in all fields.");
    assert_eq!(FormNote::Error.class_name(), "form-note error");
    assert_eq!(FormNote::Success.class_name(), "form-note success");
    assert_eq!((FormNote::Clear.text(), FormNote::Clear.class_name()), ("", "form-note"));
}

#[test]
fn typewriter_types_holds_deletes_and_wraps() {
    let mut tw = Typewriter::new(["ab", "c"]);
    let steps: Vec<(String, i32)> = (0..8).filter_map(|_| tw.step()).collect();
    let expected = [
        ("a", 70),
        ("ab", 2200),
        ("a", 35),
        ("", 400),
        ("c", 2200),
        ("", 400),
        ("a", 70),
        ("ab", 2200),
    ];
    let steps: Vec<(&str, i32)> = steps.iter().map(|(s, d)| (s.as_str(), *d)).collect();
    assert_eq!(steps, expected);
}

#[test]
fn typewriter_handles_multibyte_and_empty() {
    let mut tw = Typewriter::new(["ü€"]);
    assert_eq!(tw.step(), Some(("ü".to_string(), 70)));
    assert_eq!(tw.step(), Some(("ü€".to_string(), 2200)));
    assert_eq!(Typewriter::new(Vec::<String>::new()).step(), None);
}

#[test]
fn cursor_ring_eases_toward_pointer() {
    let mut trail = CursorTrail::default();
    trail.pointer_moved(100.0, 200.0);
    let (x, y) = trail.step(0.15);
    assert!((x - 15.0).abs() < 1e-9 && (y - 30.0).abs() < 1e-9);
    let (x, y) = trail.step(0.15);
    assert!((x - 27.75).abs() < 1e-9 && (y - 55.5).abs() < 1e-9);
    for _ in 0..200 {
        trail.step(0.15);
    }
    assert!((trail.ring.0 - 100.0).abs() < 1e-6);
}

#[test]
fn cursor_needs_markup_and_wide_viewport() {
    assert!(cursor::enabled(true, 992.0, 992.0));
    assert!(!cursor::enabled(true, 991.0, 992.0));
    assert!(!cursor::enabled(false, 1920.0, 992.0));
}

#[test]
fn background_defaults() {
    let cfg = BackgroundConfig::default();
    assert_eq!(cfg.particle_count, 400);
    assert_eq!(cfg.color, 0x7c3aed);
    assert_eq!(cfg.spin_speed, 0.05);
    assert_eq!(cfg.parallax, 0.0001);
    let [r, g, b] = cfg.rgb();
    assert_eq!((r * 255.0).round(), 124.0);
    assert_eq!((g * 255.0).round(), 58.0);
    assert_eq!((b * 255.0).round(), 237.0);
}

#[test]
fn background_overrides_from_data_attributes() {
    let attrs: HashMap<&str, &str> = [
        ("particle-count", "250"),
        ("point-size", "0.3"),
        ("color", "#ff0080"),
        ("opacity", "2.5"),
    ]
    .into();
    let cfg = BackgroundConfig::default().with_overrides(|k| attrs.get(k).map(|v| v.to_string()));
    assert_eq!(cfg.particle_count, 250);
    assert_eq!(cfg.point_size, 0.3);
    assert_eq!(cfg.color, 0xff0080);
    // out of range, kept at default
    assert_eq!(cfg.opacity, 0.8);
}

#[test]
fn hex_colors() {
    assert_eq!(parse_hex_color("0x7c3aed"), Some(0x7c3aed));
    assert_eq!(parse_hex_color(" 7C3AED "), Some(0x7c3aed));
    assert_eq!(parse_hex_color("#fff"), None);
    assert_eq!(parse_hex_color("#zzzzzz"), None);
}
