use crate::config::PageConfig;

/// Stagger delay for an element at `index` among its animated siblings.
pub fn stagger_delay_ms(index: Option<usize>, config: &PageConfig) -> u32 {
    match index {
        Some(i) => (i as u32)
            .saturating_mul(config.reveal_step_ms)
            .min(config.reveal_max_ms),
        None => 0,
    }
}

/// `transition-delay` and reveal timeout for the `i`th hero item.
pub fn hero_timing(index: usize) -> (String, i32) {
    let delay = format!("{}s", index as f64 * 0.12);
    (delay, 100 + index as i32 * 120)
}
