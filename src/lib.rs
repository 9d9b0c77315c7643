#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Client-side behaviour for the portfolio page: the animated particle
//! background plus theme, navigation, reveal, lightbox, contact form,
//! typing and cursor effects.
//!
//! Everything outside `wasm` is plain Rust and tested on the host; the
//! `wasm` module only adapts browser events and DOM nodes to it.

pub mod background;
pub mod clock;
pub mod config;
pub mod contact;
pub mod cursor;
pub mod field;
pub mod lightbox;
pub mod nav;
pub mod pointer;
pub mod reveal;
pub mod theme;
pub mod throttle;
pub mod typing;
pub mod view;

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{handle_form_submit, stop_background};
