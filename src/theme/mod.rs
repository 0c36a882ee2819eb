//! Theme mode handling and stylesheet generation.
//!
//! This module provides:
//!
//! - [`ThemeController`]: light / dark / system preference with persistence
//! - [`ColorMode`]: a resolved light or dark mode, detected from the OS
//! - [`ThemeColors`]: the default light and dark palettes
//! - [`generate_theme_css`]: the custom-property stylesheet read by the
//!   `css-variables` adapter
//!
//! System detection goes through a process-wide detector that tests and
//! hosts can replace with [`set_theme_detector`].

mod colors;
mod controller;
mod css;
mod detect;

pub use colors::ThemeColors;
pub use controller::{
    MemoryStorage, RootAttributes, ThemeController, ThemeMode, ThemeOptions, ThemeStorage,
};
pub use css::generate_theme_css;
pub use detect::{detect_color_mode, reset_theme_detector, set_theme_detector, ColorMode};
