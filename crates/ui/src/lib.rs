//! Maud/daisyUI components.
//!
//! This crate provides:
//! - The `Button` atom (sizes, colors, styles, link buttons, loading state)
//! - Option enums that parse from their daisyUI names
//! - Base document layout loading Tailwind and daisyUI
//!
//! # Design Principles
//!
//! 1. **daisyUI classes**: components emit daisyUI class tokens (`btn`, `btn-sm`, ...)
//!    and leave styling to the stylesheet
//! 2. **Closed options**: every option axis is an enum; unknown names fail to parse
//! 3. **Element-specific attributes**: `<button>` and `<a>` each get their own attribute set
//! 4. **Pure rendering**: rendering a component twice yields the same HTML
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ui::{Button, ButtonVariant, base_document};
//! use maud::{html, Render};
//!
//! let page = base_document("My Page", html! {
//!     div class="p-8" {
//!         h1 class="text-2xl font-bold mb-4" { "Hello" }
//!         (Button::new("Click me").variant(ButtonVariant::Primary))
//!     }
//! });
//! ```

mod attributes;
mod button;
mod layout;
mod options;

pub use attributes::{AnchorAttrs, Attribute, Attributes, ButtonAttrs, ButtonElement, is_valid_name};
pub use button::{Button, ButtonOptions, button_class_names, loading_spinner};
pub use layout::base_document;
pub use options::{ButtonSize, ButtonStyle, ButtonType, ButtonVariant, ElementKind, ParseOptionError};

/// Tailwind browser build (development CDN).
pub const TAILWIND_CDN: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

/// daisyUI component stylesheet. Its selectors are the class tokens emitted here.
pub const DAISYUI_CDN: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";

/// daisyUI theme stylesheet.
pub const DAISYUI_THEMES_CDN: &str = "https://cdn.jsdelivr.net/npm/daisyui@5/themes.css";

/// Theme applied through `data-theme` on `<html>`.
pub const DEFAULT_THEME: &str = "dark";
