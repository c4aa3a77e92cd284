//! Base document layout with Tailwind and daisyUI.

use maud::{DOCTYPE, Markup, html};

use crate::{DAISYUI_CDN, DAISYUI_THEMES_CDN, DEFAULT_THEME, TAILWIND_CDN};

/// Render a base HTML document with Tailwind and daisyUI.
///
/// # Examples
///
/// ```
/// use ui::base_document;
/// use maud::html;
///
/// let page = base_document("My App", html! {
///     div class="p-8" {
///         h1 class="text-2xl font-bold" { "Welcome" }
///     }
/// });
/// assert!(page.into_string().starts_with("<!DOCTYPE html>"));
/// ```
pub fn base_document(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" data-theme=(DEFAULT_THEME) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link href=(DAISYUI_CDN) rel="stylesheet" type="text/css";
                link href=(DAISYUI_THEMES_CDN) rel="stylesheet" type="text/css";
                script src=(TAILWIND_CDN) {}
            }
            body class="min-h-screen bg-base-100 text-base-content antialiased" {
                (body)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_loads_stylesheets() {
        let html = base_document("Buttons", html! { p { "hi" } }).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Buttons</title>"));
        assert!(html.contains(r#"data-theme="dark""#));
        assert!(html.contains(DAISYUI_CDN));
        assert!(html.contains(TAILWIND_CDN));
        assert!(html.contains("<p>hi</p>"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = base_document("a < b", html! {}).into_string();
        assert!(html.contains("<title>a &lt; b</title>"));
    }
}
