//! Layout helpers shared by the stories.

use maud::{Markup, html};

pub fn story_header(title: &str, description: &str) -> Markup {
    html! {
        h1 class="text-2xl font-bold mb-2 pb-2 border-b border-base-300" { (title) }
        p class="text-sm opacity-70 mb-6" { (description) }
    }
}

pub fn section_title(title: &str) -> Markup {
    html! {
        h2 class="text-base font-medium opacity-70 mt-8 mb-4" { (title) }
    }
}

pub fn section(content: Markup) -> Markup {
    html! {
        div class="p-4 border border-base-300 bg-base-200 mb-4" {
            (content)
        }
    }
}

/// Wrapping row of examples.
pub fn row(content: Markup) -> Markup {
    html! {
        div class="flex flex-wrap items-center gap-2" {
            (content)
        }
    }
}

/// Labelled example inside a row.
pub fn item(label: &str, content: Markup) -> Markup {
    html! {
        div class="flex flex-col items-start gap-1" {
            span class="text-xs opacity-60" { (label) }
            (content)
        }
    }
}

pub fn code_block(code: &str) -> Markup {
    html! {
        pre class="text-xs bg-base-300 border border-base-300 p-4 overflow-x-auto" {
            code { (code) }
        }
    }
}
