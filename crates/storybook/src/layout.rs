//! Storybook page layout: sidebar navigation plus the hot reload script.

use actix_web::http::StatusCode;
use maud::{Markup, PreEscaped, html};

use crate::stories::{PLAYGROUND_PATH, STORIES};

/// Slug used to highlight the playground entry.
pub const PLAYGROUND_SLUG: &str = "playground";

/// Reconnects to `/__ws_reload` and reloads the page once the server is back.
const RELOAD_SCRIPT: &str = r#"
(function() {
    var wasConnected = false;
    function connect() {
        var ws = new WebSocket('ws://' + location.host + '/__ws_reload');
        ws.onopen = function() {
            if (wasConnected) location.reload();
            wasConnected = true;
        };
        ws.onclose = function() {
            setTimeout(connect, 500);
        };
    }
    connect();
})();
"#;

pub fn sidebar_nav(active_story: &str) -> Markup {
    let link_class = |name: &str| {
        if active_story == name {
            "block px-2 py-1 bg-base-300 font-medium"
        } else {
            "block px-2 py-1 opacity-70 hover:opacity-100 hover:bg-base-200"
        }
    };

    html! {
        aside class="fixed top-0 left-0 bottom-0 w-48 border-r border-base-300 overflow-y-auto p-3 bg-base-100 z-50" {
            h1 class="font-bold mb-3" { "Storybook" }
            nav {
                h2 class="uppercase opacity-60 mb-1 mt-3 pl-1 tracking-wide text-xs" { "Atoms / Button" }
                @for story in STORIES {
                    a href=(story.path()) class=(link_class(story.slug)) { (story.title) }
                }
                h2 class="uppercase opacity-60 mb-1 mt-4 pl-1 tracking-wide text-xs" { "Tools" }
                a href=(PLAYGROUND_PATH) class=(link_class(PLAYGROUND_SLUG)) { "Playground" }
            }
        }
    }
}

pub fn base_layout(title: &str, active_story: &str, content: Markup) -> Markup {
    let body = html! {
        (sidebar_nav(active_story))

        main class="ml-48 min-h-screen overflow-y-auto p-8" {
            (content)
        }

        // Hot reload WebSocket - reconnects on server restart
        script { (PreEscaped(RELOAD_SCRIPT)) }
    };

    ui::base_document(&format!("{title} - Storybook"), body)
}

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let title = status.canonical_reason().unwrap_or("Error");
    base_layout(
        title,
        "",
        html! {
            h1 class="text-2xl font-bold mb-2" { (status.as_u16()) " " (title) }
            p class="text-sm text-error" { (message) }
        },
    )
}
