//! Story registry.

pub mod button;
pub mod icons;
pub mod playground;
pub mod shared;

use maud::Markup;

pub use playground::{PLAYGROUND_PATH, PlaygroundQuery, playground_story};

/// A static story page.
pub struct Story {
    pub slug: &'static str,
    pub title: &'static str,
    pub render: fn() -> Markup,
}

impl Story {
    pub fn path(&self) -> String {
        format!("/stories/button/{}", self.slug)
    }
}

pub const STORIES: &[Story] = &[
    Story { slug: "default", title: "Default", render: button::default_story },
    Story { slug: "sizes", title: "Sizes", render: button::sizes_story },
    Story { slug: "responsive", title: "Responsive", render: button::responsive_story },
    Story { slug: "colors", title: "Colors", render: button::colors_story },
    Story { slug: "soft", title: "Soft", render: button::soft_story },
    Story { slug: "outline", title: "Outline", render: button::outline_story },
    Story { slug: "dash", title: "Dash", render: button::dash_story },
    Story { slug: "active", title: "Active", render: button::active_story },
    Story { slug: "ghost-and-link", title: "Ghost and Link", render: button::ghost_and_link_story },
    Story { slug: "wide", title: "Wide", render: button::wide_story },
    Story { slug: "block", title: "Block", render: button::block_story },
    Story { slug: "disabled", title: "Disabled", render: button::disabled_story },
    Story { slug: "square-and-circle", title: "Square and Circle", render: button::square_and_circle_story },
    Story { slug: "with-icon", title: "With Icon", render: button::with_icon_story },
    Story { slug: "loading", title: "Loading", render: button::loading_story },
    Story { slug: "link-button", title: "Link Button", render: button::link_button_story },
    Story { slug: "login-buttons", title: "Login Buttons", render: button::login_buttons_story },
];

pub fn find(slug: &str) -> Option<&'static Story> {
    STORIES.iter().find(|story| story.slug == slug)
}
