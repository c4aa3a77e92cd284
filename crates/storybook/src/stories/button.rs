//! Button stories, one per daisyUI button feature.

use maud::{Markup, Render, html};
use strum::IntoEnumIterator;
use ui::{Button, ButtonSize, ButtonStyle, ButtonVariant};

use super::icons;
use super::shared::{code_block, item, row, section, section_title, story_header};

/// A row with the plain button followed by every color variant, all in `style`.
fn variant_row(style: ButtonStyle) -> Markup {
    row(html! {
        (Button::new("Default").style(style))
        @for variant in ButtonVariant::iter() {
            (Button::new(variant.label()).style(style).variant(variant))
        }
    })
}

pub fn default_story() -> Markup {
    html! {
        (story_header("Button", "Buttons allow the user to take actions or make choices."))

        (section_title("Default"))
        (section(row(html! {
            (Button::new("Default"))
        })))

        (section_title("Usage"))
        (code_block(r#"use ui::{Button, ButtonVariant};

Button::new("Default")
Button::new("Primary").variant(ButtonVariant::Primary)"#))
    }
}

pub fn sizes_story() -> Markup {
    html! {
        (story_header("Sizes", "Five predefined sizes; medium is the default."))

        (section(row(html! {
            @for size in ButtonSize::iter() {
                (item(size.class(), Button::new(size.label()).size(size).render()))
            }
        })))

        (code_block(r#"Button::new("Xsmall").size(ButtonSize::Xs)
Button::new("Small").size(ButtonSize::Sm)
Button::new("Medium")
Button::new("Large").size(ButtonSize::Lg)
Button::new("Xlarge").size(ButtonSize::Xl)"#))
    }
}

pub fn responsive_story() -> Markup {
    let classes = "btn-xs sm:btn-sm md:btn-md lg:btn-lg xl:btn-xl";
    html! {
        (story_header("Responsive", "Extra classes are appended verbatim, so responsive size prefixes work."))

        (section(row(html! {
            (Button::new("Responsive").class(classes))
        })))

        (code_block(r#"Button::new("Responsive").class("btn-xs sm:btn-sm md:btn-md lg:btn-lg xl:btn-xl")"#))
    }
}

pub fn colors_story() -> Markup {
    html! {
        (story_header("Colors", "Eight color variants. Without a variant no color class is added."))

        (section(row(html! {
            @for variant in ButtonVariant::iter() {
                (Button::new(variant.label()).variant(variant))
            }
        })))

        (code_block(r#"Button::new("Primary").variant(ButtonVariant::Primary)"#))
    }
}

pub fn soft_story() -> Markup {
    html! {
        (story_header("Soft", "Soft style with every color variant."))
        (section(variant_row(ButtonStyle::Soft)))
        (code_block(r#"Button::new("Primary").style(ButtonStyle::Soft).variant(ButtonVariant::Primary)"#))
    }
}

pub fn outline_story() -> Markup {
    html! {
        (story_header("Outline", "Outline style with every color variant."))
        (section(variant_row(ButtonStyle::Outline)))
        (code_block(r#"Button::new("Primary").style(ButtonStyle::Outline).variant(ButtonVariant::Primary)"#))
    }
}

pub fn dash_story() -> Markup {
    html! {
        (story_header("Dash", "Dashed border style with every color variant."))
        (section(variant_row(ButtonStyle::Dash)))
        (code_block(r#"Button::new("Primary").style(ButtonStyle::Dash).variant(ButtonVariant::Primary)"#))
    }
}

pub fn active_story() -> Markup {
    html! {
        (story_header("Active", "Forces the active look."))

        (section(row(html! {
            (Button::new("Default").active(true))
            @for variant in ButtonVariant::iter() {
                (Button::new(variant.label()).active(true).variant(variant))
            }
        })))

        (code_block(r#"Button::new("Primary").active(true).variant(ButtonVariant::Primary)"#))
    }
}

pub fn ghost_and_link_story() -> Markup {
    html! {
        (story_header("Ghost and Link", "Low emphasis styles."))

        (section(row(html! {
            (Button::new("Ghost").style(ButtonStyle::Ghost))
            (Button::new("Link").style(ButtonStyle::Link))
        })))

        (code_block(r#"Button::new("Ghost").style(ButtonStyle::Ghost)
Button::new("Link").style(ButtonStyle::Link)"#))
    }
}

pub fn wide_story() -> Markup {
    html! {
        (story_header("Wide", "More horizontal padding."))
        (section(row(html! { (Button::new("Wide").wide(true)) })))
        (code_block(r#"Button::new("Wide").wide(true)"#))
    }
}

pub fn block_story() -> Markup {
    html! {
        (story_header("Block", "Full width of the container."))
        (section(html! { (Button::new("Block").block(true)) }))
        (code_block(r#"Button::new("Block").block(true)"#))
    }
}

pub fn disabled_story() -> Markup {
    html! {
        (story_header("Disabled", "Through the native attribute, or through a class for elements that have none."))

        (section(row(html! {
            (Button::new("Disabled using attribute").disabled(true))
            (Button::new("Disabled using class name")
                .class("btn-disabled")
                .attr("tabindex", "-1")
                .attr("aria-disabled", "true"))
        })))

        (code_block(r#"Button::new("Disabled using attribute").disabled(true)

Button::new("Disabled using class name")
    .class("btn-disabled")
    .attr("tabindex", "-1")
    .attr("aria-disabled", "true")"#))
    }
}

pub fn square_and_circle_story() -> Markup {
    html! {
        (story_header("Square and Circle", "1:1 buttons for icons."))

        (section(row(html! {
            (Button::new(icons::heart()).square(true))
            (Button::new(icons::heart()).circle(true))
        })))

        (code_block(r#"Button::new(icon).square(true)
Button::new(icon).circle(true)"#))
    }
}

pub fn with_icon_story() -> Markup {
    html! {
        (story_header("With Icon", "Content is any markup, so icons go before or after the label."))

        (section(row(html! {
            (Button::new(html! { (icons::heart()) "Like" }))
            (Button::new(html! { "Like" (icons::heart()) }))
        })))

        (code_block(r#"Button::new(html! { (icon) "Like" })
Button::new(html! { "Like" (icon) })"#))
    }
}

pub fn loading_story() -> Markup {
    html! {
        (story_header("Loading", "A spinner is rendered before the content."))

        (section(row(html! {
            (Button::default().square(true).loading(true))
            (Button::new("Loading").loading(true))
        })))

        (code_block(r#"Button::default().square(true).loading(true)
Button::new("Loading").loading(true)"#))
    }
}

pub fn link_button_story() -> Markup {
    html! {
        (story_header("Link Button", "Rendered as an anchor with role=\"button\"."))
        (section(row(html! { (Button::link("Link", "#")) })))
        (code_block(r##"Button::link("Link", "#")"##))
    }
}

pub fn login_buttons_story() -> Markup {
    html! {
        (story_header("Login Buttons", "Brand buttons built from extra classes and icons."))

        (section(html! {
            div class="grid gap-4 w-64" {
                (Button::new(html! { (icons::email()) "Login with Email" })
                    .class("bg-white text-black border-[#e5e5e5]"))
                (Button::new(html! { (icons::github()) "Login with GitHub" })
                    .class("bg-black text-white border-black"))
                (Button::new(html! { (icons::google()) "Login with Google" })
                    .class("bg-white text-black border-[#e5e5e5]"))
                (Button::new(html! { (icons::facebook()) "Login with Facebook" })
                    .class("bg-[#1A77F2] text-white border-[#005fd8]"))
            }
        }))

        (code_block(r##"Button::new(html! { (github_icon) "Login with GitHub" })
    .class("bg-black text-white border-black")"##))
    }
}
