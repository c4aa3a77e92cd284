//! Playground: every Button option as a form control.
//!
//! The form submits as a GET query string, so any configuration is a
//! shareable URL. Option names are parsed strictly; an unknown name is an
//! error rather than a silently missing class.

use std::str::FromStr;

use maud::{Markup, Render, html};
use serde::Deserialize;
use strum::IntoEnumIterator;
use ui::{Button, ButtonSize, ButtonStyle, ButtonVariant, ElementKind, ParseOptionError};

use super::shared::{code_block, section, section_title, story_header};

pub const PLAYGROUND_PATH: &str = "/stories/button/playground";

/// Query string of the playground page. Empty strings mean "not set".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaygroundQuery {
    pub label: Option<String>,
    pub size: Option<String>,
    pub variant: Option<String>,
    pub style: Option<String>,
    pub element: Option<String>,
    pub href: Option<String>,
    pub class: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub wide: bool,
    #[serde(default)]
    pub block: bool,
    #[serde(default)]
    pub square: bool,
    #[serde(default)]
    pub circle: bool,
    #[serde(default)]
    pub loading: bool,
    #[serde(default)]
    pub disabled: bool,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse<T>(value: &Option<String>) -> Result<Option<T>, ParseOptionError>
where
    T: FromStr<Err = ParseOptionError>,
{
    non_empty(value).map(str::parse).transpose()
}

impl PlaygroundQuery {
    pub fn label(&self) -> &str {
        non_empty(&self.label).unwrap_or("Button")
    }

    pub fn href(&self) -> &str {
        non_empty(&self.href).unwrap_or("#")
    }

    /// Build the configured button, failing on the first unknown option name.
    pub fn button(&self) -> Result<Button, ParseOptionError> {
        let size: ButtonSize = parse(&self.size)?.unwrap_or_default();
        let variant: Option<ButtonVariant> = parse(&self.variant)?;
        let style: ButtonStyle = parse(&self.style)?.unwrap_or_default();
        let element: ElementKind = parse(&self.element)?.unwrap_or_default();

        let mut button = match element {
            ElementKind::Button => Button::new(self.label()).disabled(self.disabled),
            ElementKind::Anchor => Button::link(self.label(), self.href()),
        };
        if let Some(variant) = variant {
            button = button.variant(variant);
        }
        if let Some(class) = non_empty(&self.class) {
            button = button.class(class);
        }

        Ok(button
            .size(size)
            .style(style)
            .active(self.active)
            .wide(self.wide)
            .block(self.block)
            .square(self.square)
            .circle(self.circle)
            .loading(self.loading))
    }
}

fn select<T>(name: &str, current: Option<&str>, allow_none: bool) -> Markup
where
    T: IntoEnumIterator + Into<&'static str>,
{
    html! {
        label class="flex flex-col gap-1 text-xs" {
            span class="opacity-70" { (name) }
            select class="select select-sm" name=(name) {
                @if allow_none {
                    option value="" selected[current.is_none()] { "(none)" }
                }
                @for value in T::iter().map(Into::<&'static str>::into) {
                    option value=(value) selected[current == Some(value)] { (value) }
                }
            }
        }
    }
}

fn checkbox(name: &str, checked: bool) -> Markup {
    html! {
        label class="flex items-center gap-2 text-xs" {
            input type="checkbox" class="checkbox checkbox-sm" name=(name) value="true" checked[checked];
            span { (name) }
        }
    }
}

fn controls(query: &PlaygroundQuery) -> Markup {
    html! {
        form method="get" action=(PLAYGROUND_PATH) class="grid grid-cols-2 gap-4" {
            label class="flex flex-col gap-1 text-xs" {
                span class="opacity-70" { "label" }
                input type="text" class="input input-sm" name="label" value=(query.label());
            }
            label class="flex flex-col gap-1 text-xs" {
                span class="opacity-70" { "class" }
                input type="text" class="input input-sm" name="class" value=[non_empty(&query.class)];
            }
            (select::<ButtonSize>("size", non_empty(&query.size).or(Some("md")), false))
            (select::<ButtonVariant>("variant", non_empty(&query.variant), true))
            (select::<ButtonStyle>("style", non_empty(&query.style).or(Some("default")), false))
            (select::<ElementKind>("element", non_empty(&query.element).or(Some("button")), false))
            label class="flex flex-col gap-1 text-xs" {
                span class="opacity-70" { "href" }
                input type="text" class="input input-sm" name="href" value=(query.href());
            }
            div class="flex flex-wrap gap-4 col-span-2" {
                (checkbox("active", query.active))
                (checkbox("wide", query.wide))
                (checkbox("block", query.block))
                (checkbox("square", query.square))
                (checkbox("circle", query.circle))
                (checkbox("loading", query.loading))
                (checkbox("disabled", query.disabled))
            }
            div class="col-span-2" {
                (Button::new("Apply").size(ButtonSize::Sm).variant(ButtonVariant::Neutral))
            }
        }
    }
}

pub fn playground_story(query: &PlaygroundQuery) -> Result<Markup, ParseOptionError> {
    let button = query.button()?;
    let source = button.render().into_string();

    Ok(html! {
        (story_header("Playground", "Try any combination of options."))

        (section_title("Controls"))
        (section(controls(query)))

        (section_title("Preview"))
        (section(html! {
            div class="flex justify-center p-8" { (button) }
        }))

        (section_title("Class names"))
        (code_block(&button.class_names()))

        (section_title("HTML"))
        (code_block(&source))
    })
}
