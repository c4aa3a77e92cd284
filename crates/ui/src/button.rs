//! Button atom with daisyUI sizes, colors and styles.
//!
//! ```rust,ignore
//! use ui::{Button, ButtonSize, ButtonVariant};
//!
//! Button::new("Save")
//!     .size(ButtonSize::Sm)
//!     .variant(ButtonVariant::Primary)
//!     .render();
//!
//! Button::link("About", "/about").render();
//! ```

use maud::{Markup, Render, html};

use crate::attributes::{AnchorAttrs, ButtonElement};
use crate::options::{ButtonSize, ButtonStyle, ButtonType, ButtonVariant, ElementKind};

/// Class-affecting configuration of a button, independent of the element it
/// renders as.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonOptions {
    pub size: ButtonSize,
    pub variant: Option<ButtonVariant>,
    pub style: ButtonStyle,
    pub active: bool,
    pub wide: bool,
    pub block: bool,
    pub square: bool,
    pub circle: bool,
    pub loading: bool,
    /// Extra class names appended verbatim.
    pub class: String,
}

/// Compose the class string for a button.
///
/// Order is fixed: `btn`, size, variant, style, then `active`, `wide`,
/// `block`, `square`, `circle`, then the caller's classes, verbatim. Empty
/// tokens are dropped; duplicates are kept.
pub fn button_class_names(options: &ButtonOptions) -> String {
    let flags = [
        (options.active, "btn-active"),
        (options.wide, "btn-wide"),
        (options.block, "btn-block"),
        (options.square, "btn-square"),
        (options.circle, "btn-circle"),
    ];

    let tokens = [
        Some("btn"),
        Some(options.size.class()),
        options.variant.map(ButtonVariant::class),
        options.style.class(),
    ]
    .into_iter()
    .flatten()
    .chain(flags.into_iter().filter(|(on, _)| *on).map(|(_, token)| token))
    .chain(Some(options.class.as_str()));

    tokens
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The daisyUI loading indicator shown before the content of a loading button.
pub fn loading_spinner() -> Markup {
    html! {
        span class="loading loading-spinner" {}
    }
}

/// A styled button rendered as `<button>` or `<a role="button">`.
#[derive(Debug, Clone, Default)]
pub struct Button {
    options: ButtonOptions,
    element: ButtonElement,
    content: Option<Markup>,
}

impl Button {
    /// Create a `<button>` with the given content.
    pub fn new(content: impl Render) -> Self {
        Self::default().content(content)
    }

    /// Create an `<a role="button">` pointing at `href`.
    pub fn link(content: impl Render, href: impl Into<String>) -> Self {
        Self::with_element(ButtonElement::Anchor(AnchorAttrs::new(href))).content(content)
    }

    /// Create a button with no content for an explicit element.
    pub fn with_element(element: ButtonElement) -> Self {
        Self {
            options: ButtonOptions::default(),
            element,
            content: None,
        }
    }

    /// Replace the class-affecting options wholesale.
    pub fn options(mut self, options: ButtonOptions) -> Self {
        self.options = options;
        self
    }

    pub fn content(mut self, content: impl Render) -> Self {
        self.content = Some(content.render());
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.options.size = size;
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.options.variant = Some(variant);
        self
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.options.style = style;
        self
    }

    /// Append extra class names after the generated ones.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.options.class = class.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.options.active = active;
        self
    }

    /// Wider, with more horizontal padding.
    pub fn wide(mut self, wide: bool) -> Self {
        self.options.wide = wide;
        self
    }

    /// Full width.
    pub fn block(mut self, block: bool) -> Self {
        self.options.block = block;
        self
    }

    /// 1:1 ratio.
    pub fn square(mut self, square: bool) -> Self {
        self.options.square = square;
        self
    }

    /// 1:1 ratio with rounded corners.
    pub fn circle(mut self, circle: bool) -> Self {
        self.options.circle = circle;
        self
    }

    /// Show a loading spinner before the content.
    pub fn loading(mut self, loading: bool) -> Self {
        self.options.loading = loading;
        self
    }

    /// Add a passthrough attribute (`aria-*`, `data-*`, `hx-*`, `id`, ...).
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.element.global_mut().push(name, value);
        self
    }

    /// Add a boolean passthrough attribute.
    pub fn bool_attr(mut self, name: impl Into<String>) -> Self {
        self.element.global_mut().push_bool(name);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        match &mut self.element {
            ButtonElement::Button(attrs) => attrs.disabled = disabled,
            ButtonElement::Anchor(_) => ignored_on_anchor("disabled"),
        }
        self
    }

    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        match &mut self.element {
            ButtonElement::Button(attrs) => attrs.button_type = Some(button_type),
            ButtonElement::Anchor(_) => ignored_on_anchor("type"),
        }
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        match &mut self.element {
            ButtonElement::Button(attrs) => attrs.name = Some(name.into()),
            ButtonElement::Anchor(_) => ignored_on_anchor("name"),
        }
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        match &mut self.element {
            ButtonElement::Button(attrs) => attrs.value = Some(value.into()),
            ButtonElement::Anchor(_) => ignored_on_anchor("value"),
        }
        self
    }

    pub fn form(mut self, form: impl Into<String>) -> Self {
        match &mut self.element {
            ButtonElement::Button(attrs) => attrs.form = Some(form.into()),
            ButtonElement::Anchor(_) => ignored_on_anchor("form"),
        }
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        match &mut self.element {
            ButtonElement::Anchor(attrs) => attrs.target = Some(target.into()),
            ButtonElement::Button(_) => ignored_on_button("target"),
        }
        self
    }

    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        match &mut self.element {
            ButtonElement::Anchor(attrs) => attrs.rel = Some(rel.into()),
            ButtonElement::Button(_) => ignored_on_button("rel"),
        }
        self
    }

    pub fn download(mut self, filename: impl Into<String>) -> Self {
        match &mut self.element {
            ButtonElement::Anchor(attrs) => attrs.download = Some(filename.into()),
            ButtonElement::Button(_) => ignored_on_button("download"),
        }
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.element.kind()
    }

    pub fn element(&self) -> &ButtonElement {
        &self.element
    }

    pub fn button_options(&self) -> &ButtonOptions {
        &self.options
    }

    /// The final class string, see [`button_class_names`].
    pub fn class_names(&self) -> String {
        button_class_names(&self.options)
    }
}

fn ignored_on_anchor(attr: &str) {
    tracing::debug!(attr, "attribute only applies to <button>, ignoring on <a>");
}

fn ignored_on_button(attr: &str) {
    tracing::debug!(attr, "attribute only applies to <a>, ignoring on <button>");
}

impl Render for Button {
    fn render_to(&self, buffer: &mut String) {
        self.element.open_tag(&self.class_names(), buffer);
        if self.options.loading {
            loading_spinner().render_to(buffer);
        }
        if let Some(content) = &self.content {
            content.render_to(buffer);
        }
        self.element.close_tag(buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    const SPINNER: &str = r#"<span class="loading loading-spinner"></span>"#;

    #[test]
    fn test_default_classes() {
        assert_eq!(Button::new("Default").class_names(), "btn btn-md");
        assert_eq!(button_class_names(&ButtonOptions::default()), "btn btn-md");
    }

    #[test]
    fn test_size_variant_active() {
        let button = Button::new("x")
            .size(ButtonSize::Sm)
            .variant(ButtonVariant::Primary)
            .active(true);
        assert_eq!(button.class_names(), "btn btn-sm btn-primary btn-active");
    }

    #[test]
    fn test_style_variant_extra_class() {
        let button = Button::new("x")
            .style(ButtonStyle::Outline)
            .variant(ButtonVariant::Error)
            .class("mt-2");
        assert_eq!(button.class_names(), "btn btn-md btn-error btn-outline mt-2");
    }

    #[test]
    fn test_flag_order_is_fixed() {
        // Set in reverse to show the builder call order doesn't matter.
        let button = Button::default()
            .circle(true)
            .square(true)
            .block(true)
            .wide(true)
            .active(true)
            .style(ButtonStyle::Ghost)
            .size(ButtonSize::Xl);
        assert_eq!(
            button.class_names(),
            "btn btn-xl btn-ghost btn-active btn-wide btn-block btn-square btn-circle"
        );
    }

    #[test]
    fn test_loading_adds_no_class() {
        assert_eq!(Button::new("x").loading(true).class_names(), "btn btn-md");
    }

    #[test]
    fn test_default_style_and_missing_variant_add_nothing() {
        for size in ButtonSize::iter() {
            let names = Button::new("x").size(size).style(ButtonStyle::Default).class_names();
            assert_eq!(names, format!("btn {}", size.class()));
        }
    }

    #[test]
    fn test_every_combination_has_expected_tokens() {
        for size in ButtonSize::iter() {
            for style in ButtonStyle::iter() {
                let variants = ButtonVariant::iter().map(Some).chain([None]);
                for variant in variants {
                    let options = ButtonOptions {
                        size,
                        variant,
                        style,
                        active: true,
                        square: true,
                        ..Default::default()
                    };
                    let mut expected = vec!["btn", size.class()];
                    expected.extend(variant.map(ButtonVariant::class));
                    expected.extend(style.class());
                    expected.extend(["btn-active", "btn-square"]);
                    assert_eq!(button_class_names(&options), expected.join(" "));
                }
            }
        }
    }

    #[test]
    fn test_duplicates_are_kept() {
        let button = Button::new("x").size(ButtonSize::Lg).class("btn-lg");
        assert_eq!(button.class_names(), "btn btn-lg btn-lg");
    }

    #[test]
    fn test_extra_class_is_appended_verbatim() {
        assert_eq!(Button::new("x").class("").class_names(), "btn btn-md");
        assert_eq!(Button::new("x").class(" mt-2 ").class_names(), "btn btn-md  mt-2 ");
        assert_eq!(Button::new("x").class("   ").class_names(), "btn btn-md    ");
    }

    #[test]
    fn test_repeated_attr_last_value_wins() {
        let html = Button::new("x")
            .attr("id", "a")
            .attr("id", "b")
            .attr("ID", "c")
            .render()
            .into_string();
        assert_eq!(html, r#"<button class="btn btn-md" ID="c">x</button>"#);
    }

    #[test]
    fn test_renders_native_button() {
        let html = Button::new("Click me").render().into_string();
        assert_eq!(html, r#"<button class="btn btn-md">Click me</button>"#);
    }

    #[test]
    fn test_renders_link_with_role() {
        let html = Button::link("Link", "#").render().into_string();
        assert_eq!(html, r##"<a class="btn btn-md" href="#" role="button">Link</a>"##);
    }

    #[test]
    fn test_loading_spinner_precedes_content() {
        let html = Button::new("Loading").loading(true).render().into_string();
        assert_eq!(
            html,
            format!(r#"<button class="btn btn-md">{SPINNER}Loading</button>"#)
        );
        assert_eq!(html.matches(SPINNER).count(), 1);

        let html = Button::new("Idle").render().into_string();
        assert!(!html.contains("loading"));
    }

    #[test]
    fn test_loading_without_content() {
        let html = Button::default().square(true).loading(true).render().into_string();
        assert_eq!(
            html,
            format!(r#"<button class="btn btn-md btn-square">{SPINNER}</button>"#)
        );
    }

    #[test]
    fn test_text_content_is_escaped() {
        let html = Button::new("<script>").render().into_string();
        assert_eq!(html, r#"<button class="btn btn-md">&lt;script&gt;</button>"#);
    }

    #[test]
    fn test_markup_content_is_kept() {
        let icon = html! { svg class="size-[1.2em]" {} " Like" };
        let html = Button::new(icon).render().into_string();
        assert_eq!(
            html,
            r#"<button class="btn btn-md"><svg class="size-[1.2em]"></svg> Like</button>"#
        );
    }

    #[test]
    fn test_passthrough_attributes() {
        let html = Button::new("Disabled using class name")
            .class("btn-disabled")
            .attr("tabindex", "-1")
            .attr("aria-disabled", "true")
            .render()
            .into_string();
        assert_eq!(
            html,
            r#"<button class="btn btn-md btn-disabled" tabindex="-1" aria-disabled="true">Disabled using class name</button>"#
        );

        let html = Button::new("Save")
            .button_type(ButtonType::Submit)
            .disabled(true)
            .attr("hx-post", "/save")
            .render()
            .into_string();
        assert_eq!(
            html,
            r#"<button class="btn btn-md" type="submit" disabled hx-post="/save">Save</button>"#
        );
    }

    #[test]
    fn test_kind_specific_setters_ignore_other_kind() {
        let link = Button::link("Docs", "/docs").disabled(true).name("x").target("_blank");
        assert_eq!(
            link.render().into_string(),
            r#"<a class="btn btn-md" href="/docs" target="_blank" role="button">Docs</a>"#
        );

        let button = Button::new("Go").rel("noopener").download("file.txt");
        assert_eq!(
            button.render().into_string(),
            r#"<button class="btn btn-md">Go</button>"#
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(Button::new("x").kind(), ElementKind::Button);
        assert_eq!(Button::link("x", "/").kind(), ElementKind::Anchor);
        assert_eq!(Button::default().kind(), ElementKind::Button);
    }

    #[test]
    fn test_render_is_idempotent() {
        let button = Button::link("Repeat", "/r")
            .variant(ButtonVariant::Info)
            .loading(true)
            .attr("data-x", "1");
        assert_eq!(button.render().into_string(), button.render().into_string());
        assert_eq!(button.class_names(), button.class_names());
    }
}
