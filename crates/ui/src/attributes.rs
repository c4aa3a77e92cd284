//! Native attributes forwarded onto a rendered button element.
//!
//! `<button>` and `<a>` accept different attribute sets, so each element kind
//! gets its own struct and [`ButtonElement`] selects between them. Attributes
//! that both share (`id`, `title`, `tabindex`, `aria-*`, `data-*`, `hx-*`, ...)
//! live in an ordered [`Attributes`] list on either side.

use maud::Render;

use crate::options::{ButtonType, ElementKind};

/// A single passthrough attribute. `value: None` renders as a boolean
/// attribute (`hidden`, `autofocus`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

/// Ordered list of passthrough attributes, rendered in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<Attribute>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute. A name already present (ASCII case-insensitive)
    /// keeps its position and takes the new value.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.set(Attribute {
            name: name.into(),
            value: Some(value.into()),
        });
    }

    pub fn push_bool(&mut self, name: impl Into<String>) {
        self.set(Attribute {
            name: name.into(),
            value: None,
        });
    }

    fn set(&mut self, attr: Attribute) {
        match self
            .0
            .iter_mut()
            .find(|existing| existing.name.eq_ignore_ascii_case(&attr.name))
        {
            Some(existing) => *existing = attr,
            None => self.0.push(attr),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.0.iter().find(|attr| attr.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Write every attribute whose name is legal and not in `reserved`.
    fn render_to(&self, reserved: &[&str], buffer: &mut String) {
        for attr in &self.0 {
            if !is_valid_name(&attr.name) {
                tracing::warn!(name = %attr.name, "skipping invalid attribute name");
                continue;
            }
            if reserved.iter().any(|r| r.eq_ignore_ascii_case(&attr.name)) {
                tracing::warn!(name = %attr.name, "skipping reserved attribute");
                continue;
            }
            write_attr(buffer, &attr.name, attr.value.as_deref());
        }
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.push(name, value);
        }
        attrs
    }
}

/// Attribute names must start with a letter, `@` or `:` (Alpine/HTMX style
/// shorthands) and contain only ASCII alphanumerics and `-_.:@`.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '@' || first == ':')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '@'))
}

/// Write ` name="value"` (or ` name` for boolean attributes), escaping the value.
pub(crate) fn write_attr(buffer: &mut String, name: &str, value: Option<&str>) {
    buffer.push(' ');
    buffer.push_str(name);
    if let Some(value) = value {
        buffer.push_str("=\"");
        value.render_to(buffer);
        buffer.push('"');
    }
}

/// Attributes legal on a native `<button>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonAttrs {
    pub button_type: Option<ButtonType>,
    pub disabled: bool,
    pub name: Option<String>,
    pub value: Option<String>,
    pub form: Option<String>,
    pub global: Attributes,
}

impl ButtonAttrs {
    fn render_to(&self, buffer: &mut String) {
        if let Some(button_type) = self.button_type {
            write_attr(buffer, "type", Some(button_type.into()));
        }
        if self.disabled {
            write_attr(buffer, "disabled", None);
        }
        if let Some(name) = &self.name {
            write_attr(buffer, "name", Some(name));
        }
        if let Some(value) = &self.value {
            write_attr(buffer, "value", Some(value));
        }
        if let Some(form) = &self.form {
            write_attr(buffer, "form", Some(form));
        }
        self.global.render_to(
            &["class", "type", "disabled", "name", "value", "form"],
            buffer,
        );
    }
}

/// Attributes legal on an `<a>`. `href` is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorAttrs {
    pub href: String,
    pub target: Option<String>,
    pub rel: Option<String>,
    pub download: Option<String>,
    pub global: Attributes,
}

impl AnchorAttrs {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            target: None,
            rel: None,
            download: None,
            global: Attributes::new(),
        }
    }

    fn render_to(&self, buffer: &mut String) {
        write_attr(buffer, "href", Some(&self.href));
        if let Some(target) = &self.target {
            write_attr(buffer, "target", Some(target));
        }
        if let Some(rel) = &self.rel {
            write_attr(buffer, "rel", Some(rel));
        }
        if let Some(download) = &self.download {
            write_attr(buffer, "download", Some(download));
        }
        self.global.render_to(
            &["class", "role", "href", "target", "rel", "download"],
            buffer,
        );
    }
}

/// The element a button renders as, carrying only that element's attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonElement {
    Button(ButtonAttrs),
    Anchor(AnchorAttrs),
}

impl Default for ButtonElement {
    fn default() -> Self {
        ButtonElement::Button(ButtonAttrs::default())
    }
}

impl ButtonElement {
    pub fn kind(&self) -> ElementKind {
        match self {
            ButtonElement::Button(_) => ElementKind::Button,
            ButtonElement::Anchor(_) => ElementKind::Anchor,
        }
    }

    pub fn global(&self) -> &Attributes {
        match self {
            ButtonElement::Button(attrs) => &attrs.global,
            ButtonElement::Anchor(attrs) => &attrs.global,
        }
    }

    pub fn global_mut(&mut self) -> &mut Attributes {
        match self {
            ButtonElement::Button(attrs) => &mut attrs.global,
            ButtonElement::Anchor(attrs) => &mut attrs.global,
        }
    }

    /// Write the opening tag: `class` first, then the element's own
    /// attributes, then passthrough attributes, then `role` for anchors.
    pub(crate) fn open_tag(&self, class: &str, buffer: &mut String) {
        buffer.push('<');
        buffer.push_str(self.kind().tag());
        write_attr(buffer, "class", Some(class));
        match self {
            ButtonElement::Button(attrs) => attrs.render_to(buffer),
            ButtonElement::Anchor(attrs) => {
                attrs.render_to(buffer);
                write_attr(buffer, "role", Some("button"));
            }
        }
        buffer.push('>');
    }

    pub(crate) fn close_tag(&self, buffer: &mut String) {
        buffer.push_str("</");
        buffer.push_str(self.kind().tag());
        buffer.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn open(element: &ButtonElement) -> String {
        let mut buffer = String::new();
        element.open_tag("btn", &mut buffer);
        buffer
    }

    #[test]
    fn test_attribute_names() {
        assert!(is_valid_name("aria-label"));
        assert!(is_valid_name("data-id"));
        assert!(is_valid_name("hx-post"));
        assert!(is_valid_name("@click"));
        assert!(is_valid_name(":class"));
        assert!(is_valid_name("x-on:click.prevent"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("1abc"));
        assert!(!is_valid_name("on click"));
        assert!(!is_valid_name("a\"b"));
        assert!(!is_valid_name("a>b"));
    }

    #[test]
    fn test_button_attrs_order() {
        let mut attrs = ButtonAttrs {
            button_type: Some(ButtonType::Submit),
            disabled: true,
            name: Some("action".into()),
            value: Some("save".into()),
            ..Default::default()
        };
        attrs.global.push("aria-label", "Save");
        assert_eq!(
            open(&ButtonElement::Button(attrs)),
            r#"<button class="btn" type="submit" disabled name="action" value="save" aria-label="Save">"#
        );
    }

    #[test]
    fn test_anchor_gets_role_last() {
        let mut attrs = AnchorAttrs::new("/about");
        attrs.target = Some("_blank".into());
        attrs.global.push("role", "link");
        assert_eq!(
            open(&ButtonElement::Anchor(attrs)),
            r#"<a class="btn" href="/about" target="_blank" role="button">"#
        );
    }

    #[test]
    fn test_values_are_escaped() {
        let mut attrs = AnchorAttrs::new("/search?q=a&b=\"c\"");
        attrs.global.push("title", "<b>");
        assert_eq!(
            open(&ButtonElement::Anchor(attrs)),
            r#"<a class="btn" href="/search?q=a&amp;b=&quot;c&quot;" title="&lt;b&gt;" role="button">"#
        );
    }

    #[test]
    fn test_invalid_and_reserved_names_are_skipped() {
        let mut attrs = ButtonAttrs::default();
        attrs.global.push("class", "ignored");
        attrs.global.push("bad name", "x");
        attrs.global.push_bool("autofocus");
        assert_eq!(
            open(&ButtonElement::Button(attrs)),
            r#"<button class="btn" autofocus>"#
        );
    }

    #[test]
    fn test_repeated_name_replaces_in_place() {
        let mut attrs = ButtonAttrs::default();
        attrs.global.push("id", "a");
        attrs.global.push("title", "t");
        attrs.global.push("id", "b");
        attrs.global.push("ID", "c");
        attrs.global.push("hidden", "x");
        attrs.global.push_bool("HIDDEN");
        assert_eq!(attrs.global.len(), 3);
        assert_eq!(
            open(&ButtonElement::Button(attrs)),
            r#"<button class="btn" ID="c" title="t" HIDDEN>"#
        );
    }

    #[test]
    fn test_collect_attributes() {
        let attrs: Attributes = [("id", "save"), ("tabindex", "-1")].into_iter().collect();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("tabindex").and_then(|a| a.value.as_deref()), Some("-1"));
        assert!(attrs.get("missing").is_none());
    }
}
