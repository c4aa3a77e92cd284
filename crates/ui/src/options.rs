//! Option axes for the [`Button`](crate::Button) atom.
//!
//! Each axis is a closed enum mapped to daisyUI class tokens with an
//! exhaustive `match`. Option names (`"sm"`, `"primary"`, `"outline"`, ...)
//! parse with [`FromStr`]; an unknown name is an error, never a silently
//! dropped token.

use std::str::FromStr;

use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};
use thiserror::Error;

/// Error returned when an option name is not part of its closed set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseOptionError {
    #[error("unknown button {option} `{value}` (expected one of: {expected})")]
    Unknown {
        option: &'static str,
        value: String,
        expected: String,
    },
}

/// Shared parsing for every option axis.
fn parse_option<T>(option: &'static str, value: &str) -> Result<T, ParseOptionError>
where
    T: IntoEnumIterator + Into<&'static str> + Copy,
{
    T::iter()
        .find(|candidate| Into::<&'static str>::into(*candidate) == value)
        .ok_or_else(|| ParseOptionError::Unknown {
            option,
            value: value.to_string(),
            expected: T::iter()
                .map(Into::<&'static str>::into)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

// =============================================================================
// SIZE
// =============================================================================

/// Predefined button size.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ButtonSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ButtonSize {
    pub fn class(self) -> &'static str {
        match self {
            ButtonSize::Xs => "btn-xs",
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
            ButtonSize::Xl => "btn-xl",
        }
    }

    /// Human readable label, used by the storybook controls.
    pub fn label(self) -> &'static str {
        match self {
            ButtonSize::Xs => "Xsmall",
            ButtonSize::Sm => "Small",
            ButtonSize::Md => "Medium",
            ButtonSize::Lg => "Large",
            ButtonSize::Xl => "Xlarge",
        }
    }
}

impl FromStr for ButtonSize {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("size", s)
    }
}

// =============================================================================
// VARIANT
// =============================================================================

/// Color variant. A button without a variant gets no color class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ButtonVariant {
    Neutral,
    Primary,
    Secondary,
    Accent,
    Info,
    Success,
    Warning,
    Error,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Neutral => "btn-neutral",
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Accent => "btn-accent",
            ButtonVariant::Info => "btn-info",
            ButtonVariant::Success => "btn-success",
            ButtonVariant::Warning => "btn-warning",
            ButtonVariant::Error => "btn-error",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ButtonVariant::Neutral => "Neutral",
            ButtonVariant::Primary => "Primary",
            ButtonVariant::Secondary => "Secondary",
            ButtonVariant::Accent => "Accent",
            ButtonVariant::Info => "Info",
            ButtonVariant::Success => "Success",
            ButtonVariant::Warning => "Warning",
            ButtonVariant::Error => "Error",
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("variant", s)
    }
}

// =============================================================================
// STYLE
// =============================================================================

/// Style variant. `Default` contributes no class.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Default,
    Outline,
    Dash,
    Soft,
    Ghost,
    Link,
}

impl ButtonStyle {
    pub fn class(self) -> Option<&'static str> {
        match self {
            ButtonStyle::Default => None,
            ButtonStyle::Outline => Some("btn-outline"),
            ButtonStyle::Dash => Some("btn-dash"),
            ButtonStyle::Soft => Some("btn-soft"),
            ButtonStyle::Ghost => Some("btn-ghost"),
            ButtonStyle::Link => Some("btn-link"),
        }
    }
}

impl FromStr for ButtonStyle {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("style", s)
    }
}

// =============================================================================
// ELEMENT KIND
// =============================================================================

/// Which native element a button renders as.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum ElementKind {
    #[default]
    #[strum(serialize = "button")]
    Button,
    #[strum(serialize = "a")]
    Anchor,
}

impl ElementKind {
    pub fn tag(self) -> &'static str {
        self.into()
    }
}

impl FromStr for ElementKind {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("element", s)
    }
}

// =============================================================================
// BUTTON TYPE
// =============================================================================

/// Value of the native `type` attribute on `<button>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ButtonType {
    Button,
    Submit,
    Reset,
}

impl FromStr for ButtonType {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("type", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_known_names() {
        assert_eq!("xs".parse::<ButtonSize>(), Ok(ButtonSize::Xs));
        assert_eq!("xl".parse::<ButtonSize>(), Ok(ButtonSize::Xl));
        assert_eq!("warning".parse::<ButtonVariant>(), Ok(ButtonVariant::Warning));
        assert_eq!("dash".parse::<ButtonStyle>(), Ok(ButtonStyle::Dash));
        assert_eq!("default".parse::<ButtonStyle>(), Ok(ButtonStyle::Default));
        assert_eq!("a".parse::<ElementKind>(), Ok(ElementKind::Anchor));
        assert_eq!("button".parse::<ElementKind>(), Ok(ElementKind::Button));
        assert_eq!("submit".parse::<ButtonType>(), Ok(ButtonType::Submit));
    }

    #[test]
    fn test_unknown_name_fails_fast() {
        let err = "huge".parse::<ButtonSize>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown button size `huge` (expected one of: xs, sm, md, lg, xl)"
        );

        let err = "Primary".parse::<ButtonVariant>().unwrap_err();
        assert!(matches!(
            err,
            ParseOptionError::Unknown { option: "variant", .. }
        ));
    }

    #[test]
    fn test_names_round_trip_through_display() {
        for size in ButtonSize::iter() {
            assert_eq!(size.to_string().parse::<ButtonSize>(), Ok(size));
        }
        for style in ButtonStyle::iter() {
            assert_eq!(style.to_string().parse::<ButtonStyle>(), Ok(style));
        }
    }

    #[test]
    fn test_lookup_tables_are_complete() {
        assert_eq!(ButtonSize::iter().count(), 5);
        assert_eq!(ButtonVariant::iter().count(), 8);
        assert_eq!(ButtonStyle::iter().count(), 6);
        for variant in ButtonVariant::iter() {
            assert_eq!(variant.class(), format!("btn-{variant}"));
        }
        assert_eq!(
            ButtonStyle::iter().filter_map(ButtonStyle::class).count(),
            5
        );
    }

    #[test]
    fn test_element_tags() {
        assert_eq!(ElementKind::Button.tag(), "button");
        assert_eq!(ElementKind::Anchor.tag(), "a");
        assert_eq!(ElementKind::default(), ElementKind::Button);
    }
}
