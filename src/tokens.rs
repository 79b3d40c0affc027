//! Design tokens consumed by the header styles.
//!
//! Every lookup is a pure function of its input so style records render the
//! same way on the server and in the browser.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    S2,
    S3,
    S4,
    S6,
}

impl Spacing {
    pub const fn value(self) -> &'static str {
        match self {
            Spacing::S2 => "0.5rem",
            Spacing::S3 => "0.75rem",
            Spacing::S4 => "1rem",
            Spacing::S6 => "1.5rem",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radius {
    Sm,
    Md,
    Lg,
    Xl,
}

impl Radius {
    pub const fn value(self) -> &'static str {
        match self {
            Radius::Sm => "0.25rem",
            Radius::Md => "0.5rem",
            Radius::Lg => "1rem",
            Radius::Xl => "1.5rem",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    TextPrimary,
    TextSecondary,
}

impl SemanticColor {
    pub const fn value(self) -> &'static str {
        match self {
            SemanticColor::TextPrimary => "var(--color-text-primary, #1c1917)",
            SemanticColor::TextSecondary => "var(--color-text-secondary, #57534e)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    Fast,
    Normal,
    Slow,
}

impl Speed {
    pub const fn millis(self) -> u32 {
        match self {
            Speed::Fast => 150,
            Speed::Normal => 300,
            Speed::Slow => 500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    In,
    Out,
    InOut,
}

impl Easing {
    pub const fn curve(self) -> &'static str {
        match self {
            Easing::In => "cubic-bezier(0.4, 0, 1, 1)",
            Easing::Out => "cubic-bezier(0, 0, 0.2, 1)",
            Easing::InOut => "cubic-bezier(0.4, 0, 0.2, 1)",
        }
    }
}

/// Builds a `transition` value animating every property with the same timing.
pub fn transition(properties: &[&str], speed: Speed, easing: Easing) -> String {
    properties
        .iter()
        .map(|property| format!("{property} {}ms {}", speed.millis(), easing.curve()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_joins_every_property() {
        assert_eq!(
            transition(&["transform", "box-shadow"], Speed::Normal, Easing::Out),
            "transform 300ms cubic-bezier(0, 0, 0.2, 1), box-shadow 300ms cubic-bezier(0, 0, 0.2, 1)"
        );
    }

    #[test]
    fn transition_without_properties_is_empty() {
        assert!(transition(&[], Speed::Fast, Easing::In).is_empty());
    }

    #[test]
    fn spacing_scale_is_quarter_rem() {
        assert_eq!(Spacing::S4.value(), "1rem");
        assert_eq!(Spacing::S6.value(), "1.5rem");
    }
}
