use serde_json::Value;

use crate::error::{OptionsError, OptionsResult};

/// Line dash style recognized by the renderer.
///
/// The allowed-value set is frozen, read-only process-wide configuration;
/// resolving any other name is a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashStyle {
    Dash,
    DashDot,
    Dot,
    LongDash,
    LongDashDot,
    LongDashDotDot,
    ShortDash,
    ShortDashDot,
    ShortDashDotDot,
    ShortDot,
    Solid,
}

impl DashStyle {
    pub const ALLOWED: &'static [&'static str] = &[
        "Dash",
        "DashDot",
        "Dot",
        "LongDash",
        "LongDashDot",
        "LongDashDotDot",
        "ShortDash",
        "ShortDashDot",
        "ShortDashDotDot",
        "ShortDot",
        "Solid",
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dash => "Dash",
            Self::DashDot => "DashDot",
            Self::Dot => "Dot",
            Self::LongDash => "LongDash",
            Self::LongDashDot => "LongDashDot",
            Self::LongDashDotDot => "LongDashDotDot",
            Self::ShortDash => "ShortDash",
            Self::ShortDashDot => "ShortDashDot",
            Self::ShortDashDotDot => "ShortDashDotDot",
            Self::ShortDot => "ShortDot",
            Self::Solid => "Solid",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Dash" => Some(Self::Dash),
            "DashDot" => Some(Self::DashDot),
            "Dot" => Some(Self::Dot),
            "LongDash" => Some(Self::LongDash),
            "LongDashDot" => Some(Self::LongDashDot),
            "LongDashDotDot" => Some(Self::LongDashDotDot),
            "ShortDash" => Some(Self::ShortDash),
            "ShortDashDot" => Some(Self::ShortDashDot),
            "ShortDashDotDot" => Some(Self::ShortDashDotDot),
            "ShortDot" => Some(Self::ShortDot),
            "Solid" => Some(Self::Solid),
            _ => None,
        }
    }

    /// Resolves a raw dash-style value; empty-like input maps to `None`.
    pub fn resolve(attribute: &str, value: &Value) -> OptionsResult<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) if s.is_empty() => Ok(None),
            Value::String(s) => Self::from_name(s)
                .map(Some)
                .ok_or_else(|| OptionsError::validation(attribute, value)),
            other => Err(OptionsError::validation(attribute, other)),
        }
    }
}

/// Untrimmed wire value of an optional dash style.
#[must_use]
pub fn dash_value(value: Option<DashStyle>) -> Value {
    value
        .map(|style| Value::from(style.as_str()))
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_allowed_name_round_trips() {
        for name in DashStyle::ALLOWED {
            let style = DashStyle::from_name(name).expect("allowed name resolves");
            assert_eq!(style.as_str(), *name);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = DashStyle::resolve("dash_style", &json!("NotARealStyle"))
            .expect_err("unknown dash style");
        assert!(matches!(err, OptionsError::Validation { .. }));
    }
}
