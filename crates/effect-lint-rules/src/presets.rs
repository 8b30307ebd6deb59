//! Rule presets for common configurations.
//!
//! Registration is explicit: these functions return fresh boxed rule
//! values for the caller to compose into an analyzer. There is no global
//! rules map.

use crate::NamedEffectWithCleanup;
use effect_lint_core::{CallRuleBox, Severity};

/// Preset configurations for effect-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Recommended rules with sensible defaults.
    Recommended,
    /// All rules at error severity.
    Strict,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<CallRuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => strict_rules(),
        }
    }

    /// Parses a preset name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "recommended" => Some(Self::Recommended),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `named-effect-with-cleanup` (EL001) at warning severity
#[must_use]
pub fn recommended_rules() -> Vec<CallRuleBox> {
    vec![Box::new(NamedEffectWithCleanup::new())]
}

/// Returns the strict set of rules: everything at error severity.
#[must_use]
pub fn strict_rules() -> Vec<CallRuleBox> {
    vec![Box::new(
        NamedEffectWithCleanup::new().severity(Severity::Error),
    )]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<CallRuleBox> {
    vec![Box::new(NamedEffectWithCleanup::new())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommended_contains_el001() {
        let rules = recommended_rules();
        assert!(rules.iter().any(|r| r.code() == "EL001"));
    }

    #[test]
    fn strict_raises_severity() {
        for rule in strict_rules() {
            assert_eq!(rule.default_severity(), Severity::Error);
        }
    }

    #[test]
    fn preset_from_name() {
        assert_eq!(Preset::from_name("recommended"), Some(Preset::Recommended));
        assert_eq!(Preset::from_name("strict"), Some(Preset::Strict));
        assert_eq!(Preset::from_name("bogus"), None);
    }
}
