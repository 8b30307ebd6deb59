//! # effect-lint-rules
//!
//! Built-in lint rules for effect-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | EL001 | `named-effect-with-cleanup` | Requires named effect callbacks that return a cleanup function |
//!
//! ## Usage
//!
//! ```ignore
//! use effect_lint_js::Analyzer;
//! use effect_lint_rules::NamedEffectWithCleanup;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(NamedEffectWithCleanup::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod named_effect_with_cleanup;
mod presets;

pub use named_effect_with_cleanup::{
    NamedEffectWithCleanup, CODE as NAMED_EFFECT_CODE, MSG_REQUIRE_CLEANUP,
    MSG_REQUIRE_NAMED_FUNCTION, NAME as NAMED_EFFECT_NAME, TARGET_HOOK,
};
pub use presets::{all_rules, recommended_rules, strict_rules, Preset};

/// Re-export core types for convenience.
pub use effect_lint_core::{CallRule, Diagnostic, Severity};
