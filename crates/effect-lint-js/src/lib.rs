//! # effect-lint-js
//!
//! Tree-sitter based JavaScript front-end and analyzer for effect-lint.
//!
//! This crate is the "host" side of the rule boundary: it parses source
//! files, lowers call-sites into the `effect-lint-core` syntax model,
//! and drives registered rules over them. It adds:
//!
//! - [`LanguageFrontend`] trait for pluggable language support
//! - [`JsFrontend`] for JavaScript (including JSX)
//! - [`Analyzer`] for file discovery and lint orchestration
//!
//! ## Example
//!
//! ```ignore
//! use effect_lint_js::Analyzer;
//! use effect_lint_rules::recommended_rules;
//!
//! let mut builder = Analyzer::builder().root("./src");
//! for rule in recommended_rules() {
//!     builder = builder.rule_box(rule);
//! }
//! let result = builder.build()?.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod frontend;
mod javascript;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use frontend::{FrontendError, LanguageFrontend};
pub use javascript::JsFrontend;
