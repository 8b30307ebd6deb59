//! # effect-lint-core
//!
//! Core framework for linting effect-hook usage in JavaScript sources.
//!
//! This crate provides the foundational types for building effect lints.
//! It deliberately contains no parser: a front-end (such as
//! `effect-lint-js`) lowers concrete syntax into the typed model in
//! [`ast`] and drives rules over it. It includes:
//!
//! - [`ast`] — tagged-union syntax model (calls, identifiers, functions)
//! - [`CallRule`] trait for per-call-site rules
//! - [`Reporter`] sink for emitted [`Diagnostic`]s
//! - [`Config`] for TOML-based rule configuration
//!
//! ## Example
//!
//! ```ignore
//! use effect_lint_core::{CallRule, DiagnosticSink, FileContext};
//!
//! let mut sink = DiagnosticSink::new();
//! rule.check_call(&ctx, &call, &mut sink);
//! for diagnostic in sink.into_diagnostics() {
//!     println!("{diagnostic}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod allowance;
pub mod ast;
mod config;
mod context;
mod report;
mod rule;
mod types;

pub use allowance::AllowCheck;
pub use ast::{Block, CallExpr, Expr, FnBody, FnExpr, Ident, ReturnStmt, Span, Stmt};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use report::{DiagnosticSink, Reporter};
pub use rule::{CallRule, CallRuleBox};
pub use types::{Diagnostic, LintResult, Location, RichDiagnostic, Severity, Suggestion};
