//! Language front-end trait.
//!
//! `LanguageFrontend` is the extension point for adding new languages.
//! Implement it to teach the analyzer how to lower call-sites from
//! another grammar (e.g. TypeScript) into the core syntax model.

use effect_lint_core::ast::CallExpr;

/// Errors produced while parsing source text.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    /// The grammar could not be loaded into the parser.
    #[error("incompatible grammar for {language}: {message}")]
    Language {
        /// Language identifier.
        language: &'static str,
        /// Underlying error message.
        message: String,
    },

    /// The parser produced no tree (cancellation or internal failure).
    #[error("parser returned no syntax tree")]
    NoTree,
}

/// Trait for language-specific call-site extraction.
///
/// The front-end owns all concrete-syntax concerns: it parses source
/// text and lowers every call expression it finds (at any nesting depth)
/// into the typed model. Rules never see concrete syntax.
pub trait LanguageFrontend: Send + Sync {
    /// Language identifier (e.g., `"javascript"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this front-end handles (e.g., `&[".js", ".jsx"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Parses `source` and returns every call-site, lowered.
    ///
    /// Syntax errors inside the source do not fail extraction: tree-sitter
    /// produces a partial tree and unrecognized regions simply yield no
    /// call-sites.
    ///
    /// # Errors
    ///
    /// Returns an error only when the parser itself cannot run.
    fn extract_calls(&self, source: &str) -> Result<Vec<CallExpr>, FrontendError>;
}
