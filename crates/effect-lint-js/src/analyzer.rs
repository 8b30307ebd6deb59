//! Analyzer orchestrating lint execution over a source tree.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use effect_lint_core::allowance::check_allow_with_reason;
use effect_lint_core::{
    CallRule, CallRuleBox, Config, ConfigError, Diagnostic, DiagnosticSink, FileContext,
    LintResult, Severity, Suggestion,
};

use crate::frontend::{FrontendError, LanguageFrontend};
use crate::javascript::JsFrontend;

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a source file.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// File walk error.
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<CallRuleBox>,
    frontends: Vec<Box<dyn LanguageFrontend>>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_parse_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: CallRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: CallRuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds a language front-end. When none is added, the JavaScript
    /// front-end is used.
    #[must_use]
    pub fn frontend<F: LanguageFrontend + 'static>(mut self, frontend: F) -> Self {
        self.frontends.push(Box::new(frontend));
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to fail on parse errors (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let root = self
            .root
            .or_else(|| self.config.as_ref().map(|c| c.analyzer.root.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut exclude_patterns = self.exclude_patterns;
        if let Some(ref config) = self.config {
            exclude_patterns.extend(config.analyzer.exclude.clone());
        }
        if exclude_patterns.is_empty() {
            exclude_patterns.extend([
                "**/node_modules/**".to_string(),
                "**/dist/**".to_string(),
            ]);
        }

        let frontends = if self.frontends.is_empty() {
            vec![Box::new(JsFrontend::new()) as Box<dyn LanguageFrontend>]
        } else {
            self.frontends
        };

        Ok(Analyzer {
            root,
            rules: self.rules,
            frontends,
            exclude_patterns,
            config: self.config.unwrap_or_default(),
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<CallRuleBox>,
    frontends: Vec<Box<dyn LanguageFrontend>>,
    exclude_patterns: Vec<String>,
    config: Config,
    fail_on_parse_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes all files and returns the results.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery fails, or if parsing fails and
    /// `fail_on_parse_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let mut result = LintResult::new();
        let files = self.discover_files()?;

        info!("Found {} files to analyze", files.len());

        for file_path in &files {
            match self.analyze_file(file_path) {
                Ok(diagnostics) => {
                    result.diagnostics.extend(diagnostics);
                    result.files_checked += 1;
                }
                Err(AnalyzerError::Parse { path, message }) => {
                    warn!("Failed to parse {}: {}", path.display(), message);
                    if self.fail_on_parse_error {
                        return Err(AnalyzerError::Parse { path, message });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        result.sort();

        info!(
            "Analysis complete: {} diagnostics in {} files",
            result.diagnostics.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Analyzes a single file and returns diagnostics.
    fn analyze_file(&self, path: &Path) -> Result<Vec<Diagnostic>, AnalyzerError> {
        debug!("Analyzing: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        self.check_source(path, &content)
    }

    /// Runs all enabled rules against already-read source text.
    ///
    /// Exposed for embedding the analyzer without touching the
    /// filesystem (e.g. editor integrations).
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Parse`] when the front-end cannot parse.
    pub fn check_source(&self, path: &Path, content: &str) -> Result<Vec<Diagnostic>, AnalyzerError> {
        let Some(frontend) = self.frontend_for(path) else {
            return Ok(Vec::new());
        };

        let calls = frontend
            .extract_calls(content)
            .map_err(|e: FrontendError| AnalyzerError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let ctx = FileContext::new(path, content, &self.root);
        let mut sink = DiagnosticSink::new();

        for call in &calls {
            for rule in &self.rules {
                if !self.config.is_rule_enabled(rule.name()) {
                    debug!("Skipping disabled rule: {}", rule.name());
                    continue;
                }
                rule.check_call(&ctx, call, &mut sink);
            }
        }

        let mut diagnostics = Vec::new();
        let mut reason_warned: std::collections::HashSet<(String, usize)> =
            std::collections::HashSet::new();
        for mut diagnostic in sink.into_diagnostics() {
            if let Some(severity) = self.config.rule_severity(&diagnostic.rule) {
                diagnostic.severity = severity;
            }

            let allow =
                check_allow_with_reason(content, diagnostic.location.line, &diagnostic.rule);
            if allow.is_allowed() {
                // Error-level suppressions must say why; one warning per
                // directive, even when it covers several findings.
                if diagnostic.severity == Severity::Error
                    && allow.reason().is_none()
                    && reason_warned.insert((diagnostic.rule.clone(), diagnostic.location.line))
                {
                    diagnostics.push(
                        Diagnostic::new(
                            diagnostic.code.clone(),
                            diagnostic.rule.clone(),
                            Severity::Warning,
                            diagnostic.location.clone(),
                            format!(
                                "Allow directive for '{}' is missing required reason",
                                diagnostic.rule
                            ),
                        )
                        .with_suggestion(Suggestion::new(
                            "Add reason=\"...\" to explain why this exception is necessary",
                        )),
                    );
                }
                continue;
            }

            diagnostics.push(diagnostic);
        }

        Ok(diagnostics)
    }

    /// Picks the front-end matching a file's extension.
    fn frontend_for(&self, path: &Path) -> Option<&dyn LanguageFrontend> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();

        self.frontends
            .iter()
            .find(|f| f.extensions().contains(&ext.as_str()))
            .map(AsRef::as_ref)
    }

    /// Discovers all source files to analyze.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder
            .hidden(false)
            .git_ignore(self.config.analyzer.respect_gitignore);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() || self.frontend_for(path).is_none() {
                continue;
            }

            if self.should_exclude(path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Also check as substring for patterns like "**/node_modules/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty() && path_str.contains(&normalized_pattern) {
                return true;
            }
        }

        false
    }
}
