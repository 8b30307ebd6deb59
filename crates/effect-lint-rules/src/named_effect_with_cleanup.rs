//! Rule requiring effect callbacks to be named and to return a cleanup.
//!
//! # Rationale
//!
//! Arrow and anonymous callbacks passed to `effect()` show up nameless in
//! stack traces and devtools, and effects that register side effects
//! without returning a teardown function leak them across re-runs. This
//! rule enforces both halves of the lifecycle discipline.
//!
//! # Checks
//!
//! For every call whose callee is the bare identifier `effect` with at
//! least one argument:
//!
//! - the first argument must be a named, non-arrow function (or a
//!   reference to one declared elsewhere), else `requireNamedFunction`;
//! - an inline function callback must return a value from the top level
//!   of its body, else `requireCleanup`.
//!
//! # Known limitations
//!
//! The return scan is shallow: a `return` nested inside an `if`, loop, or
//! `try` block is not seen, so conditional cleanup returns are flagged.
//! Identifier-reference callbacks (`effect(setup)`) are trusted as named
//! and their cleanup obligation is not checked here; it belongs to
//! wherever the referenced function is defined. The returned value's type
//! is not inspected either: any non-empty `return` satisfies the check.
//!
//! # Suppression
//!
//! Test files (`*.test.js`, `*.spec.js`, `__tests__/`) are exempt by
//! default; use [`NamedEffectWithCleanup::allow_in_tests`] to lint them
//! too. Individual call-sites can be excused with:
//!
//! ```text
//! // effect-lint: allow(named-effect-with-cleanup)
//! ```

use effect_lint_core::{
    CallExpr, CallRule, Diagnostic, Expr, FileContext, FnBody, FnExpr, Location, Reporter,
    Severity, Stmt, Suggestion,
};

/// Rule code for named-effect-with-cleanup.
pub const CODE: &str = "EL001";

/// Rule name for named-effect-with-cleanup.
pub const NAME: &str = "named-effect-with-cleanup";

/// The effect-registration hook this rule watches for. Member-access
/// spellings and aliases are not matched.
pub const TARGET_HOOK: &str = "effect";

/// Message for an arrow or anonymous effect callback.
pub const MSG_REQUIRE_NAMED_FUNCTION: &str =
    "effect registration should use a named function instead of an arrow or anonymous function";

/// Message for an effect callback that never returns a cleanup function.
pub const MSG_REQUIRE_CLEANUP: &str = "effect registration should return a cleanup function";

/// Requires named setup functions with cleanup returns in `effect()` calls.
#[derive(Debug, Clone)]
pub struct NamedEffectWithCleanup {
    /// Custom severity.
    pub severity: Severity,
    /// Whether test files are exempt.
    pub allow_in_tests: bool,
}

impl Default for NamedEffectWithCleanup {
    fn default() -> Self {
        Self::new()
    }
}

impl NamedEffectWithCleanup {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
            allow_in_tests: true,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets whether test files (`*.test.js`, `__tests__/`) are exempt
    /// (default: true).
    #[must_use]
    pub fn allow_in_tests(mut self, allow: bool) -> Self {
        self.allow_in_tests = allow;
        self
    }
}

impl CallRule for NamedEffectWithCleanup {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires effect callbacks to be named functions that return a cleanup function"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_call(&self, ctx: &FileContext<'_>, call: &CallExpr, sink: &mut dyn Reporter) {
        if self.allow_in_tests && ctx.is_test {
            return;
        }

        let Some(callback) = effect_callback(call) else {
            return;
        };

        match callback {
            // A reference to a function declared elsewhere is trusted as
            // named; its cleanup obligation lives at the definition site,
            // outside this rule's per-call-site scope.
            Expr::Ident(_) => {}
            Expr::Function(func) => {
                if func.is_arrow || !func.has_name() {
                    sink.report(self.diagnostic(
                        ctx,
                        callback,
                        MSG_REQUIRE_NAMED_FUNCTION,
                        "declare the callback as `function setupName() { ... }`",
                    ));
                }
                if !has_cleanup_return(func) {
                    sink.report(self.diagnostic(
                        ctx,
                        callback,
                        MSG_REQUIRE_CLEANUP,
                        "return a teardown function from the effect callback",
                    ));
                }
            }
            // Unrecognized callback shape: not applicable, never an error.
            _ => {
                tracing::trace!(
                    file = %ctx.relative_path.display(),
                    line = callback.span().line,
                    "skipping effect call with unrecognized callback shape"
                );
            }
        }
    }
}

impl NamedEffectWithCleanup {
    fn diagnostic(
        &self,
        ctx: &FileContext<'_>,
        target: &Expr,
        message: &str,
        help: &str,
    ) -> Diagnostic {
        Diagnostic::new(
            CODE,
            NAME,
            self.severity,
            Location::from_span(ctx.relative_path.clone(), target.span()),
            message,
        )
        .with_suggestion(Suggestion::new(help))
    }
}

/// Returns the effect-callback argument if this call-site is relevant.
///
/// Relevant means: the callee is the bare identifier [`TARGET_HOOK`] and
/// the call has at least one argument. A zero-argument `effect()` is
/// silently skipped; the host's own arity diagnostics cover it.
fn effect_callback(call: &CallExpr) -> Option<&Expr> {
    if call.callee_name() != Some(TARGET_HOOK) {
        return None;
    }
    call.arguments.first()
}

/// Whether an inline callback yields a cleanup value.
///
/// Block bodies: scan the top-level statement sequence only for a
/// `return` carrying an argument. Returns nested in branches or loops are
/// deliberately not detected.
///
/// Expression bodies satisfy the check only when the implicitly returned
/// expression is itself a bare function value.
fn has_cleanup_return(func: &FnExpr) -> bool {
    match &func.body {
        FnBody::Block(block) => block
            .statements
            .iter()
            .any(|stmt| matches!(stmt, Stmt::Return(ret) if ret.has_argument())),
        FnBody::Expr(expr) => matches!(expr.as_ref(), Expr::Function(_)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use effect_lint_core::{Block, DiagnosticSink, Ident, ReturnStmt, Span};
    use std::path::Path;

    fn ident(name: &str) -> Expr {
        Expr::Ident(Ident {
            name: name.to_string(),
            span: Span::default(),
        })
    }

    fn arrow(body: FnBody) -> Expr {
        Expr::Function(FnExpr {
            name: None,
            is_arrow: true,
            body,
            span: Span::new(1, 8, 7, 20),
        })
    }

    fn function(name: Option<&str>, body: FnBody) -> Expr {
        Expr::Function(FnExpr {
            name: name.map(str::to_string),
            is_arrow: false,
            body,
            span: Span::new(1, 8, 7, 30),
        })
    }

    fn block(statements: Vec<Stmt>) -> FnBody {
        FnBody::Block(Block { statements })
    }

    fn return_value() -> Stmt {
        Stmt::Return(ReturnStmt {
            argument: Some(arrow(block(vec![]))),
            span: Span::default(),
        })
    }

    fn bare_return() -> Stmt {
        Stmt::Return(ReturnStmt {
            argument: None,
            span: Span::default(),
        })
    }

    fn call(callee: Expr, arguments: Vec<Expr>) -> CallExpr {
        CallExpr {
            callee: Box::new(callee),
            arguments,
            span: Span::new(1, 1, 0, 40),
        }
    }

    fn check(call: &CallExpr) -> Vec<Diagnostic> {
        let ctx = FileContext::new(Path::new("/p/src/app.js"), "", Path::new("/p"));
        let mut sink = DiagnosticSink::new();
        NamedEffectWithCleanup::new().check_call(&ctx, call, &mut sink);
        sink.into_diagnostics()
    }

    fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
        diagnostics.iter().map(|d| d.message.as_str()).collect()
    }

    // effect(() => { console.log(1); })
    #[test]
    fn arrow_without_return_emits_both() {
        let c = call(
            ident("effect"),
            vec![arrow(block(vec![Stmt::Other(Span::default())]))],
        );
        let diagnostics = check(&c);
        assert_eq!(
            messages(&diagnostics),
            vec![MSG_REQUIRE_NAMED_FUNCTION, MSG_REQUIRE_CLEANUP]
        );
    }

    // effect(function () { return () => {}; })
    #[test]
    fn anonymous_function_with_cleanup_emits_named_only() {
        let c = call(ident("effect"), vec![function(None, block(vec![return_value()]))]);
        assert_eq!(messages(&check(&c)), vec![MSG_REQUIRE_NAMED_FUNCTION]);
    }

    // effect(function setup() { return function cleanup() {}; })
    #[test]
    fn named_function_with_cleanup_is_clean() {
        let c = call(
            ident("effect"),
            vec![function(Some("setup"), block(vec![return_value()]))],
        );
        assert!(check(&c).is_empty());
    }

    // effect(function setup() { console.log(1); })
    #[test]
    fn named_function_without_return_emits_cleanup_only() {
        let c = call(
            ident("effect"),
            vec![function(
                Some("setup"),
                block(vec![Stmt::Other(Span::default())]),
            )],
        );
        assert_eq!(messages(&check(&c)), vec![MSG_REQUIRE_CLEANUP]);
    }

    // effect(setup)
    #[test]
    fn identifier_reference_is_trusted() {
        let c = call(ident("effect"), vec![ident("setup")]);
        assert!(check(&c).is_empty());
    }

    // effect(() => { if (x) { return () => {}; } })
    // The conditional return sits inside Stmt::Other, invisible to the
    // shallow scan, so the false positive is intentional.
    #[test]
    fn conditional_return_is_not_detected() {
        let c = call(
            ident("effect"),
            vec![arrow(block(vec![Stmt::Other(Span::default())]))],
        );
        let diagnostics = check(&c);
        assert!(messages(&diagnostics).contains(&MSG_REQUIRE_CLEANUP));
    }

    #[test]
    fn bare_return_does_not_count_as_cleanup() {
        let c = call(
            ident("effect"),
            vec![function(Some("setup"), block(vec![bare_return()]))],
        );
        assert_eq!(messages(&check(&c)), vec![MSG_REQUIRE_CLEANUP]);
    }

    #[test]
    fn any_returned_value_satisfies_cleanup() {
        // Returning a non-function still passes; the value's type is not
        // inspected.
        let c = call(
            ident("effect"),
            vec![function(
                Some("setup"),
                block(vec![Stmt::Return(ReturnStmt {
                    argument: Some(Expr::Other(Span::default())),
                    span: Span::default(),
                })]),
            )],
        );
        assert!(check(&c).is_empty());
    }

    // effect(() => () => {})
    #[test]
    fn expression_body_returning_function_has_cleanup() {
        let c = call(
            ident("effect"),
            vec![arrow(FnBody::Expr(Box::new(arrow(block(vec![])))))],
        );
        assert_eq!(messages(&check(&c)), vec![MSG_REQUIRE_NAMED_FUNCTION]);
    }

    // effect(() => startTimer())
    #[test]
    fn expression_body_returning_non_function_lacks_cleanup() {
        let c = call(
            ident("effect"),
            vec![arrow(FnBody::Expr(Box::new(Expr::Other(Span::default()))))],
        );
        assert_eq!(
            messages(&check(&c)),
            vec![MSG_REQUIRE_NAMED_FUNCTION, MSG_REQUIRE_CLEANUP]
        );
    }

    #[test]
    fn other_callees_are_ignored() {
        let c = call(ident("layoutEffect"), vec![arrow(block(vec![]))]);
        assert!(check(&c).is_empty());

        let member = call(Expr::Other(Span::default()), vec![arrow(block(vec![]))]);
        assert!(check(&member).is_empty());
    }

    #[test]
    fn zero_arguments_short_circuits() {
        let c = call(ident("effect"), vec![]);
        assert!(check(&c).is_empty());
    }

    #[test]
    fn non_function_callback_is_skipped() {
        let c = call(ident("effect"), vec![Expr::Other(Span::default())]);
        assert!(check(&c).is_empty());
    }

    #[test]
    fn check_is_idempotent() {
        let c = call(ident("effect"), vec![arrow(block(vec![]))]);
        let first = check(&c);
        let second = check(&c);
        assert_eq!(messages(&first), messages(&second));
    }

    #[test]
    fn test_files_are_exempt_by_default() {
        let ctx = FileContext::new(Path::new("/p/src/app.test.js"), "", Path::new("/p"));
        let c = call(ident("effect"), vec![arrow(block(vec![]))]);
        let mut sink = DiagnosticSink::new();
        NamedEffectWithCleanup::new().check_call(&ctx, &c, &mut sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_file_exemption_can_be_disabled() {
        let ctx = FileContext::new(Path::new("/p/src/app.test.js"), "", Path::new("/p"));
        let c = call(ident("effect"), vec![arrow(block(vec![]))]);
        let mut sink = DiagnosticSink::new();
        NamedEffectWithCleanup::new()
            .allow_in_tests(false)
            .check_call(&ctx, &c, &mut sink);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn severity_override_applies() {
        let ctx = FileContext::new(Path::new("/p/src/app.js"), "", Path::new("/p"));
        let c = call(ident("effect"), vec![arrow(block(vec![]))]);
        let mut sink = DiagnosticSink::new();
        NamedEffectWithCleanup::new()
            .severity(Severity::Error)
            .check_call(&ctx, &c, &mut sink);
        assert!(sink
            .into_diagnostics()
            .iter()
            .all(|d| d.severity == Severity::Error));
    }

    #[test]
    fn diagnostic_targets_the_callback_span() {
        let c = call(ident("effect"), vec![arrow(block(vec![]))]);
        let diagnostics = check(&c);
        assert_eq!(diagnostics[0].location.line, 1);
        assert_eq!(diagnostics[0].location.column, 8);
        assert_eq!(diagnostics[0].location.offset, 7);
    }
}
