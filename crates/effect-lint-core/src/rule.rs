//! Rule traits for defining effect lints.

use crate::ast::CallExpr;
use crate::context::FileContext;
use crate::report::Reporter;
use crate::types::Severity;

/// A per-call-site lint rule.
///
/// The host traversal visits every call expression in a file once and
/// invokes each registered rule synchronously with the lowered node.
/// Rules are stateless across call-sites: two invocations on the same
/// node must emit identical diagnostics.
///
/// # Example
///
/// ```ignore
/// use effect_lint_core::{CallRule, CallExpr, FileContext, Reporter};
///
/// pub struct NoNestedEffects;
///
/// impl CallRule for NoNestedEffects {
///     fn name(&self) -> &'static str { "no-nested-effects" }
///     fn code(&self) -> &'static str { "EL002" }
///
///     fn check_call(&self, ctx: &FileContext, call: &CallExpr, sink: &mut dyn Reporter) {
///         // inspect `call`, report through `sink`
///     }
/// }
/// ```
pub trait CallRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "named-effect-with-cleanup").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "EL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for diagnostics from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Whether this rule requires a reason when using allow directives.
    ///
    /// By default, rules with `Severity::Error` require a reason.
    fn requires_allow_reason(&self) -> bool {
        self.default_severity() == Severity::Error
    }

    /// Checks a single call-site.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `call` - The lowered call expression
    /// * `sink` - Reporting sink for any diagnostics
    fn check_call(&self, ctx: &FileContext<'_>, call: &CallExpr, sink: &mut dyn Reporter);
}

/// Type alias for boxed `CallRule` trait objects.
pub type CallRuleBox = Box<dyn CallRule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, Ident, Span};
    use crate::report::DiagnosticSink;
    use crate::types::{Diagnostic, Location};
    use std::path::Path;

    struct TestRule;

    impl CallRule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check_call(&self, ctx: &FileContext<'_>, call: &CallExpr, sink: &mut dyn Reporter) {
            sink.report(Diagnostic::new(
                self.code(),
                self.name(),
                self.default_severity(),
                Location::from_span(ctx.relative_path.clone(), call.span),
                "test diagnostic",
            ));
        }
    }

    #[test]
    fn rule_trait_defaults() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Warning);
        assert!(!rule.requires_allow_reason());
    }

    #[test]
    fn rule_reports_through_sink() {
        let content = "effect(setup);";
        let ctx = FileContext::new(Path::new("/p/src/a.js"), content, Path::new("/p"));
        let call = CallExpr {
            callee: Box::new(Expr::Ident(Ident {
                name: "effect".to_string(),
                span: Span::new(1, 1, 0, 6),
            })),
            arguments: vec![],
            span: Span::new(1, 1, 0, 13),
        };

        let mut sink = DiagnosticSink::new();
        TestRule.check_call(&ctx, &call, &mut sink);
        assert_eq!(sink.len(), 1);
    }
}
