//! JavaScript front-end using tree-sitter.
//!
//! Lowers `call_expression` nodes (and the expressions reachable from
//! them) into the core syntax model. Anything the model does not
//! distinguish becomes `Other`, never an error.

use tree_sitter::{Language, Node, Parser};

use effect_lint_core::ast::{
    Block, CallExpr, Expr, FnBody, FnExpr, Ident, ReturnStmt, Span, Stmt,
};

use crate::frontend::{FrontendError, LanguageFrontend};

/// Extracts call-sites from JavaScript source (including JSX).
pub struct JsFrontend {
    language: Language,
}

impl JsFrontend {
    /// Creates a new JavaScript front-end.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_javascript::LANGUAGE.into(),
        }
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
    }

    fn span(node: &Node<'_>) -> Span {
        let start = node.start_position();
        Span {
            line: start.row + 1,
            column: start.column + 1,
            offset: node.start_byte(),
            length: node.end_byte().saturating_sub(node.start_byte()),
        }
    }

    fn lower_call(node: &Node<'_>, src: &[u8]) -> CallExpr {
        let callee = node
            .child_by_field_name("function")
            .map_or(Expr::Other(Self::span(node)), |n| Self::lower_expr(&n, src));

        let mut arguments = Vec::new();
        if let Some(args) = node.child_by_field_name("arguments") {
            let mut cursor = args.walk();
            for child in args.named_children(&mut cursor) {
                if child.kind() == "comment" {
                    continue;
                }
                arguments.push(Self::lower_expr(&child, src));
            }
        }

        CallExpr {
            callee: Box::new(callee),
            arguments,
            span: Self::span(node),
        }
    }

    fn lower_expr(node: &Node<'_>, src: &[u8]) -> Expr {
        match node.kind() {
            "identifier" => Expr::Ident(Ident {
                name: Self::text(node, src).to_owned(),
                span: Self::span(node),
            }),
            "call_expression" => Expr::Call(Self::lower_call(node, src)),
            "arrow_function" => Expr::Function(Self::lower_arrow(node, src)),
            // "function" is the pre-0.21 grammar name for function expressions
            "function_expression" | "function" => Expr::Function(Self::lower_function(node, src)),
            "parenthesized_expression" => node
                .named_child(0)
                .map_or(Expr::Other(Self::span(node)), |inner| {
                    Self::lower_expr(&inner, src)
                }),
            _ => Expr::Other(Self::span(node)),
        }
    }

    fn lower_arrow(node: &Node<'_>, src: &[u8]) -> FnExpr {
        let body = match node.child_by_field_name("body") {
            Some(body) if body.kind() == "statement_block" => {
                FnBody::Block(Self::lower_block(&body, src))
            }
            Some(body) => FnBody::Expr(Box::new(Self::lower_expr(&body, src))),
            None => FnBody::Block(Block::default()),
        };

        FnExpr {
            name: None,
            is_arrow: true,
            body,
            span: Self::span(node),
        }
    }

    fn lower_function(node: &Node<'_>, src: &[u8]) -> FnExpr {
        let name = node
            .child_by_field_name("name")
            .map(|n| Self::text(&n, src).to_owned());

        let body = node
            .child_by_field_name("body")
            .map_or_else(Block::default, |b| Self::lower_block(&b, src));

        FnExpr {
            name,
            is_arrow: false,
            body: FnBody::Block(body),
            span: Self::span(node),
        }
    }

    /// Lowers a statement block, keeping only its top-level statements.
    /// Statements inside nested braces stay behind `Stmt::Other`.
    fn lower_block(node: &Node<'_>, src: &[u8]) -> Block {
        let mut statements = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "comment" => {}
                "return_statement" => statements.push(Stmt::Return(Self::lower_return(&child, src))),
                "expression_statement" => {
                    let expr = child
                        .named_child(0)
                        .map_or(Expr::Other(Self::span(&child)), |e| {
                            Self::lower_expr(&e, src)
                        });
                    statements.push(Stmt::Expr(expr));
                }
                _ => statements.push(Stmt::Other(Self::span(&child))),
            }
        }
        Block { statements }
    }

    fn lower_return(node: &Node<'_>, src: &[u8]) -> ReturnStmt {
        let mut argument = None;
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() != "comment" {
                argument = Some(Self::lower_expr(&child, src));
                break;
            }
        }

        ReturnStmt {
            argument,
            span: Self::span(node),
        }
    }

    fn collect_calls(node: &Node<'_>, src: &[u8], out: &mut Vec<CallExpr>) {
        if node.kind() == "call_expression" {
            out.push(Self::lower_call(node, src));
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            Self::collect_calls(&child, src, out);
        }
    }
}

impl Default for JsFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageFrontend for JsFrontend {
    fn language_id(&self) -> &'static str {
        "javascript"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".js", ".jsx", ".mjs", ".cjs"]
    }

    fn extract_calls(&self, source: &str) -> Result<Vec<CallExpr>, FrontendError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| FrontendError::Language {
                language: self.language_id(),
                message: e.to_string(),
            })?;

        let src = source.as_bytes();
        let tree = parser.parse(src, None).ok_or(FrontendError::NoTree)?;

        let mut calls = Vec::new();
        Self::collect_calls(&tree.root_node(), src, &mut calls);
        Ok(calls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(src: &str) -> Vec<CallExpr> {
        JsFrontend::new().extract_calls(src).unwrap()
    }

    fn single(src: &str) -> CallExpr {
        let calls = extract(src);
        assert_eq!(calls.len(), 1, "expected one call in {src:?}");
        calls.into_iter().next().unwrap()
    }

    #[test]
    fn lowers_identifier_callee() {
        let call = single("effect(setup);");
        assert_eq!(call.callee_name(), Some("effect"));
        assert!(matches!(&call.arguments[0], Expr::Ident(id) if id.name == "setup"));
    }

    #[test]
    fn lowers_arrow_with_block_body() {
        let call = single("effect(() => { run(); });");
        let Expr::Function(func) = &call.arguments[0] else {
            panic!("expected function argument");
        };
        assert!(func.is_arrow);
        assert!(func.name.is_none());
        let FnBody::Block(block) = &func.body else {
            panic!("expected block body");
        };
        // the inner run() call lowers as an expression statement
        assert!(matches!(&block.statements[0], Stmt::Expr(Expr::Call(_))));
    }

    #[test]
    fn lowers_arrow_with_expression_body() {
        let call = single("effect(() => startTimer());");
        let Expr::Function(func) = &call.arguments[0] else {
            panic!("expected function argument");
        };
        assert!(matches!(&func.body, FnBody::Expr(inner) if matches!(inner.as_ref(), Expr::Call(_))));
    }

    #[test]
    fn lowers_named_function_expression() {
        let call = single("effect(function setup() { return teardown; });");
        let Expr::Function(func) = &call.arguments[0] else {
            panic!("expected function argument");
        };
        assert!(!func.is_arrow);
        assert_eq!(func.name.as_deref(), Some("setup"));
        let FnBody::Block(block) = &func.body else {
            panic!("expected block body");
        };
        assert!(matches!(&block.statements[0], Stmt::Return(r) if r.has_argument()));
    }

    #[test]
    fn lowers_anonymous_function_expression() {
        let call = single("effect(function () {});");
        let Expr::Function(func) = &call.arguments[0] else {
            panic!("expected function argument");
        };
        assert!(func.name.is_none());
        assert!(!func.is_arrow);
    }

    #[test]
    fn bare_return_has_no_argument() {
        let call = single("effect(function setup() { return; });");
        let Expr::Function(func) = &call.arguments[0] else {
            panic!("expected function argument");
        };
        let FnBody::Block(block) = &func.body else {
            panic!("expected block body");
        };
        assert!(matches!(&block.statements[0], Stmt::Return(r) if !r.has_argument()));
    }

    #[test]
    fn nested_returns_stay_behind_other() {
        let call = single("effect(function setup() { if (x) { return teardown; } });");
        let Expr::Function(func) = &call.arguments[0] else {
            panic!("expected function argument");
        };
        let FnBody::Block(block) = &func.body else {
            panic!("expected block body");
        };
        assert!(matches!(&block.statements[0], Stmt::Other(_)));
    }

    #[test]
    fn member_callee_is_other() {
        let call = single("framework.effect(() => {});");
        assert_eq!(call.callee_name(), None);
    }

    #[test]
    fn finds_nested_call_sites() {
        let calls = extract(
            "function App() {\n  effect(function setup() { return stop; });\n}\nconst x = effect(run);\n",
        );
        let effect_calls: Vec<_> = calls
            .iter()
            .filter(|c| c.callee_name() == Some("effect"))
            .collect();
        assert_eq!(effect_calls.len(), 2);
    }

    #[test]
    fn parenthesized_callback_is_unwrapped() {
        let call = single("effect((function setup() { return stop; }));");
        assert!(matches!(&call.arguments[0], Expr::Function(f) if f.name.as_deref() == Some("setup")));
    }

    #[test]
    fn spans_are_one_indexed() {
        let calls = extract("\neffect(setup);");
        let call = calls
            .iter()
            .find(|c| c.callee_name() == Some("effect"))
            .unwrap();
        assert_eq!(call.span.line, 2);
        assert_eq!(call.span.column, 1);
        assert_eq!(call.span.offset, 1);
    }

    #[test]
    fn syntax_errors_do_not_fail_extraction() {
        // Partial tree: the well-formed call is still found.
        let calls = extract("effect(setup);\nfunction {{{\n");
        assert!(calls.iter().any(|c| c.callee_name() == Some("effect")));
    }

    #[test]
    fn empty_source_yields_no_calls() {
        assert!(extract("").is_empty());
    }
}
