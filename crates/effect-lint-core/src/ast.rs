//! Typed syntax model consumed by rules.
//!
//! A front-end lowers concrete syntax (e.g. a tree-sitter parse tree) into
//! these nodes before rules run. The model is a tagged union over exactly
//! the shapes effect rules care about; anything else becomes
//! [`Expr::Other`] / [`Stmt::Other`] and is never an error, only a
//! non-match. All nodes are immutable once lowered.

use serde::{Deserialize, Serialize};

/// Source span of a node, as reported by the front-end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset from the start of the file.
    pub offset: usize,
    /// Length of the node in bytes.
    pub length: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub fn new(line: usize, column: usize, offset: usize, length: usize) -> Self {
        Self {
            line,
            column,
            offset,
            length,
        }
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An invocation expression.
    Call(CallExpr),
    /// A bare name reference.
    Ident(Ident),
    /// A function value (arrow or function expression).
    Function(FnExpr),
    /// Any expression shape this model does not distinguish.
    Other(Span),
}

impl Expr {
    /// Returns the source span of this expression.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Call(call) => call.span,
            Self::Ident(ident) => ident.span,
            Self::Function(func) => func.span,
            Self::Other(span) => *span,
        }
    }
}

/// An invocation expression: `callee(arguments...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    /// The expression being invoked.
    pub callee: Box<Expr>,
    /// Ordered argument expressions.
    pub arguments: Vec<Expr>,
    /// Span of the whole call.
    pub span: Span,
}

impl CallExpr {
    /// Returns the callee name if the callee is a bare identifier.
    ///
    /// Member accesses (`obj.effect(...)`) and computed callees return
    /// `None`; aliasing is intentionally not resolved.
    #[must_use]
    pub fn callee_name(&self) -> Option<&str> {
        match self.callee.as_ref() {
            Expr::Ident(ident) => Some(&ident.name),
            _ => None,
        }
    }
}

/// A bare name reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    /// The referenced name.
    pub name: String,
    /// Span of the identifier.
    pub span: Span,
}

/// A function value: arrow function or function expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnExpr {
    /// Explicit identifier, if the function carries one
    /// (`function setup() {}`). Arrows never do.
    pub name: Option<String>,
    /// `true` for arrow functions.
    pub is_arrow: bool,
    /// Function body.
    pub body: FnBody,
    /// Span of the whole function.
    pub span: Span,
}

impl FnExpr {
    /// Whether this function has an explicit syntactic name.
    #[must_use]
    pub fn has_name(&self) -> bool {
        self.name.is_some()
    }
}

/// Body of a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FnBody {
    /// Brace-delimited statement sequence.
    Block(Block),
    /// Implicit-return expression body (arrow shorthand).
    Expr(Box<Expr>),
}

/// A brace-delimited statement sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    /// Top-level statements, in source order. Statements nested inside
    /// branches or loops are not flattened into this sequence.
    pub statements: Vec<Stmt>,
}

/// A statement node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// A `return` statement.
    Return(ReturnStmt),
    /// An expression statement.
    Expr(Expr),
    /// Any statement shape this model does not distinguish.
    Other(Span),
}

/// A `return` statement, with its argument if one is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStmt {
    /// The returned expression, if any (`return;` has none).
    pub argument: Option<Expr>,
    /// Span of the statement.
    pub span: Span,
}

impl ReturnStmt {
    /// Whether a non-empty value is returned.
    #[must_use]
    pub fn has_argument(&self) -> bool {
        self.argument.is_some()
    }
}
