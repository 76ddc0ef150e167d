use std::rc::Rc;

/// A modifier written as `@word` in front of a primary expression or a
/// function parameter.
///
/// Only `@lazy` carries meaning today: a lazy parameter receives its argument
/// as an unevaluated thunk. Every other annotation word is kept in the tree
/// but has no effect at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// `@lazy`: the argument for this parameter is not evaluated at the call
    /// site.
    Lazy,
    /// Any annotation word the evaluator does not recognize. Parsed and
    /// retained, but inert.
    Other(String),
}

impl Annotation {
    /// Maps an annotation word (without the leading `@`) to its variant.
    ///
    /// # Example
    /// ```
    /// use curra::ast::Annotation;
    ///
    /// assert_eq!(Annotation::from_word("lazy"), Annotation::Lazy);
    /// assert_eq!(Annotation::from_word("trace"),
    ///            Annotation::Other("trace".to_string()));
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        match word {
            "lazy" => Self::Lazy,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A function parameter: a name plus the annotations written in front of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// The parameter name.
    pub name:        String,
    /// Annotations seen immediately before the name (e.g. `@lazy`).
    pub annotations: Vec<Annotation>,
    /// Line number in the source code.
    pub line:        usize,
}

impl Param {
    /// Whether arguments for this parameter are passed as unevaluated thunks.
    #[must_use]
    pub fn is_lazy(&self) -> bool {
        self.annotations.contains(&Annotation::Lazy)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// The language has exactly three node kinds. Binary operators are desugared
/// by the parser into `FuncCall` nodes whose callee is the operator symbol as
/// an `Ident`, so the evaluator only ever sees these three shapes. Child
/// nodes are reference counted so closures and thunks can share subtrees with
/// the tree they were built from.
///
/// Nodes are immutable once parsing finishes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A name. May refer to a bound variable, an operator used as a callable
    /// symbol (e.g. `+`), or an integer literal, which is recognized when the
    /// node is evaluated.
    Ident {
        /// The identifier text.
        name:        String,
        /// Annotations seen immediately before this node.
        annotations: Vec<Annotation>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A function definition: `fn(a, b) body`.
    FuncDef {
        /// The ordered parameter list.
        params:      Vec<Param>,
        /// The body expression, evaluated on invocation.
        body:        Rc<Self>,
        /// Annotations seen immediately before this node.
        annotations: Vec<Annotation>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A function call: `callee(arg, ...)`. Curried chains like `f(a)(b)`
    /// nest these, outermost last.
    FuncCall {
        /// The expression producing the callable.
        callee:      Rc<Self>,
        /// The argument expressions, in source order.
        arguments:   Vec<Rc<Self>>,
        /// Annotations seen immediately before this node.
        annotations: Vec<Annotation>,
        /// Line number in the source code.
        line:        usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use curra::ast::Expr;
    ///
    /// let expr = Expr::Ident { name:        "x".to_string(),
    ///                          annotations: Vec::new(),
    ///                          line:        5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Ident { line, .. } | Self::FuncDef { line, .. } | Self::FuncCall { line, .. } => {
                *line
            },
        }
    }

    /// The annotations attached to this node.
    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        match self {
            Self::Ident { annotations, .. }
            | Self::FuncDef { annotations, .. }
            | Self::FuncCall { annotations, .. } => annotations,
        }
    }

    /// Splices `front` ahead of any annotations the node already carries.
    /// Used when a grouped expression inherits the annotations written in
    /// front of its braces.
    pub(crate) fn prepend_annotations(&mut self, mut front: Vec<Annotation>) {
        if front.is_empty() {
            return;
        }
        let list = match self {
            Self::Ident { annotations, .. }
            | Self::FuncDef { annotations, .. }
            | Self::FuncCall { annotations, .. } => annotations,
        };
        front.append(list);
        *list = front;
    }
}
