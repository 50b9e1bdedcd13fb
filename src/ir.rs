// Plain data for codegen. Built once by the rule parser, read by the renderer.

/// One attribute of a node shape, exactly as written in the rule text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub ty: String,
    pub name: String,
}

/// A parsed rule: one concrete subtype to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstType {
    pub name: String,
    /// trimmed field-list text, interpolated as-is into the constructor signature
    pub raw_fields: String,
    pub fields: Vec<Field>,  // declaration + parameter order
}

/// Everything the generator needs for one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstSpec {
    pub base_name: String,
    pub package: String,
    pub imports: Vec<String>,
    pub rules: Vec<String>,  // order == order of generated subtypes
    /// also emit `Visitor<R>` and per-subtype `accept` methods
    pub visitor: bool,
}

impl Field {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self { ty: ty.into(), name: name.into() }
    }
}

impl AstSpec {
    /// The expression grammar for the Lox interpreter, written to `Expr.java`.
    pub fn lox_expr() -> Self {
        Self {
            base_name: "Expr".to_owned(),
            package: "uk.co.judy.lox".to_owned(),
            imports: vec!["java.util.List".to_owned()],
            rules: vec![
                "Binary   : Expr left, Token operator, Expr right".to_owned(),
                "Grouping : Expr expression".to_owned(),
                "Literal  : Object value".to_owned(),
                "Unary    : Token operator, Expr right".to_owned(),
            ],
            visitor: false,
        }
    }

    pub fn with_visitor(mut self, visitor: bool) -> Self {
        self.visitor = visitor;
        self
    }
}
