//! Java source generation for an AST class hierarchy.
//!
//! Output is built directly as text, one subtype block per [`AstType`]. The
//! whitespace layout (including the indentation-only separator lines and the
//! missing final newline) is part of the contract: identical input must give
//! byte-identical files across runs.
use crate::ir::{AstSpec, AstType};

const INDENT: &str = "    ";

pub struct Codegen<'a> {
    spec: &'a AstSpec,
    out: String,
}

/// Render the whole file for `spec` and its parsed `types`.
pub fn render(spec: &AstSpec, types: &[AstType]) -> String {
    let mut cg = Codegen::new(spec);
    cg.emit(types);
    cg.into_string()
}

impl<'a> Codegen<'a> {
    pub fn new(spec: &'a AstSpec) -> Self {
        Self { spec, out: String::new() }
    }

    pub fn into_string(self) -> String {
        self.out
    }

    pub fn emit(&mut self, types: &[AstType]) {
        let spec = self.spec;
        self.emit_header();
        self.push(&format!("abstract class {} {{", spec.base_name));
        if spec.visitor {
            self.emit_visitor_interface(types);
        }
        for ty in types {
            self.emit_subtype(ty);
        }
        if spec.visitor {
            self.line(1, "abstract <R> R accept(Visitor<R> visitor);");
        }
        self.push("\n}");
    }

    // ————————————————————————————————————————————————————————————————————————
    // SECTIONS
    // ————————————————————————————————————————————————————————————————————————

    fn emit_header(&mut self) {
        let spec = self.spec;
        self.push(&format!("package {};\n\n", spec.package));
        for import in &spec.imports {
            self.push(&format!("import {import};\n"));
        }
        if !spec.imports.is_empty() {
            self.push("\n");
        }
    }

    fn emit_visitor_interface(&mut self, types: &[AstType]) {
        let spec = self.spec;
        let base = spec.base_name.as_str();
        let param = base.to_lowercase();
        self.line(1, "interface Visitor<R> {");
        for ty in types {
            let method = visit_method(&ty.name, base);
            self.line(2, &format!("R {method}({} {param});", ty.name));
        }
        self.line(1, "}");
        self.blank(1);
    }

    fn emit_subtype(&mut self, ty: &AstType) {
        let spec = self.spec;
        let base = &spec.base_name;
        self.line(1, &format!("static class {} extends {base} {{", ty.name));

        // constructor takes the field list exactly as written in the rule
        self.line(2, &format!("{}({}) {{", ty.name, ty.raw_fields));
        for field in &ty.fields {
            self.line(3, &format!("this.{0} = {0};", field.name));
        }
        self.line(2, "}");

        if spec.visitor {
            self.blank(2);
            self.line(2, "@Override");
            self.line(2, "<R> R accept(Visitor<R> visitor) {");
            self.line(3, &format!("return visitor.{}(this);", visit_method(&ty.name, base)));
            self.line(2, "}");
        }

        self.blank(2);
        for field in &ty.fields {
            self.line(2, &format!("final {} {};", field.ty, field.name));
        }
        self.line(1, "}");
        self.blank(1);
    }

    // ————————————————————————————————————————————————————————————————————————
    // INTERNAL HELPERS
    // ————————————————————————————————————————————————————————————————————————

    fn push(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Lines are emitted newline-first, so the file never ends with one.
    fn line(&mut self, depth: usize, text: &str) {
        self.out.push('\n');
        self.out.push_str(&INDENT.repeat(depth));
        self.out.push_str(text);
    }

    // separator lines carry the surrounding indentation
    fn blank(&mut self, depth: usize) {
        self.line(depth, "");
    }
}

fn visit_method(type_name: &str, base_name: &str) -> String {
    format!("visit{type_name}{base_name}")
}
