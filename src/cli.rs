//! Minimal CLI: generate-ast <OUTPUT_DIR>
use std::path::PathBuf;
use clap::Parser;

use crate::{AstSpec, GenerateError};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate the Lox `Expr` AST classes into OUTPUT_DIR/Expr.java
#[derive(Parser, Debug)]
#[command(name = "generate-ast", version)]
pub struct CommandLineInterface {
    /// existing directory to write the generated source into
    output_dir: PathBuf,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<PathBuf, GenerateError> {
        let spec = AstSpec::lox_expr();
        tracing::debug!(
            output_dir = %self.output_dir.display(),
            base_name = %spec.base_name,
            rules = spec.rules.len(),
            "generating"
        );
        crate::define_ast(&self.output_dir, &spec)
    }
}
