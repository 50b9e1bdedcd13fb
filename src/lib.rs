//! Generate Java AST node classes from a compact rule description.
//!
//! ```text
//! Binary   : Expr left, Token operator, Expr right
//! Grouping : Expr expression
//! ```
//!
//! Each rule becomes a `static class` nested in an abstract base class, with
//! one `final` field per typed field and a constructor assigning them. The run
//! is all-or-nothing: either every rule parses and the single output file is
//! written, or nothing is.
pub mod ir;
pub mod rule;
pub mod codegen;
pub mod emit;
pub mod cli;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub use ir::{AstSpec, AstType, Field};
pub use rule::RuleError;
pub use emit::EmitError;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("{} is not a directory, or does not exist", path.display())]
    NotADirectory { path: PathBuf },
    #[error("malformed rule #{index} ({rule:?})")]
    MalformedRule {
        index: usize,
        rule: String,
        #[source]
        source: RuleError,
    },
    #[error(transparent)]
    Emit(#[from] EmitError),
}

impl GenerateError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            GenerateError::Emit(_) => 1,
            GenerateError::NotADirectory { .. } => 2,
            GenerateError::MalformedRule { .. } => 3,
        }
    }

    /// Which pipeline stage failed, for user-facing messages.
    pub fn stage(&self) -> &'static str {
        match self {
            GenerateError::NotADirectory { .. } => "configuration",
            GenerateError::MalformedRule { .. } => "rule parsing",
            GenerateError::Emit(_) => "output",
        }
    }
}

/// Parse and render `spec` without touching the filesystem.
pub fn generate(spec: &AstSpec) -> Result<String, GenerateError> {
    let types = rule::parse_rules(&spec.rules).map_err(|(index, source)| {
        GenerateError::MalformedRule {
            index,
            rule: spec.rules[index].clone(),
            source,
        }
    })?;
    for ty in &types {
        tracing::debug!(name = %ty.name, fields = ty.fields.len(), "parsed rule");
    }
    Ok(codegen::render(spec, &types))
}

/// Validate `output_dir`, generate `spec` and write `<base_name>.java` into it.
pub fn define_ast(output_dir: &Path, spec: &AstSpec) -> Result<PathBuf, GenerateError> {
    if !output_dir.is_dir() {
        return Err(GenerateError::NotADirectory { path: output_dir.to_path_buf() });
    }
    let source = generate(spec)?;
    let path = emit::emit(output_dir, &spec.base_name, &source)?;
    Ok(path)
}
