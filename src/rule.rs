//! Rule parser: `Name : Type name, Type name, ...` → [`AstType`].
//!
//! The field list is split on `,`, and each trimmed segment is split once at
//! its first whitespace run. Anything after that run is the field name, inner
//! whitespace included: `Expr the right` gives type `Expr`, name `the right`.
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::ir::{AstType, Field};

static FIELD_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("missing ':' between the type name and its field list")]
    MissingColon,
    #[error("empty type name before ':'")]
    EmptyName,
    #[error("field {segment:?} is not of the form `<type> <name>`")]
    MalformedField { segment: String },
}

/// Parse a single rule line.
pub fn parse_rule(rule: &str) -> Result<AstType, RuleError> {
    let (name, raw_fields) = rule.split_once(':').ok_or(RuleError::MissingColon)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(RuleError::EmptyName);
    }
    let raw_fields = raw_fields.trim();

    let fields = raw_fields
        .split(',')
        .map(parse_field)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AstType {
        name: name.to_owned(),
        raw_fields: raw_fields.to_owned(),
        fields,
    })
}

/// Parse a whole rule set, keeping its order. Stops at the first bad rule and
/// reports its index alongside the error.
pub fn parse_rules<I>(rules: I) -> Result<Vec<AstType>, (usize, RuleError)>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    rules
        .into_iter()
        .enumerate()
        .map(|(index, rule)| parse_rule(rule.as_ref()).map_err(|error| (index, error)))
        .collect()
}

fn parse_field(segment: &str) -> Result<Field, RuleError> {
    let segment = segment.trim();
    let mut parts = FIELD_SEPARATOR.splitn(segment, 2);
    match (parts.next(), parts.next()) {
        (Some(ty), Some(name)) if !ty.is_empty() && !name.is_empty() => Ok(Field::new(ty, name)),
        _ => Err(RuleError::MalformedField { segment: segment.to_owned() }),
    }
}
