//! Strict parsing of the `TypeName{name=value, ...}` grammar.

use quiver_core::status::format_error;
use quiver_core::QuiverResult;

/// Strips the exact `TypeName{` prefix and `}` suffix, returning the body.
pub(crate) fn strip_wrapper<'a>(text: &'a str, type_name: &str) -> QuiverResult<&'a str> {
    let body = text
        .strip_prefix(type_name)
        .and_then(|rest| rest.strip_prefix('{'))
        .ok_or_else(|| {
            format_error(format!(
                "expected `{}{{...}}`, found `{}`",
                type_name, text
            ))
        })?;
    body.strip_suffix('}')
        .ok_or_else(|| format_error(format!("missing closing brace in `{}`", text)))
}

/// Splits the body into `name=value` fields and checks names and count.
///
/// Fields are separated by `", "` exactly and must appear in the canonical
/// order. Returns the raw value texts.
pub(crate) fn parse_fields<'a>(
    text: &'a str,
    type_name: &str,
    names: &[&str],
) -> QuiverResult<Vec<&'a str>> {
    let body = strip_wrapper(text, type_name)?;
    let fields: Vec<&str> = if body.is_empty() {
        Vec::new()
    } else {
        body.split(", ").collect()
    };
    if fields.len() != names.len() {
        return Err(format_error(format!(
            "`{}` expects {} fields, found {}",
            type_name,
            names.len(),
            fields.len()
        )));
    }

    let mut values = Vec::with_capacity(names.len());
    for (field, expected) in fields.iter().zip(names) {
        let (name, value) = field
            .split_once('=')
            .ok_or_else(|| format_error(format!("malformed field `{}`", field)))?;
        if name != *expected {
            return Err(format_error(format!(
                "expected field `{}`, found `{}`",
                expected, name
            )));
        }
        values.push(value);
    }
    Ok(values)
}
