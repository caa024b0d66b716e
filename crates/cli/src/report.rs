//! Text and JSON renderings of the analyses the subcommands print.

use std::fmt::Write as _;

use fdnorm_core::schema::ArgumentKind;
use fdnorm_core::{AttributeSet, Decomposition, Error, Schema};
use serde_json::{json, Value};

fn key_list(keys: &[AttributeSet<String>]) -> String {
    keys.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Relation, dependencies, keys, normal form and minimal cover.
#[must_use]
pub fn analysis_text(schema: &Schema<String>) -> String {
    let keys = schema.candidate_keys();
    let classification = schema.classify();
    let cover = schema.minimal_cover(true);

    let mut out = format!("{schema}\n");
    let _ = writeln!(out, "Candidate keys: {}", key_list(&keys));
    let _ = writeln!(out, "Highest normal form: {}", classification.normal_form);
    if let Some(violation) = &classification.violation {
        let _ = writeln!(out, "{violation}");
    }
    let _ = writeln!(out, "\nMinimal cover:\n{}", cover.dependencies_string());
    out
}

#[must_use]
pub fn analysis_json(schema: &Schema<String>) -> Value {
    let classification = schema.classify();
    json!({
        "schema": schema,
        "candidate_keys": schema.candidate_keys(),
        "prime_attributes": schema.prime_attributes(),
        "normal_form": classification.normal_form.to_string(),
        "violation": classification.violation,
        "reason": classification.violation.as_ref().map(ToString::to_string),
        "minimal_cover": schema.minimal_cover(true).dependencies(),
    })
}

/// Closure of `attributes`, rendered as `[A]+ = [A, B]`.
///
/// # Errors
///
/// Attributes outside the schema or an empty list.
pub fn closure_text(schema: &Schema<String>, attributes: &[String]) -> Result<String, Error<String>> {
    let start = checked_set(attributes)?;
    let closure = schema.closure(&start, None)?;
    Ok(format!("{start}+ = {closure}"))
}

/// # Errors
///
/// As in [`closure_text`].
pub fn closure_json(schema: &Schema<String>, attributes: &[String]) -> Result<Value, Error<String>> {
    let start = checked_set(attributes)?;
    let closure = schema.closure(&start, None)?;
    Ok(json!({
        "attributes": start,
        "closure": closure,
        "superkey": &closure == schema.attributes(),
    }))
}

fn checked_set(attributes: &[String]) -> Result<AttributeSet<String>, Error<String>> {
    if attributes.is_empty() {
        return Err(Error::InvalidArgumentType(ArgumentKind::NonEmptyAttributeSet));
    }
    Ok(attributes.iter().cloned().collect())
}

/// One candidate key per line.
#[must_use]
pub fn keys_text(schema: &Schema<String>) -> String {
    schema
        .candidate_keys()
        .iter()
        .map(|key| format!("{key}\n"))
        .collect()
}

#[must_use]
pub fn keys_json(schema: &Schema<String>) -> Value {
    json!({
        "candidate_keys": schema.candidate_keys(),
        "prime_attributes": schema.prime_attributes(),
    })
}

/// Normal form on the first line, followed by the violation, if any.
#[must_use]
pub fn normal_form_text(schema: &Schema<String>) -> String {
    let classification = schema.classify();
    match classification.violation {
        Some(violation) => format!("{}\n{violation}\n", classification.normal_form),
        None => format!("{}\n", classification.normal_form),
    }
}

#[must_use]
pub fn normal_form_json(schema: &Schema<String>) -> Value {
    let classification = schema.classify();
    json!({
        "normal_form": classification.normal_form.to_string(),
        "reason": classification.violation.as_ref().map(ToString::to_string),
        "violation": classification.violation,
    })
}

#[must_use]
pub fn decomposition_json(decomposition: &Decomposition<String>) -> Value {
    json!({
        "decomposed": decomposition.is_decomposed(),
        "dependency_preserving": decomposition.is_dependency_preserving(),
        "relations": decomposition.relations(),
        "lost": decomposition.lost_dependencies(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Schema<String> {
        fdnorm_parser::parse_schema("R(A, B, C)\nA -> B\nB -> C\n").unwrap()
    }

    #[test]
    fn test_analysis_text() {
        let text = analysis_text(&chain());
        assert!(text.contains("Candidate keys: [A]\n"));
        assert!(text.contains("Highest normal form: 2NF\n"));
        assert!(text.contains("Violation: first instance at dependency 2."));
        assert!(text.ends_with("Minimal cover:\n1. [A] → [B]\n2. [B] → [C]\n"));
    }

    #[test]
    fn test_analysis_json() {
        let value = analysis_json(&chain());
        assert_eq!(value["normal_form"], "2NF");
        assert_eq!(value["candidate_keys"], json!([["A"]]));
        assert_eq!(value["violation"]["ThirdNormalForm"]["position"], 2);
    }

    #[test]
    fn test_closure() {
        let schema = chain();
        assert_eq!(
            closure_text(&schema, &["B".to_owned()]).unwrap(),
            "[B]+ = [B, C]"
        );
        let value = closure_json(&schema, &["A".to_owned()]).unwrap();
        assert_eq!(value["superkey"], true);
        assert!(closure_text(&schema, &["Z".to_owned()]).is_err());
        assert!(closure_text(&schema, &[]).is_err());
    }

    #[test]
    fn test_keys_text() {
        assert_eq!(keys_text(&chain()), "[A]\n");
    }

    #[test]
    fn test_normal_form_in_boyce_codd() {
        let schema = fdnorm_parser::parse_schema("R(A, B)\nA -> B\n").unwrap();
        assert_eq!(normal_form_text(&schema), "BCNF\n");
        assert_eq!(normal_form_json(&schema)["violation"], Value::Null);
    }

    #[test]
    fn test_decomposition_json() {
        let value = decomposition_json(&chain().three_nf_synthesis());
        assert_eq!(value["decomposed"], true);
        assert_eq!(value["relations"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["lost"], json!([]));
    }
}
