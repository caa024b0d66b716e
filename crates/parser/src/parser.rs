use fdnorm_core::Schema;
/// Winnow-based parser for the schema text notation.
///
/// Grammar:
/// ```text
/// document    = (blank | comment)* relation (NEWLINE item)* NEWLINE?
/// relation    = "R" "(" attr_list? ")"
/// item        = blank | comment | dependency
/// dependency  = attr_list ARROW attr_list
/// attr_list   = IDENT (("," | WHITESPACE) IDENT)*
/// ARROW       = "->" | "→"
/// IDENT       = [A-Za-z_][A-Za-z0-9_]*
/// ```
///
/// Trailing `//` comments are allowed at the end of the relation and
/// dependency lines.
use winnow::ascii::{line_ending, till_line_ending};
use winnow::combinator::{alt, eof, opt, separated};
use winnow::error::{StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{literal, one_of, take_while};
use winnow::ModalResult;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A parse error with human-readable location information.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "parse error at line {}, column {}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// A dependency as written, before it is checked against the relation.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyLine {
    pub lhs: Vec<String>,
    pub rhs: Vec<String>,
    /// 1-based source line.
    pub line: usize,
}

/// A syntactically valid document.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Attribute labels in header order, duplicates included.
    pub attributes: Vec<String>,
    pub dependencies: Vec<DependencyLine>,
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Parse a document without interpreting it.
///
/// # Errors
///
/// Returns a [`ParseError`] with line/column information when the input does
/// not conform to the grammar.
pub fn parse_document(input: &str) -> Result<Document, ParseError> {
    let original = input;
    let mut stream: &str = input;
    match document.parse_next(&mut stream) {
        Ok(raw) => Ok(Document {
            attributes: raw.attributes,
            dependencies: raw
                .dependencies
                .into_iter()
                .map(|(remaining, lhs, rhs)| DependencyLine {
                    lhs,
                    rhs,
                    line: offset_to_line_col(original, original.len() - remaining).0,
                })
                .collect(),
        }),
        Err(e) => {
            let consumed = original.len().saturating_sub(stream.len());
            let (line, column) = offset_to_line_col(original, consumed);
            Err(ParseError {
                message: e.to_string(),
                line,
                column,
            })
        }
    }
}

/// Parse a document and build the schema it describes.
///
/// # Errors
///
/// Syntax errors as in [`parse_document`]. A dependency the schema rejects
/// (unknown attribute, both sides sharing an attribute) is reported at the
/// start of its line.
pub fn parse_schema(input: &str) -> Result<Schema<String>, ParseError> {
    let document = parse_document(input)?;
    let mut schema = Schema::new(document.attributes);
    for dependency in document.dependencies {
        schema
            .add_dependency(dependency.lhs, dependency.rhs)
            .map_err(|e| ParseError {
                message: e.to_string(),
                line: dependency.line,
                column: 1,
            })?;
    }
    tracing::debug!(
        attributes = schema.attributes().len(),
        dependencies = schema.dependency_count(),
        "parsed schema"
    );
    Ok(schema)
}

// ---------------------------------------------------------------------------
// Line/column helper
// ---------------------------------------------------------------------------

/// Convert a byte offset into the original input to 1-based (line, column).
fn offset_to_line_col(input: &str, offset: usize) -> (usize, usize) {
    let safe_offset = offset.min(input.len());
    let prefix = &input[..safe_offset];
    let line = prefix.bytes().filter(|&b| b == b'\n').count() + 1;
    let column = prefix
        .rfind('\n')
        .map_or_else(|| prefix.len() + 1, |pos| prefix.len() - pos);
    (line, column)
}

// ---------------------------------------------------------------------------
// Whitespace and line helpers
// ---------------------------------------------------------------------------

/// Inline whitespace: spaces and tabs only (no newlines).
fn inline_ws(input: &mut &str) -> ModalResult<()> {
    take_while(1.., |c: char| c == ' ' || c == '\t')
        .void()
        .parse_next(input)
}

/// Optional inline whitespace.
fn opt_inline_ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c == ' ' || c == '\t')
        .void()
        .parse_next(input)
}

/// `"//" <rest-of-line>`, without the line ending.
fn comment(input: &mut &str) -> ModalResult<()> {
    (literal("//"), till_line_ending).void().parse_next(input)
}

/// Optional trailing comment, then a line ending or end of input.
fn line_end(input: &mut &str) -> ModalResult<()> {
    (
        opt_inline_ws,
        opt(comment),
        alt((line_ending.void(), eof.void())),
    )
        .void()
        .context(StrContext::Expected(StrContextValue::Description(
            "end of line",
        )))
        .parse_next(input)
}

/// A line holding only whitespace and possibly a comment.
fn blank_or_comment_line(input: &mut &str) -> ModalResult<()> {
    (opt_inline_ws, opt(comment), line_ending)
        .void()
        .parse_next(input)
}

// ---------------------------------------------------------------------------
// Leaf parsers
// ---------------------------------------------------------------------------

/// An attribute label: a letter or `_`, then letters, digits or `_`.
fn ident(input: &mut &str) -> ModalResult<String> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .map(str::to_owned)
        .context(StrContext::Expected(StrContextValue::Description(
            "attribute name",
        )))
        .parse_next(input)
}

/// `,` with optional surrounding whitespace, or plain whitespace.
fn attr_separator(input: &mut &str) -> ModalResult<()> {
    alt(((opt_inline_ws, literal(","), opt_inline_ws).void(), inline_ws)).parse_next(input)
}

fn attr_list(input: &mut &str) -> ModalResult<Vec<String>> {
    separated(1.., ident, attr_separator).parse_next(input)
}

fn arrow(input: &mut &str) -> ModalResult<()> {
    alt((literal("->"), literal("\u{2192}")))
        .void()
        .context(StrContext::Expected(StrContextValue::StringLiteral("->")))
        .parse_next(input)
}

// ---------------------------------------------------------------------------
// Line parsers
// ---------------------------------------------------------------------------

/// `"R" "(" attr_list? ")"`
fn relation(input: &mut &str) -> ModalResult<Vec<String>> {
    opt_inline_ws.parse_next(input)?;
    literal("R")
        .context(StrContext::Label("relation header"))
        .context(StrContext::Expected(StrContextValue::StringLiteral("R(")))
        .parse_next(input)?;
    opt_inline_ws.parse_next(input)?;
    literal("(").parse_next(input)?;
    opt_inline_ws.parse_next(input)?;
    let attributes = opt(attr_list).parse_next(input)?.unwrap_or_default();
    opt_inline_ws.parse_next(input)?;
    literal(")")
        .context(StrContext::Expected(StrContextValue::CharLiteral(')')))
        .parse_next(input)?;
    line_end.parse_next(input)?;
    Ok(attributes)
}

/// `attr_list ARROW attr_list`
fn dependency(input: &mut &str) -> ModalResult<(Vec<String>, Vec<String>)> {
    opt_inline_ws.parse_next(input)?;
    let lhs = attr_list.parse_next(input)?;
    opt_inline_ws.parse_next(input)?;
    arrow.parse_next(input)?;
    opt_inline_ws.parse_next(input)?;
    let rhs = attr_list.parse_next(input)?;
    line_end.parse_next(input)?;
    Ok((lhs, rhs))
}

// ---------------------------------------------------------------------------
// Document parser
// ---------------------------------------------------------------------------

/// Dependencies keyed by the input length left when their line started.
struct RawDocument {
    attributes: Vec<String>,
    dependencies: Vec<(usize, Vec<String>, Vec<String>)>,
}

fn document(input: &mut &str) -> ModalResult<RawDocument> {
    while blank_or_comment_line.parse_next(input).is_ok() {}
    let attributes = relation.parse_next(input)?;

    let mut dependencies = Vec::new();
    while !input.is_empty() {
        if blank_or_comment_line.parse_next(input).is_ok() {
            continue;
        }
        let remaining = input.len();
        let (lhs, rhs) = dependency
            .context(StrContext::Label("dependency"))
            .parse_next(input)?;
        dependencies.push((remaining, lhs, rhs));
    }

    Ok(RawDocument {
        attributes,
        dependencies,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
