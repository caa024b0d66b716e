pub mod parser;

pub use parser::{parse_document, parse_schema, DependencyLine, Document, ParseError};
