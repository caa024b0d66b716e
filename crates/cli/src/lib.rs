//! fdnorm CLI -- analyze and normalize relation schemas.

use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

use clap::{Parser, Subcommand, ValueEnum};
use fdnorm_core::Schema;
use fdnorm_parser::ParseError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod report;

#[derive(Debug, Parser)]
#[command(
    name = "fdnorm",
    about = "Functional dependency analysis and schema normalization"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate random schemas as JSON files
    Generate(GenerateArgs),
    /// Summarize a schema: keys, normal form and minimal cover
    Analyze(InputArgs),
    /// Compute the closure of a set of attributes
    Closure(ClosureArgs),
    /// List the candidate keys
    Keys(InputArgs),
    /// Compute a minimal cover of the dependencies
    Cover(CoverArgs),
    /// Report the highest normal form and what blocks the next one
    NormalForm(InputArgs),
    /// Decompose into 3NF or BCNF
    Decompose(DecomposeArgs),
    /// Format schema (.fd) files
    Fmt(FmtArgs),
    /// Print the JSON Schema for the JSON input format to stdout
    Schema,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Number of schemas to generate
    #[arg(long)]
    pub n_schema: u64,
    /// Number of attributes per schema
    #[arg(long)]
    pub n_attribute: u32,
    /// Number of dependencies per schema
    #[arg(long)]
    pub n_dependency: u32,
    /// Largest left-hand side
    #[arg(long, default_value_t = 2)]
    pub max_lhs: u32,
    /// Base seed; schema `i` uses `seed + i`
    #[arg(long)]
    pub seed: Option<u64>,
    /// Output directory for generated schema files
    #[arg(long)]
    pub output_dir: PathBuf,
}

#[derive(Debug, Parser)]
pub struct InputArgs {
    /// Schema file: `.json`, or the text notation otherwise
    pub input: PathBuf,
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct ClosureArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Comma-separated attributes to close over
    #[arg(long, value_delimiter = ',', required = true)]
    pub attrs: Vec<String>,
}

#[derive(Debug, Parser)]
pub struct CoverArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Merge dependencies that share a left-hand side
    #[arg(long)]
    pub union: bool,
}

#[derive(Debug, Parser)]
pub struct DecomposeArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Target normal form
    #[arg(long, value_enum)]
    pub into: Target,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Target {
    ThreeNf,
    Bcnf,
}

#[derive(Debug, Parser)]
pub struct FmtArgs {
    /// Input files or directories to format
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
    /// Check formatting without modifying files (exit 1 if unformatted)
    #[arg(long)]
    pub check: bool,
}

/// JSON input format.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct SchemaFile {
    /// Attribute labels; order and duplicates do not matter.
    pub attributes: Vec<String>,
    /// Dependencies in order; positions count from 1.
    #[serde(default)]
    pub dependencies: Vec<DependencyEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct DependencyEntry {
    pub lhs: Vec<String>,
    pub rhs: Vec<String>,
}

impl SchemaFile {
    /// Builds the schema, validating every dependency.
    ///
    /// # Errors
    ///
    /// The first dependency the schema rejects.
    pub fn into_schema(self) -> Result<Schema<String>, fdnorm_core::Error<String>> {
        let mut schema = Schema::new(self.attributes);
        for dependency in self.dependencies {
            schema.add_dependency(dependency.lhs, dependency.rhs)?;
        }
        Ok(schema)
    }
}

/// Why an input file could not be turned into a schema.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Parse(ParseError),
    Json(serde_json::Error),
    Schema(fdnorm_core::Error<String>),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Json(e) => write!(f, "invalid JSON: {e}"),
            Self::Schema(e) => write!(f, "invalid schema: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Schema(e) => Some(e),
        }
    }
}

/// Parse `contents` as the JSON input format.
///
/// # Errors
///
/// Malformed JSON or a dependency the schema rejects.
pub fn schema_from_json(contents: &str) -> Result<Schema<String>, LoadError> {
    let file: SchemaFile = serde_json::from_str(contents).map_err(LoadError::Json)?;
    file.into_schema().map_err(LoadError::Schema)
}

/// Read a schema from `path`, choosing the format by extension.
///
/// # Errors
///
/// I/O failures and anything [`schema_from_json`] or
/// [`fdnorm_parser::parse_schema`] reject.
pub fn load_schema(path: &Path) -> Result<Schema<String>, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if path.extension().is_some_and(|ext| ext == "json") {
        schema_from_json(&contents)
    } else {
        fdnorm_parser::parse_schema(&contents).map_err(LoadError::Parse)
    }
}

/// Expand `paths` into the `.fd` files to format, directories non-recursively
/// and in name order.
///
/// # Errors
///
/// A directory that cannot be listed.
pub fn collect_fd_files(paths: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(path)?
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|p| p.extension().is_some_and(|ext| ext == "fd"))
                .collect();
            entries.sort();
            files.extend(entries);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}
