use alloc::string::String;
use core::fmt::{Display, Formatter, Result, Write};

use super::Schema;
use crate::attribute::{write_list, Attribute};

/// Shown in place of the dependency list when there is nothing to list.
pub const NO_DEPENDENCIES: &str = "No non-trivial dependencies";

impl<A> Schema<A>
where
    A: Attribute + Display,
{
    /// `R[a, b, c]`.
    #[must_use]
    pub fn relation_string(&self) -> String {
        let mut output = String::from("R");
        let _ = write_list(&mut output, self.attributes.iter());
        output
    }

    /// One `N. [X] → [Y]` line per dependency, numbered from 1, or
    /// [`NO_DEPENDENCIES`].
    #[must_use]
    pub fn dependencies_string(&self) -> String {
        if self.dependencies.is_empty() {
            return String::from(NO_DEPENDENCIES);
        }
        let mut output = String::new();
        for (position, dependency) in self.dependencies.iter().enumerate() {
            if position > 0 {
                output.push('\n');
            }
            let _ = write!(output, "{}. {dependency}", position + 1);
        }
        output
    }
}

/// The relation line, a blank line, then the dependency lines.
impl<A> Display for Schema<A>
where
    A: Attribute + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}\n\n{}", self.relation_string(), self.dependencies_string())
    }
}

/// Format a schema in the compact text notation read by `fdnorm_parser`.
///
/// The first line is `R(a, b, c)`; each dependency follows on its own line as
/// `a, b -> c`. The output always ends with a trailing newline so it parses
/// back to an equal schema.
#[must_use]
pub fn format_schema<A>(schema: &Schema<A>) -> String
where
    A: Attribute + Display,
{
    let mut output = String::from("R(");
    write_joined(&mut output, schema.attributes.iter());
    output.push_str(")\n");
    for dependency in &schema.dependencies {
        write_joined(&mut output, dependency.lhs.iter());
        output.push_str(" -> ");
        write_joined(&mut output, dependency.rhs.iter());
        output.push('\n');
    }
    output
}

fn write_joined<'a, A, I>(output: &mut String, items: I)
where
    A: Display + 'a,
    I: IntoIterator<Item = &'a A>,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        let _ = write!(output, "{item}");
    }
}
