//! Dependency reasoning on top of [`Schema`](crate::schema::Schema):
//! minimal covers, candidate keys, normal forms and decompositions.
//!
//! Every operation here works on private copies of the dependency list and
//! leaves the queried schema untouched.

pub mod bcnf;
pub mod cover;
pub mod decomposition;
pub mod keys;
pub mod normal_form;
pub mod synthesis;

pub use decomposition::Decomposition;
pub use keys::MAX_KEY_EXTENSION;
pub use normal_form::{Classification, NormalForm, Violation};
