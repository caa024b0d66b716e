//! Functional dependency reasoning for relational schemas.
//!
//! `fdnorm_core` works on a [`Schema`]: a finite set of attributes plus an
//! ordered list of functional dependencies between subsets of them. From a
//! schema it computes the classical artifacts of normalization theory:
//!
//! 1. **Closures** -- every attribute determined by a given set.
//! 2. **Minimal covers** -- an equivalent, irredundant dependency list.
//! 3. **Candidate keys** and the prime attributes they are made of.
//! 4. **Normal forms** -- 1NF, 2NF, 3NF or BCNF, together with the first
//!    dependency that keeps the relation from the next form.
//! 5. **Decompositions** -- 3NF synthesis and top-down BCNF decomposition,
//!    the latter reporting any dependencies it could not preserve.
//!
//! Attributes are opaque labels: any type that is ordered, hashable and
//! cloneable can be used (see [`Attribute`]). Their `Ord` is the canonical
//! order used for rendering and for enumerating combinations, so results are
//! deterministic.
//!
//! ```rust
//! use fdnorm_core::{AttributeSet, NormalForm, Schema};
//!
//! let mut schema = Schema::new(["A", "B", "C"]);
//! schema.add_dependency(["A"], ["B"]).unwrap();
//! schema.add_dependency(["B"], ["C"]).unwrap();
//!
//! let closure = schema.closure(&AttributeSet::from(["A"]), None).unwrap();
//! assert_eq!(closure, AttributeSet::from(["A", "B", "C"]));
//! assert_eq!(schema.candidate_keys(), vec![AttributeSet::from(["A"])]);
//! assert_eq!(schema.highest_normal_form(), NormalForm::Second);
//! ```
//!
//! Dependencies are addressed by 1-based position, as they are numbered when
//! displayed. Invalid arguments are reported through [`Error`] and never
//! modify the schema.
//!
//! Candidate-key search and dependency projection are bounded heuristics:
//! keys needing more than [`MAX_KEY_EXTENSION`] attributes beyond a
//! dependency's left-hand side, and projected dependencies with left-hand
//! sides wider than the widest existing one plus one, are not explored.
//!
//! # Crate features
//!
//! - **`serde`** -- enables `Serialize` derives on schemas and
//!   decompositions, and `Serialize`/`Deserialize` on attribute sets,
//!   dependencies, normal forms, violations and errors.
//!
//! This crate is `no_std` compatible (requires `alloc`). The text notation
//! parser lives in the separate `fdnorm_parser` crate.

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod attribute;
pub mod normalization;
pub mod schema;

pub use attribute::{Attribute, AttributeSet};
pub use normalization::{
    Classification, Decomposition, NormalForm, Violation, MAX_KEY_EXTENSION,
};
pub use schema::{format_schema, Error, FunctionalDependency, Schema};
