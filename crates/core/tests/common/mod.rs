/// DSL macro for building test schemas over `&'static str` attributes.
///
/// # Syntax
///
/// ```ignore
/// schema!([A, B, C, D]; A -> B; B, C -> D)
/// ```
///
/// The bracketed list names the attributes; each `; lhs -> rhs` clause adds
/// a dependency in order, panicking if the engine rejects it.
#[macro_export]
macro_rules! schema {
    ([$($attr:ident),* $(,)?] $(; $($lhs:ident),+ -> $($rhs:ident),+)*) => {{
        #[allow(unused_mut)]
        let mut schema =
            fdnorm_core::Schema::<&'static str>::new([$(stringify!($attr)),*]);
        $(
            schema
                .add_dependency([$(stringify!($lhs)),+], [$(stringify!($rhs)),+])
                .expect("dependency must be valid for the schema");
        )*
        schema
    }};
}

/// Build an `AttributeSet<&'static str>` from bare identifiers.
#[macro_export]
macro_rules! attrs {
    ($($attr:ident),* $(,)?) => {
        fdnorm_core::AttributeSet::<&'static str>::from([$(stringify!($attr)),*])
    };
}
