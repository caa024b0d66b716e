use std::collections::BTreeSet;

use fdnorm_core::{Error, Schema};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, Default, Deserialize, Serialize, TypedBuilder)]
pub struct SchemaParams {
    pub id: u64,
    pub n_attribute: u32,
    pub n_dependency: u32,
    /// Largest left-hand side to draw.
    pub max_lhs: u32,
    /// Fixed seed for reproducible output; a fresh one is drawn otherwise.
    #[builder(default)]
    pub seed: Option<u64>,
}

#[derive(Serialize, Debug)]
pub struct GeneratedSchema {
    params: SchemaParams,
    /// The seed actually used, so any schema can be regenerated.
    seed: u64,
    data: Schema<String>,
}

impl GeneratedSchema {
    #[must_use]
    pub const fn get_id(&self) -> u64 {
        self.params.id
    }

    #[must_use]
    pub const fn get_data(&self) -> &Schema<String> {
        &self.data
    }

    #[must_use]
    pub const fn get_params(&self) -> &SchemaParams {
        &self.params
    }

    #[must_use]
    pub const fn get_seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn into_data(self) -> Schema<String> {
        self.data
    }
}

/// Label of the `index`-th attribute: `A`..`Z`, then `A1`..`Z1`, and so on.
#[must_use]
pub fn attribute_label(index: u32) -> String {
    let letter = char::from(b'A' + u8::try_from(index % 26).unwrap_or(0));
    match index / 26 {
        0 => letter.to_string(),
        round => format!("{letter}{round}"),
    }
}

/// Generate a schema over `n_attribute` attributes with up to `n_dependency`
/// dependencies.
///
/// Each dependency draws a left-hand side of 1 to `max_lhs` distinct
/// attributes and a right-hand side of one or two attributes outside it.
/// Schemas with fewer than two attributes get no dependencies. The same
/// `seed` always yields the same schema.
///
/// # Errors
///
/// Propagates any rejection from [`Schema::add_dependency`]; the drawn
/// sides are always valid, so none is expected.
pub fn generate_single_schema(
    n_attribute: u32,
    n_dependency: u32,
    max_lhs: u32,
    seed: u64,
) -> Result<Schema<String>, Error<String>> {
    let mut random_generator = StdRng::seed_from_u64(seed);
    let mut schema = Schema::new((0..n_attribute).map(attribute_label));
    if n_attribute < 2 {
        return Ok(schema);
    }

    let widest = max_lhs.clamp(1, n_attribute - 1);
    for _ in 0..n_dependency {
        let lhs_size = random_generator.random_range(1..=widest);
        let mut lhs: BTreeSet<u32> = BTreeSet::new();
        while lhs.len() < lhs_size as usize {
            lhs.insert(random_generator.random_range(0..n_attribute));
        }

        let outside: Vec<u32> = (0..n_attribute).filter(|a| !lhs.contains(a)).collect();
        let first = outside[random_generator.random_range(0..outside.len())];
        let mut rhs = vec![first];
        if outside.len() > 1 && random_generator.random_bool(0.3) {
            let second = outside[random_generator.random_range(0..outside.len())];
            if second != first {
                rhs.push(second);
            }
        }

        schema.add_dependency(
            lhs.into_iter().map(attribute_label),
            rhs.into_iter().map(attribute_label),
        )?;
    }

    Ok(schema)
}

/// Generate `n_schema` schemas in parallel.
///
/// With `seed`, schema `i` uses `seed + i`; otherwise each draws its own.
///
/// # Errors
///
/// As in [`generate_single_schema`].
pub fn generate_mult_schemas(
    n_schema: u64,
    n_attribute: u32,
    n_dependency: u32,
    max_lhs: u32,
    seed: Option<u64>,
) -> Result<Vec<GeneratedSchema>, Error<String>> {
    (0..n_schema)
        .into_par_iter()
        .map(|id| {
            let used = seed.map_or_else(|| rand::rng().random::<u64>(), |s| s.wrapping_add(id));
            let data = generate_single_schema(n_attribute, n_dependency, max_lhs, used)?;
            Ok(GeneratedSchema {
                params: SchemaParams {
                    id,
                    n_attribute,
                    n_dependency,
                    max_lhs,
                    seed,
                },
                seed: used,
                data,
            })
        })
        .collect()
}

/// Generate one schema from `params`.
///
/// # Errors
///
/// As in [`generate_single_schema`].
pub fn generate_from_params(params: SchemaParams) -> Result<GeneratedSchema, Error<String>> {
    let used = params
        .seed
        .unwrap_or_else(|| rand::rng().random::<u64>());
    let data = generate_single_schema(params.n_attribute, params.n_dependency, params.max_lhs, used)?;
    Ok(GeneratedSchema {
        params,
        seed: used,
        data,
    })
}
