//! Algebraic properties checked over seeded random schemas.
//!
//! Schemas stay at five attributes or fewer so that key search always
//! explores every extension it needs.

use fdnorm_core::{AttributeSet, Decomposition, Schema};
use fdnorm_testgen::generator::{generate_mult_schemas, generate_single_schema};

fn sample_schemas() -> Vec<Schema<String>> {
    let mut schemas = Vec::new();
    for (n_attribute, n_dependency, max_lhs) in [(3, 2, 1), (4, 3, 2), (5, 4, 2), (5, 6, 3)] {
        for generated in generate_mult_schemas(40, n_attribute, n_dependency, max_lhs, Some(1_000))
            .expect("generated dependencies are valid")
        {
            schemas.push(generated.into_data());
        }
    }
    schemas
}

fn all_subsets(schema: &Schema<String>) -> Vec<AttributeSet<String>> {
    schema.attributes().power_set(None)
}

fn covered(decomposition: &Decomposition<String>) -> AttributeSet<String> {
    decomposition
        .relations()
        .iter()
        .fold(AttributeSet::new(), |mut covered, relation| {
            covered.append(relation.attributes());
            covered
        })
}

#[test]
fn closure_is_idempotent_and_monotone() {
    for schema in sample_schemas() {
        let subsets = all_subsets(&schema);
        for x in &subsets {
            let closure = schema.closure(x, None).unwrap();
            assert!(x.is_subset(&closure));
            assert_eq!(schema.closure(&closure, None).unwrap(), closure);
            for y in subsets.iter().filter(|y| x.is_subset(y)) {
                assert!(closure.is_subset(&schema.closure(y, None).unwrap()));
            }
        }
    }
}

#[test]
fn superkeys_determine_everything() {
    for schema in sample_schemas() {
        for x in all_subsets(&schema) {
            let closure = schema.closure(&x, None).unwrap();
            assert_eq!(schema.is_superkey(&x).unwrap(), &closure == schema.attributes());
        }
    }
}

#[test]
fn candidate_keys_are_incomparable_superkeys() {
    for schema in sample_schemas() {
        let keys = schema.candidate_keys();
        assert!(!keys.is_empty(), "no key found for\n{schema}");
        for key in &keys {
            assert!(schema.is_superkey(key).unwrap(), "{key} is not a superkey of\n{schema}");
            assert!(keys.iter().all(|other| !other.is_proper_subset(key)));
        }
    }
}

#[test]
fn minimal_cover_is_equivalent_and_reduced() {
    for schema in sample_schemas() {
        let cover = schema.minimal_cover(false);

        for x in all_subsets(&schema) {
            assert_eq!(
                cover.closure(&x, None).unwrap(),
                schema.closure(&x, None).unwrap()
            );
        }
        for (index, fd) in cover.dependencies().iter().enumerate() {
            assert_eq!(fd.rhs().len(), 1);
            assert!(!cover.is_transitive(index + 1).unwrap(), "{fd} is derivable in\n{cover}");
            if fd.lhs().len() > 1 {
                for attribute in fd.lhs() {
                    let mut rest = fd.lhs().clone();
                    rest.remove(attribute);
                    assert!(!cover.closure(&rest, None).unwrap().contains(attribute));
                }
            }
        }

        let merged = schema.minimal_cover(true);
        let mut left_hand_sides: Vec<_> = merged.dependencies().iter().map(|fd| fd.lhs()).collect();
        let count = left_hand_sides.len();
        left_hand_sides.sort();
        left_hand_sides.dedup();
        assert_eq!(left_hand_sides.len(), count);
    }
}

#[test]
fn decompositions_cover_all_attributes() {
    for schema in sample_schemas() {
        let synthesis = schema.three_nf_synthesis();
        if synthesis.is_decomposed() {
            assert_eq!(&covered(&synthesis), schema.attributes(), "3NF of\n{schema}");
            for relation in synthesis.relations() {
                assert!(relation.is_third_normal_form(), "{relation} is not in 3NF");
            }
        } else {
            assert!(schema.is_third_normal_form());
        }

        let bcnf = schema.bcnf_decomposition();
        if bcnf.is_decomposed() {
            assert_eq!(&covered(&bcnf), schema.attributes(), "BCNF of\n{schema}");
            for relation in bcnf.relations() {
                assert!(relation.is_boyce_codd_normal_form(), "{relation} is not in BCNF");
            }
        } else {
            assert!(schema.is_boyce_codd_normal_form());
        }
    }
}

#[test]
fn classification_matches_individual_checks() {
    for schema in sample_schemas() {
        let classification = schema.classify();
        assert_eq!(classification.violation.is_none(), schema.is_boyce_codd_normal_form());
        assert_eq!(
            classification.normal_form >= fdnorm_core::NormalForm::Second,
            schema.is_second_normal_form()
        );
    }
}

#[test]
fn generation_is_reproducible() {
    assert_eq!(
        generate_single_schema(5, 4, 2, 77).unwrap(),
        generate_single_schema(5, 4, 2, 77).unwrap()
    );
}
