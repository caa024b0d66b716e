mod common;

use fdnorm_core::{NormalForm, Violation};

#[test]
fn partial_key_dependency_is_first_normal_form() {
    // Enrolment(Student, Course, Name): Name depends on Student alone.
    let schema = schema!([Course, Name, Student]; Student, Course -> Name; Student -> Name);

    let classification = schema.classify();
    assert_eq!(classification.normal_form, NormalForm::First);
    assert_eq!(
        classification.violation,
        Some(Violation::SecondNormalForm {
            position: 2,
            lhs: attrs![Student],
            key: attrs![Course, Student],
            attribute: "Name",
        })
    );
}

#[test]
fn overlapping_keys_are_third_normal_form() {
    // Student and course determine the instructor, who teaches one course.
    let schema = schema!([C, I, S]; S, C -> I; I -> C);

    assert_eq!(schema.candidate_keys(), vec![attrs![C, S], attrs![I, S]]);
    assert_eq!(schema.prime_attributes(), attrs![C, I, S]);
    assert!(schema.is_third_normal_form());
    assert!(!schema.is_boyce_codd_normal_form());
    assert_eq!(schema.highest_normal_form(), NormalForm::Third);
    assert_eq!(
        schema.check_boyce_codd_normal_form(),
        Err(Violation::BoyceCodd {
            position: 2,
            lhs: attrs![I],
        })
    );
}

#[test]
fn every_determinant_a_key_is_boyce_codd() {
    let schema = schema!([A, B, C]; A -> B, C; B -> A, C);

    assert_eq!(schema.candidate_keys(), vec![attrs![A], attrs![B]]);
    assert_eq!(schema.highest_normal_form(), NormalForm::BoyceCodd);
    assert!(schema.classify().violation.is_none());
}

#[test]
fn violation_reports_first_offending_position() {
    let schema = schema!([A, B, C, D]; A -> B; C -> D; B -> C);

    let violation = schema.check_third_normal_form().unwrap_err();
    assert_eq!(violation.position(), 2);
    assert_eq!(
        violation.to_string(),
        "Violation: first instance at dependency 2.\n\
         Reason: [C] is not a superkey, and D is not a prime attribute."
    );
}

#[test]
fn forms_are_nested() {
    for schema in [
        schema!([A, B, C]; A -> B; B -> C),
        schema!([C, I, S]; S, C -> I; I -> C),
        schema!([A, B, C]; A, B -> C; A -> C),
        schema!([A, B]),
    ] {
        if schema.is_boyce_codd_normal_form() {
            assert!(schema.is_third_normal_form());
        }
        if schema.is_third_normal_form() {
            assert!(schema.is_second_normal_form());
        }
    }
}
