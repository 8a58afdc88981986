use super::*;

#[test]
fn can_add_context_to_error() {
    let error = GenericError::from("row 1 has no objectives").context("cannot rank 'results.csv'");

    assert_eq!(error.to_string(), "cannot rank 'results.csv': row 1 has no objectives");
}

#[test]
fn can_convert_rank_error() {
    let error = GenericError::from(crate::ranking::RankError::InvalidValue { row: 2, column: 3, value: f64::INFINITY });

    assert_eq!(error.to_string(), "row 2 has non-finite value 'inf' in objective 3");
}
