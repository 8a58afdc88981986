use super::*;

#[test]
fn can_create_matrix_from_rows() {
    let matrix = ObjectiveMatrix::new(&[vec![1., 2., 3.], vec![4., 5., 6.]]).unwrap();

    assert_eq!(matrix.len(), 2);
    assert_eq!(matrix.dimension(), 3);
    assert_eq!(matrix.row(1), &[4., 5., 6.]);
    assert_eq!(matrix.rows().collect::<Vec<_>>(), vec![&[1., 2., 3.][..], &[4., 5., 6.][..]]);
}

#[test]
fn can_create_empty_matrix() {
    let matrix = ObjectiveMatrix::new::<Vec<f64>>(&[]).unwrap();

    assert!(matrix.is_empty());
    assert_eq!(matrix.len(), 0);
    assert_eq!(matrix.rows().count(), 0);
}

#[test]
fn can_create_matrix_from_flat_data() {
    let matrix = ObjectiveMatrix::from_flat(vec![1., 2., 3., 4., 5., 6.], 2).unwrap();

    assert_eq!(matrix.len(), 3);
    assert_eq!(matrix.row(2), &[5., 6.]);
}

parameterized_test! {can_detect_shape_mismatch, (rows, expected), {
    can_detect_shape_mismatch_impl(rows, expected);
}}

can_detect_shape_mismatch! {
    case01_differing_length: (vec![vec![1., 2.], vec![1.]], (1, 2, 1)),
    case02_longer_row: (vec![vec![1.], vec![1.], vec![1., 2.]], (2, 1, 2)),
    case03_no_objectives: (vec![vec![], vec![]], (0, 1, 0)),
    case04_empty_row_in_the_middle: (vec![vec![1.], vec![], vec![1.]], (1, 1, 0)),
}

fn can_detect_shape_mismatch_impl(rows: Vec<Vec<f64>>, expected: (usize, usize, usize)) {
    let (row, expected, actual) = expected;

    let result = ObjectiveMatrix::new(&rows);

    assert_eq!(result, Err(RankError::ShapeMismatch { row, expected, actual }));
}

#[test]
fn can_detect_shape_mismatch_before_invalid_value() {
    let rows = vec![vec![f64::NAN, 1.], vec![1.]];

    let result = ObjectiveMatrix::new(&rows);

    assert_eq!(result, Err(RankError::ShapeMismatch { row: 1, expected: 2, actual: 1 }));
}

#[test]
fn can_detect_shape_mismatch_in_flat_data() {
    assert_eq!(
        ObjectiveMatrix::from_flat(vec![1., 2., 3.], 2),
        Err(RankError::ShapeMismatch { row: 1, expected: 2, actual: 1 })
    );
    assert_eq!(ObjectiveMatrix::from_flat(vec![], 0), Err(RankError::ShapeMismatch { row: 0, expected: 1, actual: 0 }));
}

#[test]
fn can_detect_invalid_values() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let rows = vec![vec![1., 2.], vec![3., 4.], vec![5., value]];

        match ObjectiveMatrix::new(&rows) {
            Err(RankError::InvalidValue { row, column, .. }) => {
                assert_eq!(row, 2);
                assert_eq!(column, 1);
            }
            other => unreachable!("unexpected result: {other:?}"),
        }
    }
}
