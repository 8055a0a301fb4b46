use super::*;

#[test]
fn test_from_counts_shape() {
    let m = RatingMatrix::from_counts(vec![vec![0, 3, 1], vec![2, 2, 0]]).unwrap();
    assert_eq!(m.n_subjects(), 2);
    assert_eq!(m.n_categories(), 3);
    assert_eq!(m.raters(), 4);
    assert_eq!(m.total_ratings(), 8);
    assert_eq!(m.get(1, 0), 2);
    assert_eq!(m.row(0), &[0, 3, 1]);
    assert_eq!(m.column_totals(), vec![2, 5, 1]);
    assert_eq!(m.categories(), &["1", "2", "3"]);
    assert_eq!(m.rows().count(), 2);
}

#[test]
fn test_from_rows_rejects_bad_entries() {
    for bad in [-1.0, 1.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = RatingMatrix::from_rows(&[vec![1.0, 2.0], vec![bad, 1.0]]).unwrap_err();
        assert!(matches!(err, KappaError::InvalidInput(_)), "{bad}: {err:?}");
    }
}

#[test]
fn test_from_rows_accepts_integral_floats() {
    let m = RatingMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 0.0]]).unwrap();
    assert_eq!(m.raters(), 3);
}

#[test]
fn test_ragged_rows_are_invalid_input() {
    let err = RatingMatrix::from_counts(vec![vec![1, 2], vec![3]]).unwrap_err();
    assert!(matches!(err, KappaError::InvalidInput(_)));
}

#[test]
fn test_inconsistent_raters_names_rows() {
    let err = RatingMatrix::from_counts(vec![vec![7, 7], vec![6, 7], vec![10, 4]]).unwrap_err();
    match &err {
        KappaError::InconsistentRaters {
            expected,
            mismatched,
        } => {
            assert_eq!(*expected, 14);
            assert_eq!(mismatched, &vec![(1, 13)]);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().contains("row 2 sums to 13"));
}

#[test]
fn test_zero_raters() {
    let err = RatingMatrix::from_counts(vec![vec![0, 0], vec![0, 0]]).unwrap_err();
    assert_eq!(err, KappaError::NoRaters);
}

#[test]
fn test_empty_matrix_is_no_data() {
    assert!(matches!(
        RatingMatrix::from_counts(Vec::new()),
        Err(KappaError::NoData(_))
    ));
    assert!(matches!(
        RatingMatrix::from_counts(vec![vec![], vec![]]),
        Err(KappaError::NoData(_))
    ));
}

#[test]
fn test_category_labels() {
    let m = RatingMatrix::from_counts(vec![vec![1, 1]])
        .unwrap()
        .with_categories(vec!["yes".to_string(), "no".to_string()])
        .unwrap();
    assert_eq!(m.categories(), &["yes", "no"]);

    let err = RatingMatrix::from_counts(vec![vec![1, 1]])
        .unwrap()
        .with_categories(vec!["only".to_string()])
        .unwrap_err();
    assert!(matches!(err, KappaError::InvalidInput(_)));
}
