use deep_miner::{Matrix, MinerError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_square(n: usize, seed: u64) -> Matrix {
    Matrix::random(n, n, 5.0, &mut StdRng::seed_from_u64(seed)).unwrap()
}

#[test]
fn transpose_twice_is_identity() {
    for n in 1..6 {
        let a = random_square(n, n as u64);
        assert_eq!(a.transpose().transpose(), a);
    }
}

#[test]
fn add_commutes_and_subtract_undoes_it() {
    let a = Matrix::wrap(vec![vec![1.5, -2.0, 0.25], vec![3.0, 4.0, 8.0]]).unwrap();
    let b = Matrix::wrap(vec![vec![0.5, 2.0, 0.75], vec![-1.0, 0.0, 2.0]]).unwrap();

    assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
}

#[test]
fn identity_is_left_neutral_for_square_operands() {
    for n in 1..6 {
        let a = random_square(n, 100 + n as u64);
        let id = Matrix::identity(n as isize).unwrap();

        assert!(id.is_diagonal());
        assert!(id.is_square());
        assert_eq!(id.trace().unwrap(), n as f64);
        assert_eq!(id.multiply(&a).unwrap(), a);
    }
}

#[test]
fn identity_of_non_positive_size_fails() {
    for size in [0, -1] {
        assert!(matches!(
            Matrix::identity(size),
            Err(MinerError::InvalidArgument(_))
        ));
    }
}

#[test]
fn scale_is_elementwise() {
    let a = random_square(3, 9);
    let scaled = a.scale(-2.5).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(scaled.value(i, j).unwrap(), -2.5 * a.value(i, j).unwrap());
        }
    }
}

#[test]
fn element_access_admits_one_past_the_end() {
    let mut m = Matrix::wrap(vec![vec![1.0, 2.0], vec![2.0, 3.0]]).unwrap();

    assert_eq!(m.get(2, 0).unwrap(), None);
    assert_eq!(m.get(0, 2).unwrap(), None);
    assert!(m.set(2, 1, 4.0).is_ok());
    assert!(m.add_at(1, 2, 4.0).is_ok());
}

#[test]
fn element_access_rejects_beyond_one_past_the_end() {
    let mut m = Matrix::wrap(vec![vec![1.0, 2.0], vec![2.0, 3.0]]).unwrap();

    for (i, j) in [(3, 0), (0, 3), (-1, 0), (0, -1), (17, 2)] {
        assert!(m.get(i, j).unwrap_err().is_index_out_of_bounds());
        assert!(m.set(i, j, 5.0).unwrap_err().is_index_out_of_bounds());
        assert!(m.add_at(i, j, 5.0).unwrap_err().is_index_out_of_bounds());
    }
}

#[test]
fn row_and_column_are_strict() {
    let m = Matrix::wrap(vec![vec![1.0, 2.0], vec![2.0, 3.0]]).unwrap();

    assert_eq!(m.row(0).unwrap(), vec![Some(1.0), Some(2.0)]);
    assert_eq!(m.column(1).unwrap(), vec![Some(2.0), Some(3.0)]);
    for index in [-1, 2, 15] {
        assert!(m.row(index).unwrap_err().is_index_out_of_bounds());
        assert!(m.column(index).unwrap_err().is_index_out_of_bounds());
    }
}

#[test]
fn extraction_can_return_a_row_matrix() {
    let m = Matrix::wrap(vec![vec![1.0, 2.0], vec![2.0, 3.0]]).unwrap();

    let row = m.row_matrix(0).unwrap();
    assert_eq!(row.shape(), (1, 2));
    assert_eq!(row.value(0, 1).unwrap(), 2.0);

    let column = m.column_matrix(1).unwrap();
    assert_eq!(column.to_vec().unwrap(), vec![2.0, 3.0]);

    let diagonal = m.diagonal_matrix();
    assert_eq!(diagonal.to_vec().unwrap(), vec![1.0, 3.0]);
    assert_eq!(m.diagonal(), vec![Some(1.0), Some(3.0)]);
}

#[test]
fn empty_tracks_populated_cells() {
    let mut m = Matrix::unset(3, 2);
    assert!(m.is_empty());

    m.set(1, 1, 0.0).unwrap();
    assert!(!m.is_empty());

    let none: Vec<Vec<Option<f64>>> = vec![vec![None, None], vec![None, None]];
    assert!(Matrix::wrap(none).unwrap().is_empty());
}

#[test]
fn diagonal_predicate() {
    assert!(Matrix::wrap(vec![vec![7.0]]).unwrap().is_diagonal());

    let full = Matrix::wrap(vec![
        vec![1.0, 2.0, 4.0],
        vec![3.0, 4.0, 7.0],
        vec![5.0, 6.0, 8.0],
    ])
    .unwrap();
    assert!(!full.is_diagonal());

    let zeros = Matrix::wrap(vec![
        vec![1.0, 0.0, 0.0],
        vec![0.0, 4.0, 0.0],
        vec![0.0, 0.0, 8.0],
    ])
    .unwrap();
    assert!(zeros.is_diagonal());

    let absent = Matrix::wrap(vec![vec![Some(1.0), None], vec![Some(0.0), Some(4.0)]]).unwrap();
    assert!(!absent.is_diagonal());
}

#[test]
fn square_predicate() {
    assert!(Matrix::wrap(vec![vec![1.0]]).unwrap().is_square());
    assert!(!Matrix::wrap(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]])
        .unwrap()
        .is_square());
}

#[test]
fn raw_grid_form_matches_matrix_form() {
    let m = Matrix::wrap(vec![vec![2.0, 4.0], vec![6.0, 8.0]]).unwrap();
    let product = m.multiply(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();

    assert_eq!(
        product.clone().into_grid(),
        vec![vec![Some(14.0), Some(20.0)], vec![Some(30.0), Some(44.0)]]
    );
    assert_eq!(product.to_grid(), product.into_grid());
}
