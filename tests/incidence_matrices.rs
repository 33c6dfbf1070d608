use cell_complex::algs::sparse::{is_zero, to_dense};
use cell_complex::attrs;
use cell_complex::prelude::*;
use nalgebra::DMatrix;

fn shape(m: &SparseMatrix) -> (usize, usize) {
    (m.nrows(), m.ncols())
}

fn column(m: &SparseMatrix, j: usize) -> Vec<f64> {
    to_dense(m).column(j).iter().copied().collect()
}

#[test]
fn incidence_shapes() {
    let mut cx = CellComplex::new();
    cx.add_cells_from([vec![1, 2, 3, 4], vec![2, 3, 4, 5], vec![5, 6, 7, 8]], Some(2), attrs! {})
        .unwrap();
    assert_eq!(shape(&cx.incidence_matrix(2, true).unwrap()), (10, 3));
    assert_eq!(shape(&cx.incidence_matrix(1, true).unwrap()), (8, 10));
}

#[test]
fn empty_complex_gives_empty_operators() {
    let cx = CellComplex::<u32>::new();
    let b2 = cx.incidence_matrix(2, true).unwrap();
    assert_eq!(shape(&b2), (0, 0));
    assert_eq!(to_dense(&b2), DMatrix::<f64>::zeros(0, 0));
    assert_eq!(shape(&cx.incidence_matrix(1, true).unwrap()), (0, 0));
}

#[test]
fn single_triangle() {
    let mut cx = CellComplex::new();
    cx.add_cell([1, 2, 3], Some(2), attrs! {}).unwrap();
    let b2 = cx.incidence_matrix(2, true).unwrap();
    assert_eq!(
        to_dense(&b2),
        DMatrix::from_column_slice(3, 1, &[1.0, -1.0, 1.0])
    );
}

#[test]
fn two_triangles_in_insertion_order() {
    let mut cx = CellComplex::new();
    cx.add_cell([2, 3, 4], Some(2), attrs! {}).unwrap();
    cx.add_cell([1, 3, 4], Some(2), attrs! {}).unwrap();
    // rows: (1,3) (1,4) (2,3) (2,4) (3,4); columns: [2,3,4] then [1,3,4]
    let expected = DMatrix::from_column_slice(
        5,
        2,
        &[
            0.0, 0.0, 1.0, -1.0, 1.0, //
            1.0, -1.0, 0.0, 0.0, 1.0,
        ],
    );
    assert_eq!(to_dense(&cx.incidence_matrix(2, true).unwrap()), expected);

    let mut cx = CellComplex::non_regular();
    cx.add_cell([1, 2, 3], Some(2), attrs! {}).unwrap();
    cx.add_cell([2, 3, 4], Some(2), attrs! {}).unwrap();
    let expected = DMatrix::from_column_slice(
        5,
        2,
        &[
            1.0, -1.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, -1.0, 1.0,
        ],
    );
    assert_eq!(to_dense(&cx.incidence_matrix(2, true).unwrap()), expected);
}

#[test]
fn unsigned_and_signed() {
    let mut cx = CellComplex::new();
    cx.add_cell([1, 2, 3], Some(2), attrs! {}).unwrap();
    cx.add_cell([2, 3, 4], Some(2), attrs! {}).unwrap();
    cx.add_cell([3, 4, 5], Some(2), attrs! {}).unwrap();

    let b2 = cx.incidence_matrix(2, false).unwrap();
    assert_eq!(shape(&b2), (7, 3));
    assert_eq!(column(&b2, 0), vec![1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(column(&b2, 1), vec![0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0]);
    assert_eq!(column(&b2, 2), vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);

    let b1 = cx.incidence_matrix(1, false).unwrap();
    assert_eq!(shape(&b1), (5, 7));
    assert_eq!(column(&b1, 0), vec![1.0, 1.0, 0.0, 0.0, 0.0]);
    assert_eq!(column(&b1, 1), vec![1.0, 0.0, 1.0, 0.0, 0.0]);
    assert_eq!(column(&b1, 2), vec![0.0, 1.0, 1.0, 0.0, 0.0]);

    let b2_signed = cx.incidence_matrix(2, true).unwrap();
    let b1_signed = cx.incidence_matrix(1, true).unwrap();
    let product = &b1_signed * &b2_signed;
    assert!(is_zero(&product));
    assert_eq!(to_dense(&product).sum(), 0.0);
}

#[test]
fn boundary_of_boundary_vanishes_for_non_regular_cells() {
    let mut cx = CellComplex::non_regular();
    cx.add_cell([1, 2, 3, 4], Some(2), attrs! {}).unwrap();
    cx.add_cell([2, 3, 4, 5, 2, 3, 4, 5], Some(2), attrs! {})
        .unwrap();
    cx.add_cell([1, 2, 3, 2], Some(2), attrs! {}).unwrap();
    cx.add_cell([6, 6, 7, 8], Some(2), attrs! {}).unwrap();
    let b1 = cx.incidence_matrix(1, true).unwrap();
    let b2 = cx.incidence_matrix(2, true).unwrap();
    assert!(is_zero(&(&b1 * &b2)));
}

#[test]
fn cell_orientation_follows_first_insertion() {
    let mut cx = CellComplex::new();
    cx.add_cell([3, 2, 1], Some(2), attrs! {}).unwrap();
    cx.add_cell([1, 2, 3], Some(2), attrs! {}).unwrap();
    assert_eq!(
        to_dense(&cx.incidence_matrix(2, true).unwrap()),
        DMatrix::from_column_slice(3, 1, &[-1.0, 1.0, -1.0])
    );
}

#[test]
fn operators_track_mutations() {
    let mut cx = CellComplex::new();
    cx.add_cell([1, 2, 3], Some(2), attrs! {}).unwrap();
    assert_eq!(shape(&cx.incidence_matrix(2, true).unwrap()), (3, 1));
    cx.add_cell([3, 4, 5], Some(2), attrs! {}).unwrap();
    assert_eq!(shape(&cx.incidence_matrix(2, true).unwrap()), (6, 2));
    cx.remove_cell([1, 2, 3]).unwrap();
    assert_eq!(shape(&cx.incidence_matrix(2, true).unwrap()), (6, 1));
    assert_eq!(cx.cells().position(&[3, 4, 5]), Some(0));
}

#[test]
fn rank_out_of_range() {
    let cx = CellComplex::<u32>::new();
    let err = cx.incidence_matrix(3, true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Dimension);
}
