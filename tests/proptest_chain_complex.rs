use proptest::prelude::*;

use cell_complex::algs::sparse::{is_zero, to_dense};
use cell_complex::attrs;
use cell_complex::prelude::*;

fn boundary() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..8, 3..8)
}

fn boundaries() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(boundary(), 0..6)
}

fn build(cells: &[Vec<u8>]) -> CellComplex<u8> {
    let mut cx = CellComplex::non_regular();
    for c in cells {
        cx.add_cell(c.as_slice(), Some(2), attrs! {})
            .expect("non-regular complex accepts every boundary of length >= 3");
    }
    cx
}

proptest! {
    #[test]
    fn boundary_of_boundary_is_zero(cells in boundaries()) {
        let cx = build(&cells);
        let b1 = cx.incidence_matrix(1, true).unwrap();
        let b2 = cx.incidence_matrix(2, true).unwrap();
        prop_assert_eq!(b1.ncols(), b2.nrows());
        prop_assert!(is_zero(&(&b1 * &b2)));
    }

    #[test]
    fn hodge_splits_into_up_and_down(cells in boundaries(), rank in 0usize..=2) {
        let cx = build(&cells);
        let up = cx.up_laplacian_matrix(rank).unwrap();
        let down = cx.down_laplacian_matrix(rank).unwrap();
        let hodge = cx.hodge_laplacian_matrix(rank).unwrap();
        prop_assert_eq!(to_dense(&hodge), to_dense(&(&up + &down)));
    }

    #[test]
    fn insertion_grows_counts_boundedly(cells in boundaries(), extra in boundary()) {
        let mut cx = build(&cells);
        let (v0, e0, f0) = cx.shape();
        cx.add_cell(extra.as_slice(), Some(2), attrs! {}).unwrap();
        let (v1, e1, f1) = cx.shape();
        prop_assert!(v1 >= v0 && v1 - v0 <= extra.len());
        prop_assert!(e1 >= e0 && e1 - e0 <= extra.len());
        prop_assert!(f1 == f0 || f1 == f0 + 1);
        prop_assert!(cx.cells().contains(&extra));
    }

    #[test]
    fn remove_after_add_restores_cells(cells in boundaries(), extra in boundary()) {
        let mut cx = build(&cells);
        let before = cx.cells().len();
        let was_present = cx.cells().contains(&extra);
        cx.add_cell(extra.as_slice(), Some(2), attrs! {}).unwrap();
        if !was_present {
            cx.remove_cell(extra.as_slice()).unwrap();
            prop_assert_eq!(cx.cells().len(), before);
            prop_assert!(!cx.cells().contains(&extra));
        }
    }

    #[test]
    fn equivalent_boundaries_do_not_grow_the_complex(extra in boundary(), shift in 0usize..8, flip in any::<bool>()) {
        let mut cx = build(std::slice::from_ref(&extra));
        let mut other = extra.clone();
        other.rotate_left(shift % extra.len());
        if flip {
            other.reverse();
        }
        let shape = cx.shape();
        cx.add_cell(other.as_slice(), Some(2), attrs! {}).unwrap();
        prop_assert_eq!(cx.shape(), shape);
        prop_assert_eq!(cx.cells().position(&other), Some(0));
    }

    #[test]
    fn dimension_tracks_highest_nonempty_rank(cells in boundaries(), edges in prop::collection::vec((0u8..8, 0u8..8), 0..4)) {
        let mut cx = CellComplex::<u8>::non_regular();
        for &(a, b) in &edges {
            if a != b {
                cx.add_edge(a, b).unwrap();
            }
        }
        for c in &cells {
            cx.add_cell(c.as_slice(), Some(2), attrs! {}).unwrap();
        }
        let (_, e, f) = cx.shape();
        let expected = if f > 0 { 2 } else if e > 0 { 1 } else { 0 };
        prop_assert_eq!(cx.dim(), expected);
        prop_assert!(cx.validate_invariants().is_ok());
    }

    #[test]
    fn regular_policy_matches_cell_regularity(cells in boundaries()) {
        let mut cx = CellComplex::<u8>::new();
        for c in &cells {
            let accepted = cx.add_cell(c.as_slice(), Some(2), attrs! {}).is_ok();
            prop_assert_eq!(accepted, Cell::new(c.iter().copied()).is_ok());
        }
        prop_assert!(cx.is_regular());
    }
}
