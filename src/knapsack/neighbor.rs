//! Feasible single-flip neighborhood.

use super::energy::total_weight;
use super::selection::Selection;

/// All selections that differ from `selection` in exactly one item and
/// whose total weight stays within `capacity`.
///
/// Every index is tried independently, so an overweight input can still
/// yield neighbors that drop an item. The result may be empty.
///
/// Each candidate's weight is summed the same way [`total_weight`] sums it,
/// so every returned neighbor passes the instance's own feasibility check.
pub fn feasible_neighbors(selection: &Selection, weights: &[f64], capacity: f64) -> Vec<Selection> {
    (0..selection.len())
        .map(|i| selection.flipped(i))
        .filter(|candidate| total_weight(candidate, weights) <= capacity)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEIGHTS: [f64; 6] = [7.0, 30.0, 18.0, 60.0, 12.0, 20.0];

    fn sel(bits: &[u8]) -> Selection {
        Selection::from_bits(bits).unwrap()
    }

    #[test]
    fn test_neighbors_filtered_by_capacity() {
        // weight 49: only removals are feasible
        let s = sel(&[1, 1, 0, 0, 1, 0]);
        let neighbors = feasible_neighbors(&s, &WEIGHTS, 50.0);
        assert_eq!(neighbors.len(), 3);
        for n in &neighbors {
            assert!(total_weight(n, &WEIGHTS) <= 50.0);
            assert_eq!(n.hamming_distance(&s), 1);
            assert!(n.count_selected() < s.count_selected());
        }
    }

    #[test]
    fn test_neighbors_from_empty_selection() {
        let s = Selection::empty(6);
        let neighbors = feasible_neighbors(&s, &WEIGHTS, 50.0);
        // every item but the 60-weight one fits alone
        assert_eq!(neighbors.len(), 5);
        assert!(neighbors.iter().all(|n| !n.is_selected(3)));
    }

    #[test]
    fn test_no_items_no_neighbors() {
        assert!(feasible_neighbors(&Selection::empty(0), &[], 10.0).is_empty());
    }

    #[test]
    fn test_all_flips_infeasible() {
        let s = Selection::empty(2);
        assert!(feasible_neighbors(&s, &[5.0, 6.0], 4.0).is_empty());
    }

    #[test]
    fn test_infeasible_input_can_drop_items() {
        // weight 7 + 30 + 18 = 55 > 30; dropping 7 or 18 stays over, dropping 30 fits
        let s = sel(&[1, 1, 1, 0, 0, 0]);
        let neighbors = feasible_neighbors(&s, &WEIGHTS, 30.0);
        assert_eq!(neighbors, vec![sel(&[1, 0, 1, 0, 0, 0])]);
    }

    #[test]
    fn test_fractional_weights_rounding_at_capacity() {
        // Summed in index order, 0.1 + 0.2 + 0.3 rounds to 0.6000000000000001.
        let weights = [0.1, 0.2, 0.3];
        let s = sel(&[0, 1, 1]);
        let full = sel(&[1, 1, 1]);
        assert!(total_weight(&full, &weights) > 0.6);

        let neighbors = feasible_neighbors(&s, &weights, 0.6);
        assert!(!neighbors.contains(&full), "overweight neighbor returned");
        for n in &neighbors {
            assert!(total_weight(n, &weights) <= 0.6);
        }
    }
}
