//! Validated knapsack item data.

use super::energy;
use super::neighbor::feasible_neighbors;
use super::selection::Selection;
use crate::error::{KnapsackError, Result};

/// Item values, item weights and a capacity, checked once at construction.
///
/// Read-only for the lifetime of a run; a single instance can be shared by
/// any number of concurrent runs.
///
/// # Examples
///
/// ```
/// use u_knapsack::knapsack::{KnapsackInstance, Selection};
///
/// let instance = KnapsackInstance::new(
///     vec![150.0, 80.0, 20.0, 40.0, 50.0, 20.0],
///     vec![7.0, 30.0, 18.0, 60.0, 12.0, 20.0],
///     50.0,
/// )
/// .unwrap();
///
/// let selection = Selection::from_bits(&[1, 1, 0, 0, 1, 0]).unwrap();
/// assert_eq!(instance.evaluate(&selection).unwrap(), -280.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackInstance {
    values: Vec<f64>,
    weights: Vec<f64>,
    capacity: f64,
}

impl KnapsackInstance {
    /// Creates an instance from index-aligned values and weights.
    ///
    /// # Errors
    ///
    /// Returns [`KnapsackError::InvalidInput`] if the sequences differ in
    /// length, any value, weight or the capacity is negative or not finite,
    /// or the total value or total weight overflows to infinity.
    pub fn new(values: Vec<f64>, weights: Vec<f64>, capacity: f64) -> Result<Self> {
        if values.len() != weights.len() {
            return Err(KnapsackError::InvalidInput(format!(
                "values and weights must have the same length, got {} and {}",
                values.len(),
                weights.len()
            )));
        }
        check_non_negative("value", &values)?;
        check_non_negative("weight", &weights)?;
        check_finite_total("value", &values)?;
        check_finite_total("weight", &weights)?;
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(KnapsackError::InvalidInput(format!(
                "capacity must be non-negative and finite, got {capacity}"
            )));
        }
        Ok(Self {
            values,
            weights,
            capacity,
        })
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Energy of a selection of this instance's items.
    ///
    /// The selection must have [`len`](Self::len) flags; use
    /// [`evaluate`](Self::evaluate) for selections from outside the crate.
    pub fn energy(&self, selection: &Selection) -> f64 {
        energy::energy(selection, &self.values, &self.weights, self.capacity)
    }

    /// Checked energy for a caller-supplied selection.
    ///
    /// # Errors
    ///
    /// Returns [`KnapsackError::InvalidInput`] on a length mismatch.
    pub fn evaluate(&self, selection: &Selection) -> Result<f64> {
        self.check_selection(selection)?;
        Ok(self.energy(selection))
    }

    pub fn total_value(&self, selection: &Selection) -> f64 {
        energy::total_value(selection, &self.values)
    }

    pub fn total_weight(&self, selection: &Selection) -> f64 {
        energy::total_weight(selection, &self.weights)
    }

    /// Whether the selection's total weight is within capacity.
    pub fn is_feasible(&self, selection: &Selection) -> bool {
        self.total_weight(selection) <= self.capacity
    }

    /// Feasible single-flip neighbors of `selection`.
    pub fn neighbors(&self, selection: &Selection) -> Vec<Selection> {
        feasible_neighbors(selection, &self.weights, self.capacity)
    }

    fn check_selection(&self, selection: &Selection) -> Result<()> {
        if selection.len() != self.len() {
            return Err(KnapsackError::InvalidInput(format!(
                "selection has {} flags but the instance has {} items",
                selection.len(),
                self.len()
            )));
        }
        Ok(())
    }
}

fn check_non_negative(kind: &str, xs: &[f64]) -> Result<()> {
    match xs.iter().position(|x| !x.is_finite() || *x < 0.0) {
        Some(i) => Err(KnapsackError::InvalidInput(format!(
            "{kind} at index {i} must be non-negative and finite, got {}",
            xs[i]
        ))),
        None => Ok(()),
    }
}

// Subset sums of non-negative items never exceed the full sum, so a finite
// total keeps every selection's value and weight finite.
fn check_finite_total(kind: &str, xs: &[f64]) -> Result<()> {
    let total: f64 = xs.iter().sum();
    if total.is_finite() {
        Ok(())
    } else {
        Err(KnapsackError::InvalidInput(format!(
            "total {kind} overflows to {total}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> KnapsackInstance {
        KnapsackInstance::new(
            vec![150.0, 80.0, 20.0, 40.0, 50.0, 20.0],
            vec![7.0, 30.0, 18.0, 60.0, 12.0, 20.0],
            50.0,
        )
        .unwrap()
    }

    #[test]
    fn test_length_mismatch() {
        let err = KnapsackInstance::new(vec![1.0, 2.0], vec![1.0], 5.0).unwrap_err();
        assert!(matches!(err, KnapsackError::InvalidInput(_)));
    }

    #[test]
    fn test_negative_capacity() {
        assert!(KnapsackInstance::new(vec![1.0], vec![1.0], -1.0).is_err());
        assert!(KnapsackInstance::new(vec![1.0], vec![1.0], f64::NAN).is_err());
    }

    #[test]
    fn test_negative_weight() {
        let err = KnapsackInstance::new(vec![1.0, 1.0], vec![1.0, -2.0], 5.0).unwrap_err();
        assert!(matches!(err, KnapsackError::InvalidInput(ref m) if m.contains("weight at index 1")));
    }

    #[test]
    fn test_infinite_value() {
        assert!(KnapsackInstance::new(vec![f64::INFINITY], vec![1.0], 5.0).is_err());
    }

    #[test]
    fn test_total_overflow_rejected() {
        let err = KnapsackInstance::new(vec![f64::MAX, f64::MAX], vec![1.0, 1.0], 5.0).unwrap_err();
        assert!(matches!(err, KnapsackError::InvalidInput(ref m) if m.contains("total value")));
        let err = KnapsackInstance::new(vec![1.0, 1.0], vec![f64::MAX, f64::MAX], 5.0).unwrap_err();
        assert!(matches!(err, KnapsackError::InvalidInput(ref m) if m.contains("total weight")));
    }

    #[test]
    fn test_evaluate_checks_length() {
        let instance = sample();
        let err = instance.evaluate(&Selection::empty(3)).unwrap_err();
        assert!(matches!(err, KnapsackError::InvalidInput(_)));
    }

    #[test]
    fn test_feasibility() {
        let instance = sample();
        let ok = Selection::from_bits(&[1, 1, 0, 0, 1, 0]).unwrap();
        let over = Selection::from_bits(&[1, 1, 1, 0, 0, 0]).unwrap();
        assert!(instance.is_feasible(&ok));
        assert!(!instance.is_feasible(&over));
        assert_eq!(instance.total_value(&ok), 280.0);
        assert_eq!(instance.total_weight(&over), 55.0);
    }

    #[test]
    fn test_empty_instance() {
        let instance = KnapsackInstance::new(vec![], vec![], 0.0).unwrap();
        assert!(instance.is_empty());
        assert_eq!(instance.evaluate(&Selection::empty(0)).unwrap(), 0.0);
    }
}
