//! Binary item selection, the annealing state.

use crate::error::{KnapsackError, Result};

/// A fixed-length inclusion vector: one flag per item.
///
/// Values are immutable in the sense the search relies on: [`flipped`]
/// returns a new selection and leaves the original untouched.
///
/// [`flipped`]: Selection::flipped
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    bits: Vec<bool>,
}

impl Selection {
    /// A selection of `n` items with nothing chosen.
    pub fn empty(n: usize) -> Self {
        Self {
            bits: vec![false; n],
        }
    }

    /// Builds a selection from 0/1 flags.
    ///
    /// # Errors
    ///
    /// Returns [`KnapsackError::InvalidInput`] if any flag is not 0 or 1.
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        bits.iter()
            .enumerate()
            .map(|(i, &b)| match b {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(KnapsackError::InvalidInput(format!(
                    "selection flag at index {i} must be 0 or 1, got {other}"
                ))),
            })
            .collect::<Result<Vec<bool>>>()
            .map(|bits| Self { bits })
    }

    /// The selection as 0/1 flags.
    pub fn to_bits(&self) -> Vec<u8> {
        self.bits.iter().map(|&b| u8::from(b)).collect()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Whether item `i` is included.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn is_selected(&self, i: usize) -> bool {
        self.bits[i]
    }

    /// Number of included items.
    pub fn count_selected(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Indices of included items, in order.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// A copy with item `i` toggled.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn flipped(&self, i: usize) -> Self {
        let mut bits = self.bits.clone();
        bits[i] = !bits[i];
        Self { bits }
    }

    /// Number of positions where `self` and `other` differ.
    pub fn hamming_distance(&self, other: &Selection) -> usize {
        self.bits
            .iter()
            .zip(&other.bits)
            .filter(|(a, b)| a != b)
            .count()
            + self.len().abs_diff(other.len())
    }
}

impl From<Vec<bool>> for Selection {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl FromIterator<bool> for Selection {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}
