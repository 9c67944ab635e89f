//! Data source and delegate contracts
//!
//! The diagram never stores either one. Hosts pass them into the calls that
//! need them, so the diagram can't outlive or keep alive its host's data.

use crate::color::Color;
use crate::geometry::LeafInput;

/// Provides the leaves of a diagram. Queried once per reload, in index order.
pub trait LeavesDataSource {
    /// Number of leaves to build
    fn number_of_leaves(&self) -> usize;

    /// Fill color of a leaf
    fn color_for_leaf(&self, index: usize) -> Color;

    /// Weight of a leaf. Percentages and absolute values both work, the
    /// diagram normalizes by the total.
    fn value_for_leaf(&self, index: usize) -> f64;
}

/// Receives taps on leaves
pub trait LeavesDelegate {
    fn did_tap_leaf(&mut self, index: usize);
}

/// Snapshot the data source. Negative and NaN weights count as zero.
pub fn collect_inputs(source: &dyn LeavesDataSource) -> Vec<LeafInput> {
    (0..source.number_of_leaves())
        .map(|index| {
            let value = source.value_for_leaf(index);
            if value.is_nan() || value < 0.0 {
                log::warn!("Leaf {} has invalid value {}, using 0", index, value);
            }
            LeafInput {
                value: value.max(0.0),
                color: source.color_for_leaf(index),
            }
        })
        .collect()
}

impl LeavesDataSource for [LeafInput] {
    fn number_of_leaves(&self) -> usize {
        self.len()
    }

    fn color_for_leaf(&self, index: usize) -> Color {
        self[index].color
    }

    fn value_for_leaf(&self, index: usize) -> f64 {
        self[index].value
    }
}

impl LeavesDataSource for Vec<LeafInput> {
    fn number_of_leaves(&self) -> usize {
        self.as_slice().number_of_leaves()
    }

    fn color_for_leaf(&self, index: usize) -> Color {
        self.as_slice().color_for_leaf(index)
    }

    fn value_for_leaf(&self, index: usize) -> f64 {
        self.as_slice().value_for_leaf(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_clamps_invalid_values() {
        let data = vec![
            LeafInput { value: 2.0, color: Color::WHITE },
            LeafInput { value: -1.0, color: Color::BLACK },
            LeafInput { value: f64::NAN, color: Color::BLACK },
        ];
        let inputs = collect_inputs(&data);
        assert_eq!(inputs.len(), 3);
        assert_eq!(inputs[0].value, 2.0);
        assert_eq!(inputs[1].value, 0.0);
        assert_eq!(inputs[2].value, 0.0);
        assert_eq!(inputs[1].color, Color::BLACK);
    }
}
