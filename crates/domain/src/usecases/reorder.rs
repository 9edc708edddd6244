//! Reorder planning
//!
//! The remote link list only supports "exchange the elements at positions i
//! and j". Turning a drag-and-drop result into remote calls means computing a
//! sequence of such swaps that, applied strictly in order, turns the current
//! order into the desired one.

use std::collections::HashMap;
use std::hash::Hash;

use thiserror::Error;

use crate::model::SwapOp;

/// Error returned by the reorder planner
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    #[error("Desired order is not a permutation of the current order: {0}")]
    InvalidPermutation(String),
}

/// Plan the swaps that turn `current` into `desired`.
///
/// Selection by swap: for each target position, bring the wanted element in
/// from wherever it currently sits. Positions below the scan point are never
/// touched again, so the plan has at most `n - 1` swaps. The plan is only
/// valid when applied in full and in order.
///
/// Fails with [`ReorderError::InvalidPermutation`] before producing anything
/// when the lengths differ, an identifier repeats, or the two lists do not
/// hold the same identifiers.
pub fn plan_reorder<T>(current: &[T], desired: &[T]) -> Result<Vec<SwapOp>, ReorderError>
where
    T: Eq + Hash + Clone,
{
    if current.len() != desired.len() {
        return Err(ReorderError::InvalidPermutation(format!(
            "length mismatch ({} current, {} desired)",
            current.len(),
            desired.len()
        )));
    }

    let mut position: HashMap<T, usize> = HashMap::with_capacity(current.len());
    for (index, id) in current.iter().enumerate() {
        if position.insert(id.clone(), index).is_some() {
            return Err(ReorderError::InvalidPermutation(format!(
                "duplicate identifier at current position {}",
                index
            )));
        }
    }

    let mut seen = HashMap::with_capacity(desired.len());
    for (index, id) in desired.iter().enumerate() {
        if !position.contains_key(id) {
            return Err(ReorderError::InvalidPermutation(format!(
                "unknown identifier at desired position {}",
                index
            )));
        }
        if seen.insert(id, index).is_some() {
            return Err(ReorderError::InvalidPermutation(format!(
                "duplicate identifier at desired position {}",
                index
            )));
        }
    }

    let mut working = current.to_vec();
    let mut plan = Vec::new();

    for (target, wanted) in desired.iter().enumerate() {
        if working[target] == *wanted {
            continue;
        }

        let source = position[wanted];
        debug_assert!(source > target, "positions below the scan point are final");

        working.swap(target, source);
        position.insert(working[target].clone(), target);
        position.insert(working[source].clone(), source);
        plan.push(SwapOp::new(target, source));
    }

    tracing::debug!(
        len = current.len(),
        swaps = plan.len(),
        "Planned reorder"
    );

    Ok(plan)
}

/// Apply a swap plan to a local list, in order.
///
/// # Panics
///
/// Panics if a swap index is out of bounds, like [`slice::swap`].
pub fn apply_swaps<T>(items: &mut [T], plan: &[SwapOp]) {
    for op in plan {
        items.swap(op.index_a, op.index_b);
    }
}
