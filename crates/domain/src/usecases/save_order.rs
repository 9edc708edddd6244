//! Save-order use case - submits a reorder plan to the remote link list

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time::sleep;

use crate::{
    model::SwapOp,
    ports::{LinkMutator, StoreError},
    usecases::reorder::{ReorderError, plan_reorder},
};

/// Configuration for the save-order use case
#[derive(Debug, Clone)]
pub struct SaveOrderConfig {
    /// Pause after each finalized swap before submitting the next one
    pub swap_delay: Duration,
}

impl Default for SaveOrderConfig {
    fn default() -> Self {
        Self {
            swap_delay: Duration::from_millis(1500),
        }
    }
}

/// Error type for the save-order use case
#[derive(Debug, Error)]
pub enum SaveOrderError {
    #[error(transparent)]
    Plan(#[from] ReorderError),
    /// A swap failed after `applied` earlier swaps had finalized. The remote
    /// list is a valid permutation but not the desired order; the caller
    /// should re-fetch it.
    #[error("Swap {failed} failed after {applied} of {total} swaps: {source}")]
    Partial {
        applied: usize,
        total: usize,
        failed: SwapOp,
        #[source]
        source: StoreError,
    },
}

/// Outcome of a fully submitted plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOrderReport {
    /// Swaps submitted, in order
    pub swaps: Vec<SwapOp>,
    /// Digest of each finalized swap
    pub digests: Vec<String>,
}

/// Plans a reorder and submits it one swap at a time
pub struct SaveOrderUseCase<M>
where
    M: LinkMutator + ?Sized,
{
    mutator: Arc<M>,
    config: SaveOrderConfig,
}

impl<M> SaveOrderUseCase<M>
where
    M: LinkMutator + ?Sized,
{
    pub fn new(mutator: Arc<M>, config: SaveOrderConfig) -> Self {
        Self { mutator, config }
    }

    /// Reorder the links of `object_id` from `current` to `desired`.
    ///
    /// Swaps are strictly sequential: swap k+1 is only submitted once swap k
    /// has finalized. The first failure aborts the remaining plan.
    pub async fn save_order(
        &self,
        object_id: &str,
        current: &[String],
        desired: &[String],
    ) -> Result<SaveOrderReport, SaveOrderError> {
        let swaps = plan_reorder(current, desired)?;
        self.submit(object_id, &swaps).await
    }

    /// Submit an already planned swap sequence, in order.
    ///
    /// `swaps` must come from [`plan_reorder`] against the list as it is now
    /// on the remote side.
    pub async fn submit(
        &self,
        object_id: &str,
        swaps: &[SwapOp],
    ) -> Result<SaveOrderReport, SaveOrderError> {
        tracing::info!(
            object_id = %object_id,
            swaps = swaps.len(),
            "Submitting reorder"
        );

        let total = swaps.len();
        let mut digests = Vec::with_capacity(total);

        for (applied, op) in swaps.iter().enumerate() {
            match self
                .mutator
                .swap_links(object_id, op.index_a, op.index_b)
                .await
            {
                Ok(receipt) => {
                    tracing::debug!(
                        object_id = %object_id,
                        swap = %op,
                        digest = %receipt.digest,
                        "Swap finalized"
                    );
                    digests.push(receipt.digest);
                }
                Err(e) => {
                    tracing::error!(
                        object_id = %object_id,
                        swap = %op,
                        applied,
                        error = %e,
                        "Swap failed, aborting reorder"
                    );
                    return Err(SaveOrderError::Partial {
                        applied,
                        total,
                        failed: *op,
                        source: e,
                    });
                }
            }

            if applied + 1 < total && !self.config.swap_delay.is_zero() {
                sleep(self.config.swap_delay).await;
            }
        }

        Ok(SaveOrderReport {
            swaps: swaps.to_vec(),
            digests,
        })
    }
}
