//! Coalescing background persistence.
//!
//! Mutations never wait on disk: they drop the latest dirty snapshot into a
//! single-slot channel and move on. One worker task drains the slot, so
//! flushes are serialized relative to each other and a burst of captures
//! collapses into one write of the final state. A failed flush is logged
//! and the snapshot is retried on the next state change.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;
use tracing::{debug, warn};

use ck_core::ports::{EncryptionPort, HistoryRepositoryPort, PinnedRepositoryPort};
use ck_core::{ClipboardItem, HistoryDocument, PinnedClipboardItem};

/// Build the durable history document, encrypting when the engine says so.
pub(crate) async fn build_history_document(
    items: &[ClipboardItem],
    encrypt: bool,
    encryption: &Arc<dyn EncryptionPort>,
) -> ck_core::Result<HistoryDocument> {
    if encrypt {
        let bytes = serde_json::to_vec(items)?;
        let blob = encryption.encrypt(&bytes).await?;
        Ok(HistoryDocument::Encrypted { blob })
    } else {
        Ok(HistoryDocument::Plain {
            items: items.to_vec(),
        })
    }
}

/// One fully-built snapshot to persist.
#[derive(Clone)]
pub(crate) struct PersistPlan {
    pub generation: u64,
    pub items: Vec<ClipboardItem>,
    pub pinned: Vec<PinnedClipboardItem>,
    pub encrypt: bool,
}

/// Spawn the flush worker.
///
/// Returns the plan slot and a receiver carrying the generation of the last
/// plan the worker finished attempting (successfully or not).
pub(crate) fn spawn_flush_worker(
    history_repo: Arc<dyn HistoryRepositoryPort>,
    pinned_repo: Arc<dyn PinnedRepositoryPort>,
    encryption: Arc<dyn EncryptionPort>,
) -> (watch::Sender<Option<PersistPlan>>, watch::Receiver<u64>) {
    let (plan_tx, mut plan_rx) = watch::channel::<Option<PersistPlan>>(None);
    let (processed_tx, processed_rx) = watch::channel(0u64);

    tokio::spawn(async move {
        while plan_rx.changed().await.is_ok() {
            let plan = plan_rx.borrow_and_update().clone();
            let Some(plan) = plan else { continue };

            match persist_plan(&plan, &history_repo, &pinned_repo, &encryption).await {
                Ok(()) => debug!(generation = plan.generation, "state flushed"),
                Err(e) => warn!(
                    generation = plan.generation,
                    error = %format!("{e:#}"),
                    "state flush failed; will retry on next state change"
                ),
            }
            let _ = processed_tx.send(plan.generation);
        }
    });

    (plan_tx, processed_rx)
}

async fn persist_plan(
    plan: &PersistPlan,
    history_repo: &Arc<dyn HistoryRepositoryPort>,
    pinned_repo: &Arc<dyn PinnedRepositoryPort>,
    encryption: &Arc<dyn EncryptionPort>,
) -> Result<()> {
    let document = build_history_document(&plan.items, plan.encrypt, encryption).await?;
    history_repo.save(&document).await?;
    pinned_repo.save(&plan.pinned).await?;
    Ok(())
}
