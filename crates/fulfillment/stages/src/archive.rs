use std::sync::Mutex;

use fulfillment_types::{ArchiveError, OrderSummary};

use crate::traits::ArchiveGateway;

/// In-memory archive gateway.
///
/// Keeps every archived summary in a vec behind a mutex. Meant for tests
/// and for hosts that have no durable store wired up yet.
#[derive(Debug, Default)]
pub struct MemoryArchive {
    summaries: Mutex<Vec<OrderSummary>>,
}

impl MemoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything archived so far
    pub fn archived(&self) -> Vec<OrderSummary> {
        self.summaries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl ArchiveGateway for MemoryArchive {
    fn archive_order(&self, summary: OrderSummary) -> Result<(), ArchiveError> {
        tracing::debug!(order_id = %summary.order_id, "Order summary archived");
        self.summaries
            .lock()
            .map_err(|e| ArchiveError::Unavailable(e.to_string()))?
            .push(summary);
        Ok(())
    }
}
