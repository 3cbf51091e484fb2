use std::sync::Arc;

use fulfillment_types::{FulfillmentResult, OrderRecord, Stage};

use crate::traits::{ArchiveGateway, ProcessScript};

/// Stage 4: Close, the terminal one-shot step.
///
/// Runs as a script, not an interactive task: no entry/completion split
/// and no offered actions. Marks the order closed and hands its terminal
/// summary to the archive gateway. The gateway call is synchronous from
/// the workflow's point of view; if it fails, the error propagates and
/// the Close step does not count as done.
pub struct CloseScript {
    archive: Arc<dyn ArchiveGateway>,
}

impl CloseScript {
    pub fn new(archive: Arc<dyn ArchiveGateway>) -> Self {
        Self { archive }
    }
}

impl ProcessScript for CloseScript {
    fn execute(&self, record: &mut OrderRecord) -> FulfillmentResult<()> {
        record.set_status(Stage::Close.entry_status());

        let summary = record.summary();
        tracing::info!(
            order_id = %summary.order_id,
            delivery_try_count = summary.delivery_try_count,
            "Order closed, archiving"
        );

        self.archive.archive_order(summary)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::MemoryArchive;
    use fulfillment_types::{ArchiveError, OrderId, OrderStatus, OrderSummary};

    fn make_delivered_record() -> OrderRecord {
        let mut record = OrderRecord::new(OrderId::new("A-1"));
        record.set_status(OrderStatus::Delivering);
        record.increment_delivery_try_count();
        record.mark_delivered();
        record
    }

    #[test]
    fn test_execute_closes_and_archives() {
        let archive = Arc::new(MemoryArchive::new());
        let script = CloseScript::new(archive.clone());
        let mut record = make_delivered_record();

        script.execute(&mut record).unwrap();

        assert_eq!(record.status(), OrderStatus::Closed);
        let archived = archive.archived();
        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].order_id, OrderId::new("A-1"));
        assert_eq!(archived[0].delivery_try_count, 1);
        assert_eq!(archived[0].delivery_date, record.delivery_date());
    }

    #[test]
    fn test_gateway_failure_is_fatal() {
        struct DownArchive;
        impl ArchiveGateway for DownArchive {
            fn archive_order(&self, _summary: OrderSummary) -> Result<(), ArchiveError> {
                Err(ArchiveError::Unavailable("connection refused".into()))
            }
        }

        let script = CloseScript::new(Arc::new(DownArchive));
        let mut record = make_delivered_record();

        assert!(script.execute(&mut record).is_err());
    }
}
