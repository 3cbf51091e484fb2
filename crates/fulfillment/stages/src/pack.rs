use fulfillment_types::{ActionId, FulfillmentResult, Stage, Task};

use crate::traits::StageHandler;

/// Stage 2: Pack
///
/// The warehouse packs the confirmed order. One outgoing action; the
/// completion hook only logs.
pub struct PackHandler;

impl StageHandler for PackHandler {
    fn stage(&self) -> Stage {
        Stage::Pack
    }

    fn on_task_create(&self, task: &mut Task) -> FulfillmentResult<()> {
        task.record_mut().set_status(Stage::Pack.entry_status());
        task.offer_action(ActionId::WarehousePack, "Pack order");

        tracing::info!(
            order_id = %task.record().order_id(),
            "Order sent to the warehouse for packing"
        );
        Ok(())
    }

    fn on_task_complete(&self, task: &mut Task) -> FulfillmentResult<()> {
        task.require_result()?;

        tracing::info!(
            order_id = %task.record().order_id(),
            "Order packed"
        );
        Ok(())
    }
}
