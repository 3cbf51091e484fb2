use fulfillment_types::{ActionId, FulfillmentError, FulfillmentResult, Stage, Task};

use crate::traits::StageHandler;

/// Stage 3: Deliver
///
/// The only stage with a genuine branch and a cyclic transition. Every
/// completion counts as one delivery attempt; a confirmed delivery stamps
/// the delivery date and routes to Close, a rejected one routes the stage
/// back onto itself with no bound on retries. Retries are paced entirely
/// by the acting courier, never by a timer.
pub struct DeliverHandler;

impl StageHandler for DeliverHandler {
    fn stage(&self) -> Stage {
        Stage::Deliver
    }

    fn on_task_create(&self, task: &mut Task) -> FulfillmentResult<()> {
        task.record_mut().set_status(Stage::Deliver.entry_status());
        task.offer_action(ActionId::DeliveryConfirm, "Confirm delivery");
        task.offer_action(ActionId::DeliveryReject, "Redo delivery");

        let try_count = task.record().delivery_try_count();
        if try_count > 0 {
            tracing::info!(
                order_id = %task.record().order_id(),
                try_count,
                "Order out for redelivery"
            );
        } else {
            tracing::info!(
                order_id = %task.record().order_id(),
                "Order out for delivery"
            );
        }
        Ok(())
    }

    fn on_task_complete(&self, task: &mut Task) -> FulfillmentResult<()> {
        let action = task.require_result()?.action;

        // Every completion is one attempt, whichever way it went.
        task.record_mut().increment_delivery_try_count();

        match action {
            ActionId::DeliveryConfirm => {
                task.record_mut().mark_delivered();
                tracing::info!(
                    order_id = %task.record().order_id(),
                    try_count = task.record().delivery_try_count(),
                    "Delivery confirmed"
                );
                Ok(())
            }
            ActionId::DeliveryReject => {
                tracing::info!(
                    order_id = %task.record().order_id(),
                    try_count = task.record().delivery_try_count(),
                    "Delivery rejected, stage will re-enter"
                );
                Ok(())
            }
            other => Err(FulfillmentError::NoTransition {
                stage: Stage::Deliver,
                action: other,
            }),
        }
    }
}
