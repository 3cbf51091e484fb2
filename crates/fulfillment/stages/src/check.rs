use fulfillment_types::{ActionId, FulfillmentResult, Stage, Task};

use crate::traits::StageHandler;

/// Stage 1: Check
///
/// A manager validates the incoming order. One outgoing action, no retry
/// path; completion passes straight through to Pack.
pub struct CheckHandler;

impl StageHandler for CheckHandler {
    fn stage(&self) -> Stage {
        Stage::Check
    }

    fn on_task_create(&self, task: &mut Task) -> FulfillmentResult<()> {
        task.record_mut().set_status(Stage::Check.entry_status());
        task.offer_action(ActionId::ManagerConfirm, "Confirm order");

        tracing::info!(
            order_id = %task.record().order_id(),
            "Order received, awaiting manager confirmation"
        );
        Ok(())
    }

    fn on_task_complete(&self, task: &mut Task) -> FulfillmentResult<()> {
        let result = task.require_result()?;

        tracing::debug!(
            order_id = %task.record().order_id(),
            action = %result.action,
            "Order confirmed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fulfillment_types::{OrderId, OrderRecord, OrderStatus};
    use std::collections::HashMap;

    fn make_task() -> Task {
        Task::new(Stage::Check, OrderRecord::new(OrderId::new("A-1")))
    }

    #[test]
    fn test_entry_sets_status_and_offers_confirm() {
        let handler = CheckHandler;
        let mut task = make_task();

        handler.on_task_create(&mut task).unwrap();

        assert_eq!(task.record().status(), OrderStatus::Checking);
        assert_eq!(task.actions().len(), 1);
        assert_eq!(task.actions()[0].id, ActionId::ManagerConfirm);
        assert_eq!(task.actions()[0].label, "Confirm order");
    }

    #[test]
    fn test_completion_leaves_record_untouched() {
        let handler = CheckHandler;
        let mut task = make_task();
        handler.on_task_create(&mut task).unwrap();
        task.complete("manager_confirm", HashMap::new()).unwrap();

        let before = task.record().clone();
        handler.on_task_complete(&mut task).unwrap();

        assert_eq!(task.record(), &before);
    }

    #[test]
    fn test_completion_requires_result() {
        let handler = CheckHandler;
        let mut task = make_task();
        handler.on_task_create(&mut task).unwrap();

        assert!(handler.on_task_complete(&mut task).is_err());
    }
}
