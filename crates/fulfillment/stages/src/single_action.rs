use fulfillment_types::{ActionId, FulfillmentResult, Stage, Task};

use crate::traits::StageHandler;

/// The minimal stage handler shape: one action, no branching, no order
/// state of its own.
///
/// Entry offers a single action whose label is just the uppercased action
/// id; completion logs a correlation parameter supplied with the action's
/// result, if any. Useful for stages that only need an acknowledgement,
/// and as a stand-in handler in host wiring tests.
pub struct SingleActionHandler {
    stage: Stage,
    action: ActionId,
    correlation_key: String,
}

impl SingleActionHandler {
    pub fn new(stage: Stage, action: ActionId, correlation_key: impl Into<String>) -> Self {
        Self {
            stage,
            action,
            correlation_key: correlation_key.into(),
        }
    }
}

impl StageHandler for SingleActionHandler {
    fn stage(&self) -> Stage {
        self.stage
    }

    fn on_task_create(&self, task: &mut Task) -> FulfillmentResult<()> {
        task.offer_action(self.action, self.action.as_str().to_uppercase());
        Ok(())
    }

    fn on_task_complete(&self, task: &mut Task) -> FulfillmentResult<()> {
        let result = task.require_result()?;

        match result.parameter(&self.correlation_key) {
            Some(value) => tracing::info!(
                stage = %self.stage,
                key = %self.correlation_key,
                value,
                "Task completed"
            ),
            None => tracing::info!(
                stage = %self.stage,
                "Task completed without a correlation parameter"
            ),
        }
        Ok(())
    }
}
