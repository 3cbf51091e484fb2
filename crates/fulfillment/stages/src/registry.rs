use std::sync::Arc;

use fulfillment_types::Stage;

use crate::check::CheckHandler;
use crate::close::CloseScript;
use crate::deliver::DeliverHandler;
use crate::pack::PackHandler;
use crate::traits::{ArchiveGateway, ProcessScript, StageHandler};

/// The assembled fulfillment workflow: one handler per interactive stage
/// plus the terminal close script.
///
/// This is the dispatch surface the host engine works against. It holds
/// no process state; the record travels inside tasks, and routing comes
/// from [`Stage::transition`].
pub struct FulfillmentWorkflow {
    check: CheckHandler,
    pack: PackHandler,
    deliver: DeliverHandler,
    close: CloseScript,
}

impl FulfillmentWorkflow {
    pub fn new(archive: Arc<dyn ArchiveGateway>) -> Self {
        Self {
            check: CheckHandler,
            pack: PackHandler,
            deliver: DeliverHandler,
            close: CloseScript::new(archive),
        }
    }

    /// The task handler serving a stage. `None` for Close, which runs as
    /// a script rather than an interactive task.
    pub fn handler_for(&self, stage: Stage) -> Option<&dyn StageHandler> {
        match stage {
            Stage::Check => Some(&self.check),
            Stage::Pack => Some(&self.pack),
            Stage::Deliver => Some(&self.deliver),
            Stage::Close => None,
        }
    }

    /// The one-shot script for the terminal stage
    pub fn close_script(&self) -> &dyn ProcessScript {
        &self.close
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::MemoryArchive;

    #[test]
    fn test_every_interactive_stage_has_a_handler() {
        let workflow = FulfillmentWorkflow::new(Arc::new(MemoryArchive::new()));

        for stage in [Stage::Check, Stage::Pack, Stage::Deliver] {
            let handler = workflow.handler_for(stage).unwrap();
            assert_eq!(handler.stage(), stage);
        }
    }

    #[test]
    fn test_close_is_a_script_not_a_task() {
        let workflow = FulfillmentWorkflow::new(Arc::new(MemoryArchive::new()));
        assert!(workflow.handler_for(Stage::Close).is_none());
    }
}
