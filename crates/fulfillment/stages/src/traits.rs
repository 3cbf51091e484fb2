use fulfillment_types::{ArchiveError, FulfillmentResult, OrderRecord, OrderSummary, Stage, Task};

/// StageHandler trait: one implementation per interactive workflow stage.
///
/// The host engine invokes the hooks in order: `on_task_create` when the
/// stage is entered, `on_task_complete` after an actor has completed one
/// of the task's offered actions. Routing to the next stage is the host's
/// job, driven by [`Stage::transition`]; handlers only mutate the record.
pub trait StageHandler: Send + Sync {
    /// The stage this handler serves.
    fn stage(&self) -> Stage;

    /// Called when the stage is entered and its task created. The handler
    /// writes the stage's canonical status and declares the available
    /// actions.
    fn on_task_create(&self, task: &mut Task) -> FulfillmentResult<()>;

    /// Called once the task has completed. `task.require_result()` holds
    /// the selected action; the handler applies the stage's record
    /// mutations for that outcome.
    fn on_task_complete(&self, task: &mut Task) -> FulfillmentResult<()>;

    /// Called when the host withdraws a pending task (e.g. the process is
    /// cancelled). Most stages have nothing to undo.
    fn on_task_abort(&self, _task: &mut Task) -> FulfillmentResult<()> {
        Ok(())
    }
}

/// A one-shot process step with no task and no offered actions.
///
/// The terminal Close stage runs as a script: the host calls `execute`
/// once and enters no further stage for the process afterwards.
pub trait ProcessScript: Send + Sync {
    fn execute(&self, record: &mut OrderRecord) -> FulfillmentResult<()>;
}

/// Archive gateway: the external collaborator that durably stores a
/// closed order's summary.
///
/// Invoked exactly once per order, at closure. A failure is fatal to the
/// Close step; no partial-close state is defined. Use
/// [`MemoryArchive`](crate::MemoryArchive) in tests.
pub trait ArchiveGateway: Send + Sync {
    fn archive_order(&self, summary: OrderSummary) -> Result<(), ArchiveError>;
}
