//! Tasks: the transient unit of work for one stage
//!
//! The host engine creates a task when a stage is entered and destroys it
//! once the stage completes; a task never outlives its stage. For that
//! window the task owns the order record, so a stage handler reaches all
//! the state it may touch through the one `&mut Task` it is given.

use crate::{
    Action, ActionId, FulfillmentError, FulfillmentResult, OrderRecord, Role, Stage,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ── Task identifier ──────────────────────────────────────────────────

/// Unique identifier for a task
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub String);

impl TaskId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn short(&self) -> &str {
        &self.0[..8.min(self.0.len())]
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Task ─────────────────────────────────────────────────────────────

/// One stage's entry-to-completion cycle, awaiting an actor's choice
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier
    pub id: TaskId,
    /// The stage this task belongs to
    pub stage: Stage,
    /// The role the task is offered to, if the stage is a human task
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// The order record, owned for the duration of the stage
    record: OrderRecord,
    /// Choices offered at stage entry, built fresh on every entry
    actions: Vec<Action>,
    /// The selected action, immutable once set
    result: Option<TaskResult>,
    /// When the task was created
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a fresh task for a stage, taking ownership of the record
    pub fn new(stage: Stage, record: OrderRecord) -> Self {
        Self {
            id: TaskId::generate(),
            stage,
            role: stage.assigned_role(),
            record,
            actions: Vec::new(),
            result: None,
            created_at: Utc::now(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn record(&self) -> &OrderRecord {
        &self.record
    }

    pub fn record_mut(&mut self) -> &mut OrderRecord {
        &mut self.record
    }

    /// Hand the record back to the host once the stage is done
    pub fn into_record(self) -> OrderRecord {
        self.record
    }

    // ── Offered actions ──────────────────────────────────────────────

    /// Declare an action available on this task
    pub fn offer_action(&mut self, id: ActionId, label: impl Into<String>) {
        self.actions.push(Action::new(id, label));
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Check whether an action is in the offered set
    pub fn offers(&self, id: ActionId) -> bool {
        self.actions.iter().any(|a| a.id == id)
    }

    // ── Completion ───────────────────────────────────────────────────

    /// Complete the task with the actor's selected action.
    ///
    /// This is the host-to-core trust boundary: the raw id is decoded
    /// into the closed vocabulary and checked against the offered set
    /// before anything else sees it. A task completes at most once.
    pub fn complete(
        &mut self,
        raw_action_id: &str,
        parameters: HashMap<String, String>,
    ) -> FulfillmentResult<()> {
        if self.result.is_some() {
            return Err(FulfillmentError::TaskAlreadyCompleted(self.stage));
        }

        let action = ActionId::parse(raw_action_id)?;
        if !self.offers(action) {
            return Err(FulfillmentError::ActionNotOffered {
                action,
                stage: self.stage,
            });
        }

        self.result = Some(TaskResult {
            action,
            parameters,
            completed_at: Utc::now(),
        });
        Ok(())
    }

    pub fn is_completed(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<&TaskResult> {
        self.result.as_ref()
    }

    /// The result, or an error when the task has not completed yet.
    ///
    /// Completion hooks use this: being invoked without a result means
    /// the host called them out of order.
    pub fn require_result(&self) -> FulfillmentResult<&TaskResult> {
        self.result
            .as_ref()
            .ok_or(FulfillmentError::TaskNotCompleted(self.stage))
    }
}

// ── Task result ──────────────────────────────────────────────────────

/// The outcome of a completed task: the selected action plus any
/// parameters the action supplied
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResult {
    /// The selected action, already decoded
    pub action: ActionId,
    /// Action-supplied parameters
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, String>,
    /// When the task completed
    pub completed_at: DateTime<Utc>,
}

impl TaskResult {
    /// Look up an action-supplied parameter
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OrderId;

    fn make_task(stage: Stage) -> Task {
        Task::new(stage, OrderRecord::new(OrderId::new("A-1")))
    }

    #[test]
    fn test_new_task_is_fresh() {
        let task = make_task(Stage::Check);
        assert!(task.actions().is_empty());
        assert!(!task.is_completed());
        assert_eq!(task.role(), Some(Role::Manager));
        assert_eq!(task.record().order_id(), &OrderId::new("A-1"));
    }

    #[test]
    fn test_offer_and_complete() {
        let mut task = make_task(Stage::Check);
        task.offer_action(ActionId::ManagerConfirm, "Confirm order");

        task.complete("manager_confirm", HashMap::new()).unwrap();

        assert!(task.is_completed());
        let result = task.require_result().unwrap();
        assert_eq!(result.action, ActionId::ManagerConfirm);
    }

    #[test]
    fn test_complete_rejects_unknown_id() {
        let mut task = make_task(Stage::Check);
        task.offer_action(ActionId::ManagerConfirm, "Confirm order");

        let err = task.complete("approve", HashMap::new()).unwrap_err();
        assert!(matches!(err, FulfillmentError::UnknownAction(_)));
        assert!(!task.is_completed());
    }

    #[test]
    fn test_complete_rejects_unoffered_action() {
        let mut task = make_task(Stage::Check);
        task.offer_action(ActionId::ManagerConfirm, "Confirm order");

        let err = task.complete("delivery_reject", HashMap::new()).unwrap_err();
        assert!(matches!(
            err,
            FulfillmentError::ActionNotOffered {
                action: ActionId::DeliveryReject,
                stage: Stage::Check,
            }
        ));
    }

    #[test]
    fn test_complete_only_once() {
        let mut task = make_task(Stage::Deliver);
        task.offer_action(ActionId::DeliveryConfirm, "Confirm delivery");
        task.offer_action(ActionId::DeliveryReject, "Redo delivery");

        task.complete("delivery_reject", HashMap::new()).unwrap();
        let err = task.complete("delivery_confirm", HashMap::new()).unwrap_err();

        assert!(matches!(
            err,
            FulfillmentError::TaskAlreadyCompleted(Stage::Deliver)
        ));
        // The first result stands.
        assert_eq!(
            task.require_result().unwrap().action,
            ActionId::DeliveryReject
        );
    }

    #[test]
    fn test_require_result_before_completion() {
        let task = make_task(Stage::Pack);
        let err = task.require_result().unwrap_err();
        assert!(matches!(err, FulfillmentError::TaskNotCompleted(Stage::Pack)));
    }

    #[test]
    fn test_result_parameters() {
        let mut task = make_task(Stage::Check);
        task.offer_action(ActionId::ManagerConfirm, "Confirm order");

        let mut params = HashMap::new();
        params.insert("process_number".to_string(), "83".to_string());
        task.complete("manager_confirm", params).unwrap();

        let result = task.require_result().unwrap();
        assert_eq!(result.parameter("process_number"), Some("83"));
        assert_eq!(result.parameter("missing"), None);
    }

    #[test]
    fn test_into_record_returns_mutations() {
        let mut task = make_task(Stage::Deliver);
        task.record_mut().increment_delivery_try_count();

        let record = task.into_record();
        assert_eq!(record.delivery_try_count(), 1);
    }

    #[test]
    fn test_task_id() {
        let id = TaskId::generate();
        assert!(!id.0.is_empty());
        assert!(id.short().len() <= 8);

        let named = TaskId::new("task-1");
        assert_eq!(format!("{}", named), "task-1");
    }
}
