//! Actions: the named choices a stage offers to its actor
//!
//! Action ids arrive from the host as raw strings (they come out of task
//! forms or queue messages). They are decoded into the closed
//! [`ActionId`] vocabulary exactly once, when a task is completed; from
//! that point on every branch is an exhaustive match.

use crate::{FulfillmentError, FulfillmentResult};
use serde::{Deserialize, Serialize};

// ── Action identifiers ───────────────────────────────────────────────

/// The closed vocabulary of actions across the fulfillment workflow
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionId {
    /// A manager confirms the order is valid (Check stage)
    ManagerConfirm,
    /// The warehouse packs the order (Pack stage)
    WarehousePack,
    /// The courier confirms a successful delivery (Deliver stage)
    DeliveryConfirm,
    /// The courier reports a failed delivery; the stage re-enters
    DeliveryReject,
}

impl ActionId {
    /// The wire form of this action id, as the host presents it
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionId::ManagerConfirm => "manager_confirm",
            ActionId::WarehousePack => "pack",
            ActionId::DeliveryConfirm => "delivery_confirm",
            ActionId::DeliveryReject => "delivery_reject",
        }
    }

    /// Decode a raw action id at the trust boundary.
    ///
    /// Ids outside the vocabulary are rejected rather than mapped onto a
    /// default branch; an unrecognized id always means a wiring bug in the
    /// host, never a domain outcome.
    pub fn parse(raw: &str) -> FulfillmentResult<Self> {
        match raw {
            "manager_confirm" => Ok(ActionId::ManagerConfirm),
            "pack" => Ok(ActionId::WarehousePack),
            "delivery_confirm" => Ok(ActionId::DeliveryConfirm),
            "delivery_reject" => Ok(ActionId::DeliveryReject),
            other => Err(FulfillmentError::UnknownAction(other.to_string())),
        }
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Offered actions ──────────────────────────────────────────────────

/// A user-facing choice offered by a stage at entry time.
///
/// The offered set is built fresh on every stage entry; re-entering a
/// stage (the delivery retry loop) produces the same set again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The action's identity, used to select the completion branch
    pub id: ActionId,
    /// Human-readable label shown to the actor
    pub label: String,
}

impl Action {
    pub fn new(id: ActionId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}
