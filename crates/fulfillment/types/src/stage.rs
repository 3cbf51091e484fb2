//! Stages and the transition table
//!
//! The workflow is a four-state machine: Check, Pack, Deliver, Close.
//! [`Stage::transition`] is the declared process graph the host routes by.
//! Deliver is the only stage with a self-loop edge, gated by the reject
//! action; everything else is strictly forward.

use crate::ActionId;
use serde::{Deserialize, Serialize};

// ── Stage ────────────────────────────────────────────────────────────

/// One named step of the order workflow
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Order validation by a manager
    Check,
    /// Warehouse packing
    Pack,
    /// Courier delivery; may repeat until confirmed
    Deliver,
    /// Terminal one-shot closure script
    Close,
}

impl Stage {
    /// Stable identifier for this stage
    pub fn id(&self) -> &'static str {
        match self {
            Stage::Check => "check",
            Stage::Pack => "pack",
            Stage::Deliver => "deliver",
            Stage::Close => "close",
        }
    }

    /// The canonical status a stage writes to the record at entry
    pub fn entry_status(&self) -> OrderStatus {
        match self {
            Stage::Check => OrderStatus::Checking,
            Stage::Pack => OrderStatus::Packing,
            Stage::Deliver => OrderStatus::Delivering,
            Stage::Close => OrderStatus::Closed,
        }
    }

    /// The role whose actors the stage's task is offered to.
    ///
    /// Close runs as a script, not as a human task, so it carries no role.
    pub fn assigned_role(&self) -> Option<Role> {
        match self {
            Stage::Check => Some(Role::Manager),
            Stage::Pack => Some(Role::WarehouseLead),
            Stage::Deliver => Some(Role::Delivery),
            Stage::Close => None,
        }
    }

    /// The transition table of the fulfillment process graph.
    ///
    /// Returns the stage the given action routes to, or `None` when the
    /// action has no edge out of this stage. Deliver → Deliver on reject
    /// is the single cycle in the graph.
    pub fn transition(self, action: ActionId) -> Option<Stage> {
        match (self, action) {
            (Stage::Check, ActionId::ManagerConfirm) => Some(Stage::Pack),
            (Stage::Pack, ActionId::WarehousePack) => Some(Stage::Deliver),
            (Stage::Deliver, ActionId::DeliveryConfirm) => Some(Stage::Close),
            (Stage::Deliver, ActionId::DeliveryReject) => Some(Stage::Deliver),
            _ => None,
        }
    }

    /// Check if this is the terminal stage
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Close)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

// ── Order status ─────────────────────────────────────────────────────

/// The lifecycle status recorded on the order itself.
///
/// Written exactly once per stage entry by that stage's handler. Monotonic
/// through Checking → Packing → Delivering, except that Delivering may
/// re-assert itself across delivery retries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Awaiting manager confirmation
    #[default]
    Checking,
    /// Being packed at the warehouse
    Packing,
    /// Out for delivery
    Delivering,
    /// Archived; no further stage is entered
    Closed,
}

impl OrderStatus {
    /// The wire form, matching the host's stored parameter values
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Checking => "CHECKING",
            OrderStatus::Packing => "PACKING",
            OrderStatus::Delivering => "DELIVERING",
            OrderStatus::Closed => "CLOSED",
        }
    }

    /// Parse the wire form; unrecognized values yield `None`
    pub fn from_str_opt(raw: &str) -> Option<Self> {
        match raw {
            "CHECKING" => Some(OrderStatus::Checking),
            "PACKING" => Some(OrderStatus::Packing),
            "DELIVERING" => Some(OrderStatus::Delivering),
            "CLOSED" => Some(OrderStatus::Closed),
            _ => None,
        }
    }

    /// Check if this is a terminal status
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Closed)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Roles ────────────────────────────────────────────────────────────

/// The actor roles tasks are offered to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Confirms orders during Check
    Manager,
    /// Packs orders during Pack
    WarehouseLead,
    /// Performs and reports deliveries
    Delivery,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::WarehouseLead => "warehouse_lead",
            Role::Delivery => "delivery",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
