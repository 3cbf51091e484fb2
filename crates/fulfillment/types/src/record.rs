//! The order record: the mutable state threaded through the workflow
//!
//! One record describes one order's progress. The host engine owns it
//! between stages and persists it as an untyped parameter bag; this module
//! is the single point of truth for the bag's field names, their semantic
//! types, and the defaulting policy. Inside the workflow the record is a
//! plain struct, so stage logic never touches raw keys.

use crate::{FulfillmentError, FulfillmentResult, OrderStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parameter bag keys, as stored by the host engine
const KEY_ORDER_ID: &str = "orderId";
const KEY_STATUS: &str = "status";
const KEY_DELIVERY_TRY_COUNT: &str = "deliveryTryCount";
const KEY_DELIVERY_DATE: &str = "deliveryDate";

// ── Order identifier ─────────────────────────────────────────────────

/// Unique identifier for an order, immutable once set
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Order record ─────────────────────────────────────────────────────

/// The mutable state of one order, shared by every stage handler
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Identifies the order across all stages
    pub order_id: OrderId,
    /// Written once per stage entry by that stage's handler
    pub status: OrderStatus,
    /// Incremented once per delivery completion, success or failure
    pub delivery_try_count: u32,
    /// Set on a successful delivery completion; absent until then
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<DateTime<Utc>>,
}

impl OrderRecord {
    /// Create a fresh record for a new order.
    ///
    /// The record starts at [`OrderStatus::Checking`]; the Check stage
    /// re-asserts that status at entry, as every stage does.
    pub fn new(order_id: OrderId) -> Self {
        Self {
            order_id,
            status: OrderStatus::Checking,
            delivery_try_count: 0,
            delivery_date: None,
        }
    }

    /// Build a record from the host's untyped parameter bag.
    ///
    /// This is the process-creation trust boundary. `orderId` must be
    /// present and a string; its absence is a configuration error, not a
    /// recoverable condition. Every other field falls back to its default
    /// when absent or mistyped.
    pub fn from_parameters(
        parameters: &HashMap<String, serde_json::Value>,
    ) -> FulfillmentResult<Self> {
        let order_id = parameters
            .get(KEY_ORDER_ID)
            .and_then(|v| v.as_str())
            .map(OrderId::new)
            .ok_or(FulfillmentError::MissingField(KEY_ORDER_ID))?;

        let status = parameters
            .get(KEY_STATUS)
            .and_then(|v| v.as_str())
            .and_then(OrderStatus::from_str_opt)
            .unwrap_or_default();

        let delivery_try_count = parameters
            .get(KEY_DELIVERY_TRY_COUNT)
            .and_then(|v| v.as_u64())
            .map(|n| n as u32)
            .unwrap_or(0);

        let delivery_date = parameters
            .get(KEY_DELIVERY_DATE)
            .and_then(|v| v.as_str())
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Ok(Self {
            order_id,
            status,
            delivery_try_count,
            delivery_date,
        })
    }

    /// Write the record back into the host's parameter bag form
    pub fn to_parameters(&self) -> HashMap<String, serde_json::Value> {
        let mut parameters = HashMap::new();
        parameters.insert(KEY_ORDER_ID.into(), self.order_id.0.clone().into());
        parameters.insert(KEY_STATUS.into(), self.status.as_str().into());
        parameters.insert(KEY_DELIVERY_TRY_COUNT.into(), self.delivery_try_count.into());
        if let Some(date) = self.delivery_date {
            parameters.insert(KEY_DELIVERY_DATE.into(), date.to_rfc3339().into());
        }
        parameters
    }

    // ── Accessor operations ──────────────────────────────────────────

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Unconditional status overwrite
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn delivery_try_count(&self) -> u32 {
        self.delivery_try_count
    }

    /// Record one more delivery attempt, whatever its outcome
    pub fn increment_delivery_try_count(&mut self) {
        self.delivery_try_count = self.delivery_try_count() + 1;
    }

    /// Record the moment of a successful delivery
    pub fn mark_delivered(&mut self) {
        self.delivery_date = Some(Utc::now());
    }

    pub fn delivery_date(&self) -> Option<DateTime<Utc>> {
        self.delivery_date
    }

    /// Snapshot the terminal attributes for archival
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            order_id: self.order_id.clone(),
            delivery_try_count: self.delivery_try_count,
            delivery_date: self.delivery_date,
        }
    }
}

// ── Archive summary ──────────────────────────────────────────────────

/// The snapshot of a closed order handed to the archive gateway
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub delivery_try_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<DateTime<Utc>>,
}
