//! Domain types for the order fulfillment workflow
//!
//! An order moves through four stages: Check, Pack, Deliver, Close. A host
//! process engine creates a task per stage, hands it to the matching stage
//! handler, and routes to the next stage once an actor has completed one of
//! the task's offered actions. This crate holds the state that moves
//! between those parties:
//!
//! - **OrderRecord**: the mutable state of one order, threaded through
//!   every stage. Strongly typed; the host's untyped parameter bag is
//!   converted exactly once, at process creation.
//! - **Stage**: the closed set of workflow stages together with the
//!   transition table. Deliver is the only stage with a self-loop edge,
//!   taken when a delivery is rejected.
//! - **ActionId / Action**: the closed action vocabulary and the
//!   user-facing choices a stage offers at entry.
//! - **Task**: the transient unit of work for one stage's entry to
//!   completion cycle. Owns the record for that cycle and carries the
//!   immutable result once completed.
//! - **OrderSummary**: the terminal snapshot handed to the archive
//!   gateway when the order closes.
//!
//! # Design Principles
//!
//! 1. Decode at the boundary. Raw action ids and parameter bags are parsed
//!    once, where the host hands them over; everything past that point is
//!    an exhaustive match over a sum type.
//! 2. The process graph is data. Routing lives in [`Stage::transition`],
//!    not inside handlers.
//! 3. Defaults are policy, not accident. `deliveryTryCount` reads as 0
//!    when absent or mistyped; a missing `orderId` is a configuration
//!    error and refuses to construct a record.

#![deny(unsafe_code)]

mod action;
mod errors;
mod record;
mod stage;
mod task;

pub use action::*;
pub use errors::*;
pub use record::*;
pub use stage::*;
pub use task::*;
