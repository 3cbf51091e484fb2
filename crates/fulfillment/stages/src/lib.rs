//! Stage handlers for the order fulfillment workflow
//!
//! One handler per workflow stage, driven by a host process engine. The
//! engine invokes [`StageHandler::on_task_create`] when it enters a stage
//! and [`StageHandler::on_task_complete`] once an actor has selected one
//! of the task's offered actions; it then routes to the next stage via the
//! transition table in `fulfillment_types`. The terminal Close stage is a
//! one-shot [`ProcessScript`] with no task and no actions.
//!
//! # Stages
//!
//! - [`CheckHandler`]: manager confirms the order
//! - [`PackHandler`]: warehouse packs the order
//! - [`DeliverHandler`]: courier delivers; rejection loops the stage
//! - [`CloseScript`]: closes the order and hands the summary to the
//!   [`ArchiveGateway`]
//!
//! [`FulfillmentWorkflow`] wires the four together for the host to
//! dispatch through. [`SingleActionHandler`] is the minimal handler shape
//! for stages that carry no order state of their own.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use fulfillment_stages::{FulfillmentWorkflow, MemoryArchive, StageHandler};
//! use fulfillment_types::{OrderId, OrderRecord, Stage, Task};
//!
//! let archive = Arc::new(MemoryArchive::new());
//! let workflow = FulfillmentWorkflow::new(archive.clone());
//!
//! let handler = workflow.handler_for(Stage::Check).unwrap();
//! let mut task = Task::new(Stage::Check, OrderRecord::new(OrderId::new("A-1")));
//!
//! handler.on_task_create(&mut task).unwrap();
//! task.complete("manager_confirm", HashMap::new()).unwrap();
//! handler.on_task_complete(&mut task).unwrap();
//!
//! let record = task.into_record();
//! assert_eq!(record.status(), Stage::Check.entry_status());
//! ```

#![deny(unsafe_code)]

mod archive;
mod check;
mod close;
mod deliver;
mod pack;
mod registry;
mod single_action;
mod traits;

pub use archive::MemoryArchive;
pub use check::CheckHandler;
pub use close::CloseScript;
pub use deliver::DeliverHandler;
pub use pack::PackHandler;
pub use registry::FulfillmentWorkflow;
pub use single_action::SingleActionHandler;
pub use traits::{ArchiveGateway, ProcessScript, StageHandler};
