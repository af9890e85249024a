//! Runtime orchestration for shrine triggers.
//!
//! The host owns the world and the tick loop. This crate owns the recipe store
//! for one world load and turns a trigger event into an executed action tree:
//! lookup, protection gate, context construction, execution.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts [`ShrineRuntime`] and store (re)loading
//! - [`event`] defines what the host reports and what it gets back
//! - [`error`] covers failures while assembling the runtime
pub mod error;
pub mod event;
pub mod runtime;

pub use error::{Result, RuntimeError};
pub use event::{FireOutcome, TriggerEvent};
pub use runtime::ShrineRuntime;
