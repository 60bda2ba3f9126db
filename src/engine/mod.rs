// src/engine/mod.rs

//! Decision-and-dispatch engine for fw.
//!
//! This module ties together:
//! - the change queue (filesystem events in, strict FIFO out)
//! - the dispatcher loop that reacts to:
//!   - changed paths (resolve policy, maybe run the pipeline)
//!   - shutdown signals

pub mod dispatcher;
pub mod queue;

pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use queue::{change_queue, ChangeReceiver, ChangeSender, QueueEvent};
