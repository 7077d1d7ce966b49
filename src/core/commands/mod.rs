//! Command execution.
//!
//! Parsed [`Command`](crate::core::Command)s run through
//! [`execute_command`] against the navigation state and the disk adapter.
//! Commands needing a yes/no answer return [`Effect::Confirm`]; the answer
//! is fed back through [`resolve_pending`].

mod execute;
mod result;

pub use execute::{execute_command, resolve_pending};
pub use result::{CommandResult, Confirmation, Effect, PendingAction};
