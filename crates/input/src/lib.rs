//! Input adapter: raw key-down events translated into discrete lane actions.
//!
//! # Invariants
//! - The game consumes [`Action`]s, never raw key events.
//! - Listeners are invoked synchronously and in registration order.
//! - Unsubscribing is idempotent.

pub mod action;
pub mod keymap;
pub mod source;

pub use action::{Action, ParseActionError};
pub use keymap::{Key, action_for_key};
pub use source::{KeyboardSource, Subscription, install_input};

pub fn crate_info() -> &'static str {
    "laneswitch-input v0.1.0"
}
