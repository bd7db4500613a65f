//! Outbound command channel used by the model sidebar.
//!
//! The sidebar never waits for an answer: every send is fire-and-forget.
//! A [`RemoteController`] accepts either plain text or a boxed
//! [`RemoteCommand`] object, and reports only whether the command was
//! handed over.
//!
//! [`RController`] is the concrete controller that writes raw command bytes
//! into a [`ClientSession`].

mod command;
mod controller;

pub use command::{RemoteCommand, TextCommand};
pub use controller::{ClientSession, RController, RemoteController};
