//! # Signal Core Library
//!
//! Turns signals from the trading system into ordered calls on an [`trading::Algo`].
//!
//! ## Modules
//! - `action`: The closed action registry and the action descriptor grammar.
//! - `dispatch`: The signal dispatcher (`SignalHandler` implementation).
//! - `config`: Signal → action list providers (in-memory and JSON file).
//! - `api`: HTTP endpoint receiving signals.
//! - `args`: Command-line arguments shared by gateway binaries.

pub mod action;
pub mod api;
pub mod args;
pub mod config;
pub mod dispatch;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use action::{Action, ActionDescriptor};
pub use config::{SignalActions, SignalConfig};
pub use dispatch::SignalDispatcher;
