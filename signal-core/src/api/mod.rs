//! HTTP boundary for incoming signals.
//!
//! `POST /api/signal?signal=<int>` forwards to a [`trading::SignalHandler`]
//! and maps its outcome to a status code. The dispatch itself is synchronous
//! and runs on tokio's blocking pool.

pub mod server;

pub use server::{router, run_api_server, ApiState};
