//! Contracts shared between the signal dispatcher and the systems around it.
//!
//! The trading algorithm (`Algo`) and the inbound signal upcall
//! (`SignalHandler`) are owned by external collaborators; this crate only
//! fixes their shape so the dispatcher and its transports can agree on it.

pub mod error;
pub mod traits;

pub use error::{ErrorKind, SignalError};
pub use traits::algo::Algo;
pub use traits::signal_handler::SignalHandler;

pub mod prelude {
    pub use crate::error::{ErrorKind, SignalError};
    pub use crate::traits::algo::Algo;
    pub use crate::traits::signal_handler::SignalHandler;
}
