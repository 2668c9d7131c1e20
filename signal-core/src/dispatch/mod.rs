//! The signal dispatcher.
//!
//! For every signal the dispatcher walks the configured action list left to
//! right, then always runs `cancel_trades` followed by `do_algo`. The first
//! failing action aborts the rest of the list; the defaults still run and the
//! error is returned afterwards.

use log::{debug, error, info};
use std::sync::Arc;
use trading::{Algo, SignalError, SignalHandler};

use crate::action::ActionDescriptor;
use crate::config::SignalConfig;

/// Resolves signals to action lists and runs them against an [`Algo`].
///
/// Holds no per-call state, so one instance can serve concurrent signals.
pub struct SignalDispatcher {
    algo: Arc<dyn Algo>,
    config: Arc<dyn SignalConfig>,
}

impl SignalDispatcher {
    /// Creates a new dispatcher.
    ///
    /// # Arguments
    ///
    /// * `algo` - The shared trading algorithm.
    /// * `config` - Provider of the signal → actions map, read on every signal.
    pub fn new(algo: Arc<dyn Algo>, config: Arc<dyn SignalConfig>) -> Self {
        Self { algo, config }
    }

    /// Parses and runs a single action descriptor.
    ///
    /// # Returns
    ///
    /// * `Ok(())` once the operation has been invoked.
    /// * `Err(SignalError)` if the descriptor is malformed or unknown; nothing
    ///   is invoked on the algorithm in that case.
    pub fn execute_action(&self, descriptor: &str) -> Result<(), SignalError> {
        let action = ActionDescriptor::parse(descriptor)?;
        debug!("Executing action {}", action);
        action.execute(self.algo.as_ref());
        Ok(())
    }

    fn run_actions(&self, actions: &[String]) -> Result<(), SignalError> {
        actions
            .iter()
            .try_for_each(|descriptor| self.execute_action(descriptor))
    }

    fn run_defaults(&self) {
        self.algo.cancel_trades();
        self.algo.do_algo();
    }
}

impl SignalHandler for SignalDispatcher {
    fn handle_signal(&self, signal: i32) -> Result<(), SignalError> {
        debug!("Received signal: {}", signal);

        let snapshot = self.config.signal_actions();
        let outcome = match snapshot.get(&signal.to_string()) {
            Some(actions) => self.run_actions(actions),
            None => {
                info!("Signal {} is not configured, running defaults only", signal);
                Ok(())
            }
        };

        self.run_defaults();

        match &outcome {
            Ok(()) => debug!("Finished handling signal: {}", signal),
            Err(e) => error!(
                "Signal {} aborted at '{}': {}",
                signal,
                e.descriptor(),
                e
            ),
        }
        outcome
    }
}
