use crate::error::SignalError;

/// Upcall invoked by the trading system whenever a signal arrives.
///
/// The transport in front of the handler has already checked that the signal
/// is a well-formed integer.
pub trait SignalHandler: Send + Sync {
    /// Handles one signal.
    ///
    /// # Arguments
    ///
    /// * `signal` - The signal identifier.
    ///
    /// # Returns
    ///
    /// * `Ok(())` once every configured action and the default actions ran.
    /// * `Err(SignalError)` if a configured action could not be resolved.
    fn handle_signal(&self, signal: i32) -> Result<(), SignalError>;
}

impl SignalHandler for Box<dyn SignalHandler> {
    fn handle_signal(&self, signal: i32) -> Result<(), SignalError> {
        (**self).handle_signal(signal)
    }
}
