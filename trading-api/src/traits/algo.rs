//! Defines the `Algo` trait, the fixed capability set of the trading algorithm.
//!
//! The algorithm itself lives outside this workspace. Signal handling only
//! ever calls into it through these methods, so adding a new operation means
//! adding a method here and a matching registry entry in the dispatcher.

/// The trading algorithm as seen by the signal dispatcher.
///
/// Methods take `&self` because a single algorithm instance is shared by every
/// in-flight signal. Implementors own their synchronization.
///
/// # Examples
///
/// ```
/// use trading::Algo;
///
/// struct Noop;
///
/// impl Algo for Noop {
///     fn do_algo(&self) {}
///     fn cancel_trades(&self) {}
///     fn reverse(&self) {}
///     fn submit_to_market(&self) {}
///     fn perform_calc(&self) {}
///     fn set_up(&self) {}
///     fn set_algo_param(&self, _param: i32, _value: i32) {}
/// }
/// ```
pub trait Algo: Send + Sync {
    /// Runs the algorithm's main step.
    fn do_algo(&self);

    /// Cancels every open trade.
    fn cancel_trades(&self);

    /// Reverses the current position.
    fn reverse(&self);

    /// Submits pending orders to the market.
    fn submit_to_market(&self);

    /// Recomputes the algorithm's internal figures.
    fn perform_calc(&self);

    /// Prepares the algorithm for a new run.
    fn set_up(&self);

    /// Sets a numbered algorithm parameter.
    ///
    /// # Arguments
    ///
    /// * `param` - The parameter number.
    /// * `value` - The new value.
    fn set_algo_param(&self, param: i32, value: i32);
}
