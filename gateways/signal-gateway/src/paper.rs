use log::info;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use trading::Algo;

/// An `Algo` that only logs what it is asked to do.
///
/// Keeps the last value of every parameter and counts main algorithm runs so
/// the gateway can be exercised end to end without a market connection.
#[derive(Debug, Default)]
pub struct PaperAlgo {
    params: Mutex<HashMap<i32, i32>>,
    runs: AtomicU64,
}

impl PaperAlgo {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn param(&self, param: i32) -> Option<i32> {
        self.params
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&param)
            .copied()
    }

    #[cfg(test)]
    pub fn runs(&self) -> u64 {
        self.runs.load(Ordering::Relaxed)
    }
}

impl Algo for PaperAlgo {
    fn do_algo(&self) {
        let run = self.runs.fetch_add(1, Ordering::Relaxed) + 1;
        info!("[paper] doAlgo (run #{})", run);
    }

    fn cancel_trades(&self) {
        info!("[paper] cancelTrades");
    }

    fn reverse(&self) {
        info!("[paper] reverse");
    }

    fn submit_to_market(&self) {
        info!("[paper] submitToMarket");
    }

    fn perform_calc(&self) {
        info!("[paper] performCalc");
    }

    fn set_up(&self) {
        info!("[paper] setUp");
    }

    fn set_algo_param(&self, param: i32, value: i32) {
        let previous = self
            .params
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(param, value);
        info!(
            "[paper] setAlgoParam({}, {}) (was {:?})",
            param, value, previous
        );
    }
}
