//! Test doubles for the `Algo` capability.
//!
//! Compiled for unit tests and behind the `test-utils` feature for
//! integration tests.

use std::sync::{Mutex, MutexGuard, PoisonError};
use trading::Algo;

/// One recorded call on the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgoCall {
    DoAlgo,
    CancelTrades,
    Reverse,
    SubmitToMarket,
    PerformCalc,
    SetUp,
    SetAlgoParam(i32, i32),
}

/// An `Algo` that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingAlgo {
    calls: Mutex<Vec<AlgoCall>>,
}

impl RecordingAlgo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every call recorded so far.
    pub fn calls(&self) -> Vec<AlgoCall> {
        self.lock().clone()
    }

    /// Returns how many times `call` was recorded.
    pub fn count(&self, call: AlgoCall) -> usize {
        self.lock().iter().filter(|c| **c == call).count()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn record(&self, call: AlgoCall) {
        self.lock().push(call);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<AlgoCall>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Algo for RecordingAlgo {
    fn do_algo(&self) {
        self.record(AlgoCall::DoAlgo);
    }

    fn cancel_trades(&self) {
        self.record(AlgoCall::CancelTrades);
    }

    fn reverse(&self) {
        self.record(AlgoCall::Reverse);
    }

    fn submit_to_market(&self) {
        self.record(AlgoCall::SubmitToMarket);
    }

    fn perform_calc(&self) {
        self.record(AlgoCall::PerformCalc);
    }

    fn set_up(&self) {
        self.record(AlgoCall::SetUp);
    }

    fn set_algo_param(&self, param: i32, value: i32) {
        self.record(AlgoCall::SetAlgoParam(param, value));
    }
}
