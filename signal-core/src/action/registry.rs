use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;
use trading::Algo;

/// Zero-argument operations that can be named in a signal's action list.
///
/// Each variant is bound to the identically named method on [`Algo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    DoAlgo,
    CancelTrades,
    Reverse,
    SubmitToMarket,
    PerformCalc,
    SetUp,
}

lazy_static! {
    /// Upper-cased action name to action, built once for the process.
    static ref ACTION_TABLE: HashMap<&'static str, Action> =
        Action::ALL.iter().map(|action| (action.name(), *action)).collect();
}

impl Action {
    /// Every registered action.
    pub const ALL: [Action; 6] = [
        Action::DoAlgo,
        Action::CancelTrades,
        Action::Reverse,
        Action::SubmitToMarket,
        Action::PerformCalc,
        Action::SetUp,
    ];

    /// Returns the canonical (upper-case) registry name.
    pub fn name(&self) -> &'static str {
        match self {
            Action::DoAlgo => "DOALGO",
            Action::CancelTrades => "CANCELTRADES",
            Action::Reverse => "REVERSE",
            Action::SubmitToMarket => "SUBMITTOMARKET",
            Action::PerformCalc => "PERFORMCALC",
            Action::SetUp => "SETUP",
        }
    }

    /// Looks up an action by name, ignoring case.
    ///
    /// # Arguments
    ///
    /// * `name` - The action name as written in the configuration.
    ///
    /// # Returns
    ///
    /// * `Some(Action)` if the name is registered.
    /// * `None` otherwise.
    pub fn from_name(name: &str) -> Option<Self> {
        ACTION_TABLE.get(name.to_uppercase().as_str()).copied()
    }

    /// Invokes the bound operation on the algorithm.
    pub fn apply(&self, algo: &dyn Algo) {
        match self {
            Action::DoAlgo => algo.do_algo(),
            Action::CancelTrades => algo.cancel_trades(),
            Action::Reverse => algo.reverse(),
            Action::SubmitToMarket => algo.submit_to_market(),
            Action::PerformCalc => algo.perform_calc(),
            Action::SetUp => algo.set_up(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{AlgoCall, RecordingAlgo};
    use std::collections::HashSet;

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(Action::from_name("DOALGO"), Some(Action::DoAlgo));
        assert_eq!(Action::from_name("doalgo"), Some(Action::DoAlgo));
        assert_eq!(Action::from_name("doAlgo"), Some(Action::DoAlgo));
        assert_eq!(Action::from_name("submitToMarket"), Some(Action::SubmitToMarket));
        assert_eq!(Action::from_name("setUp"), Some(Action::SetUp));
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert_eq!(Action::from_name("bogusAction"), None);
        assert_eq!(Action::from_name(""), None);
        assert_eq!(Action::from_name(" doalgo"), None);
    }

    #[test]
    fn test_names_are_unique_and_resolve_to_themselves() {
        let names: HashSet<_> = Action::ALL.iter().map(Action::name).collect();
        assert_eq!(names.len(), Action::ALL.len());

        for action in Action::ALL {
            assert_eq!(Action::from_name(action.name()), Some(action));
            assert_eq!(action.to_string(), action.name());
        }
    }

    #[test]
    fn test_apply_calls_bound_operation() {
        let algo = RecordingAlgo::new();
        for action in Action::ALL {
            action.apply(&algo);
        }

        assert_eq!(
            algo.calls(),
            vec![
                AlgoCall::DoAlgo,
                AlgoCall::CancelTrades,
                AlgoCall::Reverse,
                AlgoCall::SubmitToMarket,
                AlgoCall::PerformCalc,
                AlgoCall::SetUp,
            ]
        );
    }
}
