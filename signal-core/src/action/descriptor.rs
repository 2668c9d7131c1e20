//! Parsing of configured action strings.
//!
//! An action descriptor is either a bare registry name (`"performCalc"`) or a
//! parameter assignment following
//!
//! ```text
//! "setAlgoParam" WS* "(" WS* INT WS* "," WS* INT WS* ")" WS*
//! INT := "-"? DIGIT+
//! ```
//!
//! Anything starting with `setAlgoParam` that deviates from this grammar is a
//! configuration error, never an unknown action.

use std::fmt;
use std::str::FromStr;
use trading::{Algo, SignalError};

use super::registry::Action;

/// Literal prefix that selects the parameterized form.
pub const SET_ALGO_PARAM: &str = "setAlgoParam";

/// A parsed, executable action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionDescriptor {
    /// A zero-argument registry action.
    Simple(Action),
    /// `setAlgoParam(param, value)`.
    SetAlgoParam { param: i32, value: i32 },
}

impl ActionDescriptor {
    /// Parses one configured action string.
    ///
    /// # Arguments
    ///
    /// * `raw` - The descriptor exactly as configured.
    ///
    /// # Returns
    ///
    /// * `Ok(ActionDescriptor)` on success.
    /// * `Err(SignalError::Configuration)` for a malformed `setAlgoParam`.
    /// * `Err(SignalError::UnknownAction)` for a name missing from the registry.
    pub fn parse(raw: &str) -> Result<Self, SignalError> {
        match raw.strip_prefix(SET_ALGO_PARAM) {
            Some(args) => parse_param_args(args)
                .map(|(param, value)| ActionDescriptor::SetAlgoParam { param, value })
                .ok_or_else(|| SignalError::Configuration(raw.to_string())),
            None => Action::from_name(raw)
                .map(ActionDescriptor::Simple)
                .ok_or_else(|| SignalError::UnknownAction(raw.to_string())),
        }
    }

    /// Invokes this action on the algorithm.
    pub fn execute(&self, algo: &dyn Algo) {
        match *self {
            ActionDescriptor::Simple(action) => action.apply(algo),
            ActionDescriptor::SetAlgoParam { param, value } => algo.set_algo_param(param, value),
        }
    }
}

impl FromStr for ActionDescriptor {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionDescriptor::parse(s)
    }
}

impl fmt::Display for ActionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionDescriptor::Simple(action) => write!(f, "{}", action),
            ActionDescriptor::SetAlgoParam { param, value } => {
                write!(f, "{}({}, {})", SET_ALGO_PARAM, param, value)
            }
        }
    }
}

/// Parses `( INT , INT )` with optional whitespace around every token.
fn parse_param_args(args: &str) -> Option<(i32, i32)> {
    let mut cursor = ArgCursor { rest: args };
    cursor.expect('(')?;
    let param = cursor.int()?;
    cursor.expect(',')?;
    let value = cursor.int()?;
    cursor.expect(')')?;
    cursor.finish()?;
    Some((param, value))
}

struct ArgCursor<'a> {
    rest: &'a str,
}

impl ArgCursor<'_> {
    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn expect(&mut self, token: char) -> Option<()> {
        self.skip_whitespace();
        self.rest = self.rest.strip_prefix(token)?;
        Some(())
    }

    fn int(&mut self) -> Option<i32> {
        self.skip_whitespace();
        let sign = usize::from(self.rest.starts_with('-'));
        let digits = self.rest[sign..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 {
            return None;
        }
        let (token, rest) = self.rest.split_at(sign + digits);
        self.rest = rest;
        // Overflow fails here too.
        token.parse().ok()
    }

    fn finish(mut self) -> Option<()> {
        self.skip_whitespace();
        self.rest.is_empty().then_some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{AlgoCall, RecordingAlgo};

    fn assert_malformed(raw: &str) {
        assert_eq!(
            ActionDescriptor::parse(raw),
            Err(SignalError::Configuration(raw.to_string())),
            "expected {:?} to be rejected",
            raw
        );
    }

    #[test]
    fn test_parse_simple_action() {
        assert_eq!(
            ActionDescriptor::parse("performCalc"),
            Ok(ActionDescriptor::Simple(Action::PerformCalc))
        );
        assert_eq!(
            "DOALGO".parse::<ActionDescriptor>(),
            "doalgo".parse::<ActionDescriptor>()
        );
    }

    #[test]
    fn test_parse_set_algo_param() {
        let expected = ActionDescriptor::SetAlgoParam { param: 1, value: 60 };
        assert_eq!(ActionDescriptor::parse("setAlgoParam(1, 60)"), Ok(expected));
        assert_eq!(ActionDescriptor::parse("setAlgoParam(1,60)"), Ok(expected));
        assert_eq!(
            ActionDescriptor::parse("setAlgoParam ( 1 ,\t60 ) "),
            Ok(expected)
        );
        assert_eq!(
            ActionDescriptor::parse("setAlgoParam(-3, 0)"),
            Ok(ActionDescriptor::SetAlgoParam { param: -3, value: 0 })
        );
    }

    #[test]
    fn test_malformed_set_algo_param() {
        assert_malformed("setAlgoParam(180)");
        assert_malformed("setAlgoParam(180");
        assert_malformed("setAlgoParam(180, \"a\")");
        assert_malformed("setAlgoParam(1, 2, 3)");
        assert_malformed("setAlgoParam(, 2)");
        assert_malformed("setAlgoParam(1, )");
        assert_malformed("setAlgoParam");
        assert_malformed("setAlgoParam()");
        assert_malformed("setAlgoParam1, 2");
        assert_malformed("setAlgoParam(1, 2) extra");
        assert_malformed("setAlgoParam(1 2)");
        assert_malformed("setAlgoParam(- 1, 2)");
        assert_malformed("setAlgoParam(1, 99999999999)");
    }

    #[test]
    fn test_unknown_action() {
        let err = ActionDescriptor::parse("bogusAction").unwrap_err();
        assert_eq!(err, SignalError::UnknownAction("bogusAction".into()));
        assert!(err.to_string().contains("bogusAction"));

        // The parameterized prefix is case-sensitive.
        assert_eq!(
            ActionDescriptor::parse("setalgoparam(1, 2)"),
            Err(SignalError::UnknownAction("setalgoparam(1, 2)".into()))
        );
    }

    #[test]
    fn test_execute_and_display() {
        let algo = RecordingAlgo::new();
        let param = ActionDescriptor::parse("setAlgoParam(2,80)").unwrap();
        let simple = ActionDescriptor::parse("reverse").unwrap();

        param.execute(&algo);
        simple.execute(&algo);

        assert_eq!(
            algo.calls(),
            vec![AlgoCall::SetAlgoParam(2, 80), AlgoCall::Reverse]
        );
        assert_eq!(param.to_string(), "setAlgoParam(2, 80)");
        assert_eq!(simple.to_string(), "REVERSE");
    }
}
