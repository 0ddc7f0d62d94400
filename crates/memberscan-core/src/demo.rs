//! The two-line membership demonstration.
//!
//! Builds `[1, 2, 3]` once as `i64` and once as `f64`, checks each for `1`,
//! and writes one boolean per line in that order.

use crate::core::error::{MembershipError, Result};
use crate::core::membership::contains;
use crate::core::sequence::Sequence;
use crate::core::types::Numeric;
use std::io::Write;
use tracing::debug;

/// Integer literals every demonstration sequence is built from.
pub const DEMO_LITERALS: [i64; 3] = [1, 2, 3];

/// Integer literal every demonstration target is built from.
pub const DEMO_TARGET: i64 = 1;

/// Outcome of one membership check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Element type name (`i64`, `f64`, ...)
    pub element_type: &'static str,
    /// Rendered sequence, e.g. `[1, 2, 3]`
    pub sequence: String,
    /// Rendered target
    pub target: String,
    /// Whether the target was found
    pub found: bool,
}

/// Outcomes of a demonstration run, in invocation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoReport {
    /// One entry per check.
    pub outcomes: Vec<CheckOutcome>,
}

impl DemoReport {
    /// Whether every check found its target.
    pub fn all_found(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.found)
    }
}

/// Run one check for element type `T` and record its outcome.
pub fn check<T: Numeric>(literals: &[i64], target: i64) -> Result<CheckOutcome> {
    let sequence = Sequence::<T>::from_literals(literals)?;
    let target = T::try_from_i64(target)
        .ok_or_else(|| MembershipError::conversion(target, T::type_label()))?;
    let found = contains(sequence.as_slice(), &target);

    debug!(
        element_type = T::type_label(),
        sequence = %sequence,
        target = %target,
        found,
        "membership check"
    );

    Ok(CheckOutcome {
        element_type: T::type_label(),
        sequence: sequence.to_string(),
        target: target.to_string(),
        found,
    })
}

/// Run the demonstration, writing one result per line to `out`.
pub fn run<W: Write>(out: &mut W) -> Result<DemoReport> {
    let outcomes = vec![
        check::<i64>(&DEMO_LITERALS, DEMO_TARGET)?,
        check::<f64>(&DEMO_LITERALS, DEMO_TARGET)?,
    ];

    for outcome in &outcomes {
        writeln!(out, "{}", outcome.found)?;
    }
    out.flush()?;

    Ok(DemoReport { outcomes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_output() {
        let mut out = Vec::new();
        let report = run(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "true\ntrue\n");
        assert!(report.all_found());
    }

    #[test]
    fn test_run_report() {
        let report = run(&mut Vec::new()).unwrap();

        assert_eq!(
            report.outcomes,
            vec![
                CheckOutcome {
                    element_type: "i64",
                    sequence: "[1, 2, 3]".to_string(),
                    target: "1".to_string(),
                    found: true,
                },
                CheckOutcome {
                    element_type: "f64",
                    sequence: "[1, 2, 3]".to_string(),
                    target: "1".to_string(),
                    found: true,
                },
            ]
        );
    }

    #[test]
    fn test_check_absent_target() {
        let outcome = check::<i64>(&DEMO_LITERALS, 4).unwrap();
        assert!(!outcome.found);

        let outcome = check::<f64>(&[], 5).unwrap();
        assert!(!outcome.found);
        assert_eq!(outcome.sequence, "[]");
    }

    #[test]
    fn test_check_conversion_failure() {
        let err = check::<u8>(&DEMO_LITERALS, -1).unwrap_err();
        assert!(matches!(err, MembershipError::Conversion { .. }));
    }

    #[test]
    fn test_run_write_failure() {
        let err = run(&mut FailingWriter).unwrap_err();
        assert!(matches!(err, MembershipError::Output { .. }));
    }
}
