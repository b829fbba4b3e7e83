//! Checks on the arithmetic exception flags.
//!
//! Both probes compare the *whole* raised set against the expected kind. If an
//! earlier operation latched an extra flag (say `INEXACT`), expecting
//! `DIVIDE_BY_ZERO` alone fails even though the division did signal it.
//! Clear the latch before the operation under test when that matters.

use std::panic::Location;

use crate::fenv::ExceptionFlags;
use crate::harness::Harness;
use crate::verdict::Verdict;

impl Harness {
    /// Passes iff the raised flags equal `kind` exactly.
    #[track_caller]
    #[must_use]
    pub fn expect_exception(&mut self, kind: ExceptionFlags, expr: &str) -> Verdict {
        self.require_output();
        let raised = self.exceptions().raised();
        tracing::debug!(%raised, expected = %kind, "probing exception flags");
        if raised == kind {
            return Verdict::Pass;
        }
        let at = Location::caller();
        self.fail(format_args!(
            "     fail {}:{}\n     reason: didn't throw {}\n",
            at.file(),
            at.line(),
            expr
        ));
        Verdict::Fail
    }

    /// Passes iff the raised flags are anything other than exactly `kind`.
    #[track_caller]
    #[must_use]
    pub fn expect_exception_not_thrown(&mut self, kind: ExceptionFlags, expr: &str) -> Verdict {
        self.require_output();
        let raised = self.exceptions().raised();
        if raised != kind {
            return Verdict::Pass;
        }
        let at = Location::caller();
        self.fail(format_args!(
            "     fail {}:{}\n     reason: threw {}\n",
            at.file(),
            at.line(),
            expr
        ));
        Verdict::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fenv;
    use crate::sink::Capture;

    fn harness() -> (Harness, Capture) {
        let capture = Capture::plain();
        (Harness::with_sink(capture.sink()), capture)
    }

    #[test]
    fn matches_exact_flag_set() {
        let (mut h, out) = harness();
        h.set_exception_source(Box::new(ExceptionFlags::OVERFLOW));
        assert!(h.expect_exception(ExceptionFlags::OVERFLOW, "OVERFLOW").is_pass());
        assert!(h
            .expect_exception_not_thrown(ExceptionFlags::UNDERFLOW, "UNDERFLOW")
            .is_pass());
        assert_eq!(out.contents(), "");
    }

    #[test]
    fn superset_is_a_mismatch() {
        let (mut h, out) = harness();
        h.set_exception_source(Box::new(
            ExceptionFlags::DIVIDE_BY_ZERO | ExceptionFlags::INEXACT,
        ));
        assert!(h
            .expect_exception(ExceptionFlags::DIVIDE_BY_ZERO, "DIVIDE_BY_ZERO")
            .is_fail());
        assert!(out.contents().contains("     reason: didn't throw DIVIDE_BY_ZERO\n"));
    }

    #[test]
    fn not_thrown_fails_on_exact_match() {
        let (mut h, out) = harness();
        fenv::clear_except(ExceptionFlags::ALL);
        fenv::div(1.0f32, 0.0);
        assert!(h
            .expect_exception_not_thrown(ExceptionFlags::DIVIDE_BY_ZERO, "DIVIDE_BY_ZERO")
            .is_fail());
        assert!(out.contents().contains("     reason: threw DIVIDE_BY_ZERO\n"));
        fenv::clear_except(ExceptionFlags::ALL);
    }
}
