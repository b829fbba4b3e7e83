//! Single-check primitives that decide the verdict of the whole test.
//!
//! Each method only evaluates and reports; the `assert_*!` macros are what
//! return the verdict from the enclosing test function. A test therefore runs
//! at most one assertion.

use std::panic::Location;

use crate::check::{Comparison, Exprs};
use crate::harness::Harness;
use crate::verdict::Verdict;

impl Harness {
    #[track_caller]
    fn conclude_assertion(&mut self, holds: bool, comparison: Comparison, exprs: Exprs) -> Verdict {
        self.require_output();
        if holds {
            return Verdict::Pass;
        }
        let at = Location::caller();
        self.fail(format_args!(
            "    fail {}:{}\n     reason: {}\n",
            at.file(),
            at.line(),
            comparison.reason(exprs)
        ));
        tracing::debug!(file = at.file(), line = at.line(), ?comparison, "assertion failed");
        Verdict::Fail
    }

    #[track_caller]
    #[must_use]
    pub fn assert_equal<A, B>(&mut self, lhs: &A, rhs: &B, exprs: Exprs) -> Verdict
    where
        A: PartialEq<B> + ?Sized,
        B: ?Sized,
    {
        self.conclude_assertion(lhs == rhs, Comparison::Equal, exprs)
    }

    #[track_caller]
    #[must_use]
    pub fn assert_not_equal<A, B>(&mut self, lhs: &A, rhs: &B, exprs: Exprs) -> Verdict
    where
        A: PartialEq<B> + ?Sized,
        B: ?Sized,
    {
        self.conclude_assertion(lhs != rhs, Comparison::NotEqual, exprs)
    }

    #[track_caller]
    #[must_use]
    pub fn assert_greater_than<A, B>(&mut self, lhs: &A, rhs: &B, exprs: Exprs) -> Verdict
    where
        A: PartialOrd<B> + ?Sized,
        B: ?Sized,
    {
        self.conclude_assertion(lhs > rhs, Comparison::GreaterThan, exprs)
    }

    #[track_caller]
    #[must_use]
    pub fn assert_less_than<A, B>(&mut self, lhs: &A, rhs: &B, exprs: Exprs) -> Verdict
    where
        A: PartialOrd<B> + ?Sized,
        B: ?Sized,
    {
        self.conclude_assertion(lhs < rhs, Comparison::LessThan, exprs)
    }

    #[track_caller]
    #[must_use]
    pub fn assert_greater_than_or_equal<A, B>(&mut self, lhs: &A, rhs: &B, exprs: Exprs) -> Verdict
    where
        A: PartialOrd<B> + ?Sized,
        B: ?Sized,
    {
        self.conclude_assertion(lhs >= rhs, Comparison::GreaterThanOrEqual, exprs)
    }

    #[track_caller]
    #[must_use]
    pub fn assert_less_than_or_equal<A, B>(&mut self, lhs: &A, rhs: &B, exprs: Exprs) -> Verdict
    where
        A: PartialOrd<B> + ?Sized,
        B: ?Sized,
    {
        self.conclude_assertion(lhs <= rhs, Comparison::LessThanOrEqual, exprs)
    }

    #[track_caller]
    #[must_use]
    pub fn assert_null<T>(&mut self, value: &Option<T>, exprs: Exprs) -> Verdict {
        self.conclude_assertion(value.is_none(), Comparison::Null, exprs)
    }

    #[track_caller]
    #[must_use]
    pub fn assert_not_null<T>(&mut self, value: &Option<T>, exprs: Exprs) -> Verdict {
        self.conclude_assertion(value.is_some(), Comparison::NotNull, exprs)
    }

    /// Byte-wise string equality.
    #[track_caller]
    #[must_use]
    pub fn assert_string_equal<A, B>(&mut self, lhs: &A, rhs: &B, exprs: Exprs) -> Verdict
    where
        A: AsRef<str> + ?Sized,
        B: AsRef<str> + ?Sized,
    {
        let holds = lhs.as_ref().as_bytes() == rhs.as_ref().as_bytes();
        self.conclude_assertion(holds, Comparison::StringEqual, exprs)
    }

    #[track_caller]
    #[must_use]
    pub fn assert_string_not_equal<A, B>(&mut self, lhs: &A, rhs: &B, exprs: Exprs) -> Verdict
    where
        A: AsRef<str> + ?Sized,
        B: AsRef<str> + ?Sized,
    {
        let holds = lhs.as_ref().as_bytes() != rhs.as_ref().as_bytes();
        self.conclude_assertion(holds, Comparison::StringNotEqual, exprs)
    }

    #[track_caller]
    #[must_use]
    pub fn assert_true(&mut self, condition: bool, exprs: Exprs) -> Verdict {
        self.conclude_assertion(condition, Comparison::True, exprs)
    }

    #[track_caller]
    #[must_use]
    pub fn assert_false(&mut self, condition: bool, exprs: Exprs) -> Verdict {
        self.conclude_assertion(!condition, Comparison::False, exprs)
    }

    /// Asks the operator; a `y` answer passes.
    #[must_use]
    pub fn assert_manual(&mut self) -> Verdict {
        Verdict::from(self.manual_judgment())
    }

    #[track_caller]
    #[must_use]
    pub fn assert_fail(&mut self) -> Verdict {
        let at = Location::caller();
        self.fail(format_args!("    Forced fail {}:{}\n", at.file(), at.line()));
        Verdict::Fail
    }

    #[must_use]
    pub fn assert_pass(&mut self) -> Verdict {
        self.pass(format_args!("    Forced pass\n"));
        Verdict::Pass
    }

    /// Turns the assessments recorded so far into the test verdict and
    /// re-arms the test flag.
    #[must_use]
    pub fn assert_passed_all_assessments(&mut self) -> Verdict {
        self.require_output();
        if self.state.test_pass() {
            self.pass(format_args!("    all assessments passed.\n"));
            return Verdict::Pass;
        }
        self.fail(format_args!("    Some assessments failed\n"));
        self.state.reset_test();
        Verdict::Fail
    }

    /// Prompts `pass? y/n: ` and reads the answer, skipping blank lines.
    /// End of input counts as a `no`.
    pub(crate) fn manual_judgment(&mut self) -> bool {
        self.require_output();
        self.info(format_args!("pass? y/n: "));
        let answer = self.read_answer();
        if self.colors_enabled() {
            self.info(format_args!("\x1b[A\r"));
        }
        answer
    }

    fn read_answer(&mut self) -> bool {
        loop {
            let mut line = String::new();
            match self.input().read_line(&mut line) {
                Ok(0) | Err(_) => return false,
                Ok(_) => {
                    let answer = line.trim_end_matches(['\r', '\n']);
                    if answer.is_empty() {
                        continue;
                    }
                    return answer.starts_with('y');
                }
            }
        }
    }
}
