//! Checks that record their outcome and let the test keep going.
//!
//! A failing assessment clears the test flag; the test then ends with
//! `assert_passed_all_assessments!` to turn the collected outcome into its
//! verdict.

use std::panic::Location;

use crate::check::{Comparison, Exprs};
use crate::harness::Harness;
use crate::verdict::Verdict;

impl Harness {
    #[track_caller]
    fn record_assessment(&mut self, holds: bool, comparison: Comparison, exprs: Exprs) -> Verdict {
        if holds {
            self.pass(format_args!(
                "    assessment pass {}\n",
                comparison.description(exprs)
            ));
            return Verdict::Pass;
        }
        let at = Location::caller();
        self.fail(format_args!(
            "    assessment fail {}:{}\n     reason: {}\n",
            at.file(),
            at.line(),
            comparison.reason(exprs)
        ));
        self.state.fail_assessment();
        Verdict::Fail
    }

    #[track_caller]
    pub fn assess_equal<A, B>(&mut self, lhs: &A, rhs: &B, exprs: Exprs) -> Verdict
    where
        A: PartialEq<B> + ?Sized,
        B: ?Sized,
    {
        self.record_assessment(lhs == rhs, Comparison::Equal, exprs)
    }

    #[track_caller]
    pub fn assess_not_equal<A, B>(&mut self, lhs: &A, rhs: &B, exprs: Exprs) -> Verdict
    where
        A: PartialEq<B> + ?Sized,
        B: ?Sized,
    {
        self.record_assessment(lhs != rhs, Comparison::NotEqual, exprs)
    }

    #[track_caller]
    pub fn assess_greater_than<A, B>(&mut self, lhs: &A, rhs: &B, exprs: Exprs) -> Verdict
    where
        A: PartialOrd<B> + ?Sized,
        B: ?Sized,
    {
        self.record_assessment(lhs > rhs, Comparison::GreaterThan, exprs)
    }

    #[track_caller]
    pub fn assess_less_than<A, B>(&mut self, lhs: &A, rhs: &B, exprs: Exprs) -> Verdict
    where
        A: PartialOrd<B> + ?Sized,
        B: ?Sized,
    {
        self.record_assessment(lhs < rhs, Comparison::LessThan, exprs)
    }

    #[track_caller]
    pub fn assess_greater_than_or_equal<A, B>(&mut self, lhs: &A, rhs: &B, exprs: Exprs) -> Verdict
    where
        A: PartialOrd<B> + ?Sized,
        B: ?Sized,
    {
        self.record_assessment(lhs >= rhs, Comparison::GreaterThanOrEqual, exprs)
    }

    #[track_caller]
    pub fn assess_less_than_or_equal<A, B>(&mut self, lhs: &A, rhs: &B, exprs: Exprs) -> Verdict
    where
        A: PartialOrd<B> + ?Sized,
        B: ?Sized,
    {
        self.record_assessment(lhs <= rhs, Comparison::LessThanOrEqual, exprs)
    }

    #[track_caller]
    pub fn assess_null<T>(&mut self, value: &Option<T>, exprs: Exprs) -> Verdict {
        self.record_assessment(value.is_none(), Comparison::Null, exprs)
    }

    #[track_caller]
    pub fn assess_not_null<T>(&mut self, value: &Option<T>, exprs: Exprs) -> Verdict {
        self.record_assessment(value.is_some(), Comparison::NotNull, exprs)
    }

    #[track_caller]
    pub fn assess_string_equal<A, B>(&mut self, lhs: &A, rhs: &B, exprs: Exprs) -> Verdict
    where
        A: AsRef<str> + ?Sized,
        B: AsRef<str> + ?Sized,
    {
        let holds = lhs.as_ref().as_bytes() == rhs.as_ref().as_bytes();
        self.record_assessment(holds, Comparison::StringEqual, exprs)
    }

    #[track_caller]
    pub fn assess_string_not_equal<A, B>(&mut self, lhs: &A, rhs: &B, exprs: Exprs) -> Verdict
    where
        A: AsRef<str> + ?Sized,
        B: AsRef<str> + ?Sized,
    {
        let holds = lhs.as_ref().as_bytes() != rhs.as_ref().as_bytes();
        self.record_assessment(holds, Comparison::StringNotEqual, exprs)
    }

    #[track_caller]
    pub fn assess_true(&mut self, condition: bool, exprs: Exprs) -> Verdict {
        self.record_assessment(condition, Comparison::True, exprs)
    }

    #[track_caller]
    pub fn assess_false(&mut self, condition: bool, exprs: Exprs) -> Verdict {
        self.record_assessment(!condition, Comparison::False, exprs)
    }

    pub fn assess_manual(&mut self) -> Verdict {
        if self.manual_judgment() {
            self.pass(format_args!("    assessment pass\n"));
            return Verdict::Pass;
        }
        self.fail(format_args!("    assessment fail\n"));
        self.state.fail_assessment();
        Verdict::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Capture;
    use std::io::Cursor;

    #[test]
    fn passing_assessment_prints_description() {
        let capture = Capture::plain();
        let mut h = Harness::with_sink(capture.sink());
        h.assess_equal(&1, &1, Exprs::pair("one", "1"));
        h.assess_true(true, Exprs::single("ready"));
        h.assess_not_null(&Some(2), Exprs::single("slot"));
        assert_eq!(
            capture.contents(),
            "    assessment pass one == 1\n    assessment pass ready\n    assessment pass slot != NULL\n"
        );
        assert!(h.state().test_pass());
    }

    #[test]
    fn failing_assessment_clears_test_flag_and_continues() {
        let capture = Capture::plain();
        let mut h = Harness::with_sink(capture.sink());
        h.assess_greater_than(&1, &2, Exprs::pair("low", "high"));
        assert!(!h.state().test_pass());
        h.assess_less_than(&1, &2, Exprs::pair("low", "high"));
        assert!(!h.state().test_pass(), "a later pass must not re-arm the flag");
        let out = capture.contents();
        assert!(out.contains("    assessment fail "));
        assert!(out.contains("     reason: low <= high\n"));
        assert!(out.ends_with("    assessment pass low < high\n"));
    }

    #[test]
    fn verdict_resets_test_flag() {
        let capture = Capture::plain();
        let mut h = Harness::with_sink(capture.sink());
        h.assess_string_equal("a", "b", Exprs::pair("a", "b"));
        assert_eq!(h.assert_passed_all_assessments(), Verdict::Fail);
        assert!(h.state().test_pass());
        assert!(capture.contents().ends_with("    Some assessments failed\n"));
        assert_eq!(h.assert_passed_all_assessments(), Verdict::Pass);
    }

    #[test]
    fn manual_assessment_records_answer() {
        let capture = Capture::plain();
        let mut h = Harness::with_sink(capture.sink());
        h.set_input(Box::new(Cursor::new("y\nn\n")));
        assert_eq!(h.assess_manual(), Verdict::Pass);
        assert!(h.state().test_pass());
        assert_eq!(h.assess_manual(), Verdict::Fail);
        assert!(!h.state().test_pass());
        assert!(capture.contents().ends_with("    assessment fail\n"));
    }
}
