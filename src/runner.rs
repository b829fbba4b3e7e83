//! Runs named tests inside named groups and reports the aggregate outcome.
//!
//! A run is one linear pass: `start`, then any number of
//! `test_group` … `test`* … `end_group` blocks, then `end`.

use crate::harness::Harness;
use crate::verdict::Verdict;

pub const CTEST_VERSION: &str = "v1.0";

const RULE: &str = "-----------------------------------------";

/// A test function: runs its checks against the harness and returns a verdict.
pub type TestFn = fn(&mut Harness) -> Verdict;

/// Where the runner is in its linear run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running { group: Option<String> },
    GroupComplete,
    AllComplete,
}

/// Counts gathered over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub failed_groups: usize,
}

impl RunSummary {
    pub fn total_tests(&self) -> usize {
        self.passed + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

impl Harness {
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Prints the intro banner.
    pub fn start(&mut self) {
        if self.phase != Phase::NotStarted {
            tracing::warn!(phase = ?self.phase, "run started more than once");
        }
        self.intro(format_args!("{RULE}\n"));
        self.intro(format_args!("          CTest Framework {CTEST_VERSION}\n"));
        self.intro(format_args!("{RULE}\n"));
        self.phase = Phase::Running { group: None };
    }

    /// Opens a group: re-arms the group flag and prints its banner.
    pub fn test_group(&mut self, name: &str) {
        match &self.phase {
            Phase::Running { group: Some(open) } => {
                tracing::warn!(open = %open, next = name, "group opened before the previous one ended")
            }
            Phase::NotStarted | Phase::AllComplete => {
                tracing::warn!(phase = ?self.phase, group = name, "group opened outside a run")
            }
            _ => {}
        }
        self.state.reset_group();
        self.group(format_args!("{RULE}\n{name}\n{RULE}\n"));
        tracing::debug!(group = name, "group started");
        self.phase = Phase::Running {
            group: Some(name.to_string()),
        };
    }

    /// Runs one test function and records its verdict.
    pub fn test<F>(&mut self, name: &str, test: F) -> Verdict
    where
        F: FnOnce(&mut Harness) -> Verdict,
    {
        if !matches!(self.phase, Phase::Running { group: Some(_) }) {
            tracing::warn!(phase = ?self.phase, test = name, "test run outside an open group");
        }
        self.emit_plain(format_args!("    running test: {name}\n"));
        self.state.reset_test();
        let verdict = test(self);
        self.info(format_args!("    {name} "));
        match verdict {
            Verdict::Pass => {
                self.pass(format_args!("passed.\n\n"));
                self.summary.passed += 1;
            }
            Verdict::Fail => {
                self.fail(format_args!("failed.\n\n"));
                self.state.fail_test();
                self.summary.failed += 1;
            }
        }
        tracing::debug!(test = name, %verdict, "test finished");
        verdict
    }

    /// Closes the current group and reports whether all its tests passed.
    pub fn end_group(&mut self) -> Verdict {
        if !matches!(self.phase, Phase::Running { group: Some(_) }) {
            tracing::warn!(phase = ?self.phase, "group ended without an open group");
        }
        let verdict = Verdict::from(self.state.all_tests_pass());
        match verdict {
            Verdict::Pass => self.pass(format_args!("    All tests in the group passed.\n")),
            Verdict::Fail => {
                self.fail(format_args!("    Some tests in the group failed.\n"));
                self.summary.failed_groups += 1;
            }
        }
        self.group(format_args!("{RULE}\n\n"));
        self.phase = Phase::GroupComplete;
        verdict
    }

    /// Prints the final banner and returns the overall verdict.
    pub fn end(&mut self) -> Verdict {
        if let Phase::Running { group: Some(open) } = &self.phase {
            tracing::warn!(group = %open, "run ended with an open group");
        }
        let verdict = Verdict::from(self.state.all_groups_pass());
        match verdict {
            Verdict::Pass => {
                self.pass(format_args!("{RULE}\n"));
                self.pass(format_args!("            All tests passed.\n"));
                self.pass(format_args!("{RULE}\n"));
            }
            Verdict::Fail => {
                self.fail(format_args!("{RULE}\n"));
                self.fail(format_args!("           Some tests failed.\n"));
                self.fail(format_args!("{RULE}\n"));
            }
        }
        tracing::debug!(summary = ?self.summary, %verdict, "run complete");
        self.phase = Phase::AllComplete;
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Capture;

    fn passes(_: &mut Harness) -> Verdict {
        Verdict::Pass
    }

    fn fails(_: &mut Harness) -> Verdict {
        Verdict::Fail
    }

    #[test]
    fn phases_advance_linearly() {
        let capture = Capture::plain();
        let mut h = Harness::with_sink(capture.sink());
        assert_eq!(h.phase(), &Phase::NotStarted);
        h.start();
        assert_eq!(h.phase(), &Phase::Running { group: None });
        h.test_group("math");
        assert_eq!(
            h.phase(),
            &Phase::Running {
                group: Some("math".to_string())
            }
        );
        h.end_group();
        assert_eq!(h.phase(), &Phase::GroupComplete);
        h.end();
        assert_eq!(h.phase(), &Phase::AllComplete);
    }

    #[test]
    fn test_output_lines() {
        let capture = Capture::plain();
        let mut h = Harness::with_sink(capture.sink());
        h.start();
        h.test_group("g");
        capture.clear();
        h.test("passes", passes);
        h.test("fails", fails);
        assert_eq!(
            capture.contents(),
            "    running test: passes\n    passes passed.\n\n    running test: fails\n    fails failed.\n\n"
        );
    }

    #[test]
    fn group_flag_resets_but_run_flag_sticks() {
        let capture = Capture::plain();
        let mut h = Harness::with_sink(capture.sink());
        h.start();
        h.test_group("first");
        h.test("fails", fails);
        assert_eq!(h.end_group(), Verdict::Fail);
        h.test_group("second");
        h.test("passes", passes);
        assert_eq!(h.end_group(), Verdict::Pass);
        assert_eq!(h.end(), Verdict::Fail);
        assert_eq!(
            h.summary(),
            RunSummary {
                passed: 1,
                failed: 1,
                failed_groups: 1
            }
        );
        assert!(capture.contents().ends_with(&format!(
            "{RULE}\n           Some tests failed.\n{RULE}\n"
        )));
    }

    #[test]
    fn banners() {
        let capture = Capture::plain();
        let mut h = Harness::with_sink(capture.sink());
        h.start();
        assert_eq!(
            capture.contents(),
            format!("{RULE}\n          CTest Framework v1.0\n{RULE}\n")
        );
        capture.clear();
        h.test_group("math_lib");
        assert_eq!(capture.contents(), format!("{RULE}\nmath_lib\n{RULE}\n"));
        capture.clear();
        h.end_group();
        assert_eq!(
            capture.contents(),
            format!("    All tests in the group passed.\n{RULE}\n\n")
        );
    }

    #[test]
    fn closures_are_accepted() {
        let capture = Capture::plain();
        let mut h = Harness::with_sink(capture.sink());
        let mut ran = false;
        h.test("closure", |_| {
            ran = true;
            Verdict::Pass
        });
        assert!(ran);
    }
}
