//! Pass/fail flags aggregated at test, group and run granularity.
//!
//! Each flag starts `true` when its scope opens and can only be cleared
//! until that scope is reset again.

/// The three independent run flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunState {
    test_pass: bool,
    all_tests_pass: bool,
    all_groups_pass: bool,
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

impl RunState {
    pub fn new() -> Self {
        Self {
            test_pass: true,
            all_tests_pass: true,
            all_groups_pass: true,
        }
    }

    pub fn test_pass(&self) -> bool {
        self.test_pass
    }

    pub fn all_tests_pass(&self) -> bool {
        self.all_tests_pass
    }

    pub fn all_groups_pass(&self) -> bool {
        self.all_groups_pass
    }

    /// Records a failing assessment in the current test.
    pub fn fail_assessment(&mut self) {
        self.test_pass = false;
    }

    /// Records a failing test; clears both the group and the run flag.
    pub fn fail_test(&mut self) {
        self.all_tests_pass = false;
        self.all_groups_pass = false;
    }

    pub fn reset_test(&mut self) {
        self.test_pass = true;
    }

    pub fn reset_group(&mut self) {
        self.all_tests_pass = true;
    }
}
