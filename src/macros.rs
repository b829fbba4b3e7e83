//! Call-site sugar over the `Harness` methods.
//!
//! The macros capture operand text with `stringify!`; the methods pick up the
//! source location through `#[track_caller]`. Every `assert_*!` and
//! `expect_exception*!` macro returns its verdict from the enclosing test
//! function. `assess_*!` macros do not return.

// ============================================================================
// ASSERTIONS
// ============================================================================

#[macro_export]
macro_rules! assert_equal {
    ($h:expr, $a:expr, $b:expr $(,)?) => {
        return $h.assert_equal(&$a, &$b, $crate::Exprs::pair(stringify!($a), stringify!($b)))
    };
}

#[macro_export]
macro_rules! assert_not_equal {
    ($h:expr, $a:expr, $b:expr $(,)?) => {
        return $h.assert_not_equal(&$a, &$b, $crate::Exprs::pair(stringify!($a), stringify!($b)))
    };
}

#[macro_export]
macro_rules! assert_greater_than {
    ($h:expr, $a:expr, $b:expr $(,)?) => {
        return $h.assert_greater_than(&$a, &$b, $crate::Exprs::pair(stringify!($a), stringify!($b)))
    };
}

#[macro_export]
macro_rules! assert_less_than {
    ($h:expr, $a:expr, $b:expr $(,)?) => {
        return $h.assert_less_than(&$a, &$b, $crate::Exprs::pair(stringify!($a), stringify!($b)))
    };
}

#[macro_export]
macro_rules! assert_greater_than_or_equal {
    ($h:expr, $a:expr, $b:expr $(,)?) => {
        return $h.assert_greater_than_or_equal(
            &$a,
            &$b,
            $crate::Exprs::pair(stringify!($a), stringify!($b)),
        )
    };
}

#[macro_export]
macro_rules! assert_less_than_or_equal {
    ($h:expr, $a:expr, $b:expr $(,)?) => {
        return $h.assert_less_than_or_equal(
            &$a,
            &$b,
            $crate::Exprs::pair(stringify!($a), stringify!($b)),
        )
    };
}

#[macro_export]
macro_rules! assert_null {
    ($h:expr, $a:expr $(,)?) => {
        return $h.assert_null(&$a, $crate::Exprs::single(stringify!($a)))
    };
}

#[macro_export]
macro_rules! assert_not_null {
    ($h:expr, $a:expr $(,)?) => {
        return $h.assert_not_null(&$a, $crate::Exprs::single(stringify!($a)))
    };
}

#[macro_export]
macro_rules! assert_string_equal {
    ($h:expr, $a:expr, $b:expr $(,)?) => {
        return $h.assert_string_equal(&$a, &$b, $crate::Exprs::pair(stringify!($a), stringify!($b)))
    };
}

#[macro_export]
macro_rules! assert_string_not_equal {
    ($h:expr, $a:expr, $b:expr $(,)?) => {
        return $h.assert_string_not_equal(
            &$a,
            &$b,
            $crate::Exprs::pair(stringify!($a), stringify!($b)),
        )
    };
}

#[macro_export]
macro_rules! assert_true {
    ($h:expr, $e:expr $(,)?) => {
        return $h.assert_true($e, $crate::Exprs::single(stringify!($e)))
    };
}

#[macro_export]
macro_rules! assert_false {
    ($h:expr, $e:expr $(,)?) => {
        return $h.assert_false($e, $crate::Exprs::single(stringify!($e)))
    };
}

#[macro_export]
macro_rules! assert_manual {
    ($h:expr $(,)?) => {
        return $h.assert_manual()
    };
}

#[macro_export]
macro_rules! assert_passed_all_assessments {
    ($h:expr $(,)?) => {
        return $h.assert_passed_all_assessments()
    };
}

#[macro_export]
macro_rules! assert_fail {
    ($h:expr $(,)?) => {
        return $h.assert_fail()
    };
}

#[macro_export]
macro_rules! assert_pass {
    ($h:expr $(,)?) => {
        return $h.assert_pass()
    };
}

// ============================================================================
// ASSESSMENTS
// ============================================================================

#[macro_export]
macro_rules! assess_equal {
    ($h:expr, $a:expr, $b:expr $(,)?) => {
        $h.assess_equal(&$a, &$b, $crate::Exprs::pair(stringify!($a), stringify!($b)))
    };
}

#[macro_export]
macro_rules! assess_not_equal {
    ($h:expr, $a:expr, $b:expr $(,)?) => {
        $h.assess_not_equal(&$a, &$b, $crate::Exprs::pair(stringify!($a), stringify!($b)))
    };
}

#[macro_export]
macro_rules! assess_greater_than {
    ($h:expr, $a:expr, $b:expr $(,)?) => {
        $h.assess_greater_than(&$a, &$b, $crate::Exprs::pair(stringify!($a), stringify!($b)))
    };
}

#[macro_export]
macro_rules! assess_less_than {
    ($h:expr, $a:expr, $b:expr $(,)?) => {
        $h.assess_less_than(&$a, &$b, $crate::Exprs::pair(stringify!($a), stringify!($b)))
    };
}

#[macro_export]
macro_rules! assess_greater_than_or_equal {
    ($h:expr, $a:expr, $b:expr $(,)?) => {
        $h.assess_greater_than_or_equal(
            &$a,
            &$b,
            $crate::Exprs::pair(stringify!($a), stringify!($b)),
        )
    };
}

#[macro_export]
macro_rules! assess_less_than_or_equal {
    ($h:expr, $a:expr, $b:expr $(,)?) => {
        $h.assess_less_than_or_equal(&$a, &$b, $crate::Exprs::pair(stringify!($a), stringify!($b)))
    };
}

#[macro_export]
macro_rules! assess_null {
    ($h:expr, $a:expr $(,)?) => {
        $h.assess_null(&$a, $crate::Exprs::single(stringify!($a)))
    };
}

#[macro_export]
macro_rules! assess_not_null {
    ($h:expr, $a:expr $(,)?) => {
        $h.assess_not_null(&$a, $crate::Exprs::single(stringify!($a)))
    };
}

#[macro_export]
macro_rules! assess_string_equal {
    ($h:expr, $a:expr, $b:expr $(,)?) => {
        $h.assess_string_equal(&$a, &$b, $crate::Exprs::pair(stringify!($a), stringify!($b)))
    };
}

#[macro_export]
macro_rules! assess_string_not_equal {
    ($h:expr, $a:expr, $b:expr $(,)?) => {
        $h.assess_string_not_equal(&$a, &$b, $crate::Exprs::pair(stringify!($a), stringify!($b)))
    };
}

#[macro_export]
macro_rules! assess_true {
    ($h:expr, $e:expr $(,)?) => {
        $h.assess_true($e, $crate::Exprs::single(stringify!($e)))
    };
}

#[macro_export]
macro_rules! assess_false {
    ($h:expr, $e:expr $(,)?) => {
        $h.assess_false($e, $crate::Exprs::single(stringify!($e)))
    };
}

#[macro_export]
macro_rules! assess_manual {
    ($h:expr $(,)?) => {
        $h.assess_manual()
    };
}

// ============================================================================
// EXCEPTIONS
// ============================================================================

#[macro_export]
macro_rules! expect_exception {
    ($h:expr, $kind:expr $(,)?) => {
        return $h.expect_exception($kind, stringify!($kind))
    };
}

#[macro_export]
macro_rules! expect_exception_not_thrown {
    ($h:expr, $kind:expr $(,)?) => {
        return $h.expect_exception_not_thrown($kind, stringify!($kind))
    };
}

// ============================================================================
// RUNNER AND PRINTING
// ============================================================================

/// `run_test!(h, add_two_numbers)` runs the function under its own name.
#[macro_export]
macro_rules! run_test {
    ($h:expr, $test:ident $(,)?) => {
        $h.test(stringify!($test), $test)
    };
}

/// `test_group!(h, math_lib)` opens a group named after the identifier.
#[macro_export]
macro_rules! test_group {
    ($h:expr, $name:ident $(,)?) => {
        $h.test_group(stringify!($name))
    };
    ($h:expr, $name:expr $(,)?) => {
        $h.test_group($name)
    };
}

#[macro_export]
macro_rules! tprint {
    ($h:expr, $($arg:tt)*) => {
        $h.tprint(format_args!($($arg)*))
    };
}
