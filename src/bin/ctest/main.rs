//! Demo runner: exercises the harness against `basic_math`.

mod args;
mod basic_math;

use clap::Parser;
use ctest::{
    assert_equal, assert_passed_all_assessments, assess_equal, assess_greater_than,
    assess_not_equal, assess_true, expect_exception, fenv, run_test, test_group, tprint,
    ExceptionFlags, Harness, Verdict, DIVIDE_BY_ZERO_EXCEPTION,
};

use crate::args::{CtestArgs, FirstCall};
use crate::basic_math::{add, divide, multiply, subtract};

fn add_two_numbers(h: &mut Harness) -> Verdict {
    let a = 1;
    let b = 2;
    let expected = 3;

    let result = add(a, b);

    assert_equal!(h, result, expected);
}

fn subtract_two_numbers(h: &mut Harness) -> Verdict {
    let a = 1;
    let b = 2;
    let expected = -1;

    let result = subtract(a, b);

    assert_equal!(h, result, expected);
}

fn multiply_two_numbers(h: &mut Harness) -> Verdict {
    let a = 2;
    let b = 3;
    let expected = 6;

    let result = multiply(a, b);

    assert_equal!(h, result, expected);
}

fn divide_two_numbers(h: &mut Harness) -> Verdict {
    let a = 6;
    let b = 2;
    let expected = 3.0;

    let result = divide(a, b);

    assert_equal!(h, result, expected);
}

fn divide_by_zero_throws_error(h: &mut Harness) -> Verdict {
    let a = 10;
    let b = 0;

    divide(a, b);

    expect_exception!(h, DIVIDE_BY_ZERO_EXCEPTION);
}

fn arithmetic_identities(h: &mut Harness) -> Verdict {
    h.start_timer();
    let sum = add(40, 2);
    let product = multiply(6, 7);
    h.end_timer();

    assess_equal!(h, sum, product);
    assess_not_equal!(h, subtract(sum, 1), product);
    assess_greater_than!(h, multiply(product, 2), sum);
    assess_true!(h, add(-3, 3) == 0);
    tprint!(h, "sum = {sum}, product = {product}\n");
    h.print_timer();

    assert_passed_all_assessments!(h);
}

fn main() -> miette::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let args = CtestArgs::parse();
    if let Some(call) = args.no_sink {
        let mut h = Harness::new();
        match call {
            FirstCall::Start => h.start(),
            FirstCall::Assertion => {
                let _ = add_two_numbers(&mut h);
            }
            FirstCall::Exception => {
                fenv::clear_except(ExceptionFlags::ALL);
                let _ = divide_by_zero_throws_error(&mut h);
            }
        }
        return Ok(());
    }

    let mut h = Harness::with_config(&args.config())?;

    h.start();

    test_group!(h, math_lib);
    run_test!(h, add_two_numbers);
    run_test!(h, subtract_two_numbers);
    run_test!(h, multiply_two_numbers);
    run_test!(h, divide_two_numbers);
    run_test!(h, divide_by_zero_throws_error);
    h.end_group();

    test_group!(h, assessments);
    run_test!(h, arithmetic_identities);
    h.end_group();

    h.end();
    Ok(())
}
