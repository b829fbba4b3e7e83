//! Sticky floating-point exception flags.
//!
//! Rust exposes no portable access to the hardware status word, so the flags
//! are latched in software: the checked operations in this module compute the
//! IEEE 754 result and raise the exceptions that operation would signal. Flags
//! stay raised until [`clear_except`] is called, and are per thread.

use std::cell::Cell;
use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitOrAssign, Div, Mul, Neg, Not, Sub};

/// A set of arithmetic exception flags.
///
/// Bit values follow the x86 `<fenv.h>` layout.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExceptionFlags(u8);

impl ExceptionFlags {
    pub const NONE: Self = Self(0);
    pub const INVALID: Self = Self(0x01);
    pub const DIVIDE_BY_ZERO: Self = Self(0x04);
    pub const OVERFLOW: Self = Self(0x08);
    pub const UNDERFLOW: Self = Self(0x10);
    pub const INEXACT: Self = Self(0x20);
    pub const ALL: Self = Self(0x3d);

    const NAMED: [(Self, &'static str); 5] = [
        (Self::INVALID, "INVALID"),
        (Self::DIVIDE_BY_ZERO, "DIVIDE_BY_ZERO"),
        (Self::OVERFLOW, "OVERFLOW"),
        (Self::UNDERFLOW, "UNDERFLOW"),
        (Self::INEXACT, "INEXACT"),
    ];

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ExceptionFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ExceptionFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ExceptionFlags {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for ExceptionFlags {
    type Output = Self;
    fn not(self) -> Self {
        Self(!self.0 & Self::ALL.0)
    }
}

impl fmt::Display for ExceptionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }
        let mut first = true;
        for (flag, name) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    write!(f, " | ")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ExceptionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExceptionFlags({self})")
    }
}

// ============================================================================
// LATCH
// ============================================================================

thread_local! {
    static LATCH: Cell<ExceptionFlags> = const { Cell::new(ExceptionFlags::NONE) };
}

/// Raises `flags` in the current thread's latch.
pub fn raise(flags: ExceptionFlags) {
    if flags.is_empty() {
        return;
    }
    LATCH.with(|latch| latch.set(latch.get() | flags));
}

/// Returns the raised flags selected by `mask`.
pub fn test_except(mask: ExceptionFlags) -> ExceptionFlags {
    LATCH.with(|latch| latch.get() & mask)
}

/// Lowers the flags selected by `mask`.
pub fn clear_except(mask: ExceptionFlags) {
    LATCH.with(|latch| latch.set(latch.get() & !mask));
}

/// Where the exception probe reads raised flags from.
pub trait ExceptionSource {
    fn raised(&self) -> ExceptionFlags;
}

/// Reads the current thread's latch.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadLatch;

impl ExceptionSource for ThreadLatch {
    fn raised(&self) -> ExceptionFlags {
        test_except(ExceptionFlags::ALL)
    }
}

/// A fixed flag set; always reports the same exceptions.
impl ExceptionSource for ExceptionFlags {
    fn raised(&self) -> ExceptionFlags {
        *self
    }
}

// ============================================================================
// CHECKED ARITHMETIC
// ============================================================================

/// Binary floating-point types the checked operations accept.
pub trait Float:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const MIN_POSITIVE: Self;
    /// `2^(2 * MANTISSA_DIGITS)`: lifts a subnormal product far enough that
    /// its exact rounding error is representable.
    const TINY_SCALE: Self;

    fn is_nan(self) -> bool;
    fn is_finite(self) -> bool;
    fn is_infinite(self) -> bool;
    fn abs(self) -> Self;
    fn mul_add(self, a: Self, b: Self) -> Self;
}

macro_rules! impl_float {
    ($($t:ty => $scale_bits:expr),*) => {$(
        impl Float for $t {
            const ZERO: Self = 0.0;
            const MIN_POSITIVE: Self = <$t>::MIN_POSITIVE;
            const TINY_SCALE: Self = (1u128 << $scale_bits) as $t;

            fn is_nan(self) -> bool { <$t>::is_nan(self) }
            fn is_finite(self) -> bool { <$t>::is_finite(self) }
            fn is_infinite(self) -> bool { <$t>::is_infinite(self) }
            fn abs(self) -> Self { <$t>::abs(self) }
            fn mul_add(self, a: Self, b: Self) -> Self { <$t>::mul_add(self, a, b) }
        }
    )*};
}

impl_float!(f32 => 2 * f32::MANTISSA_DIGITS, f64 => 2 * f64::MANTISSA_DIGITS);

fn is_tiny<T: Float>(x: T) -> bool {
    x != T::ZERO && x.abs() < T::MIN_POSITIVE
}

/// Flags for results that are NaN or infinite; `None` when the result is finite.
fn special_result_flags<T: Float>(a: T, b: T, result: T) -> Option<ExceptionFlags> {
    if result.is_nan() {
        return Some(if a.is_nan() || b.is_nan() {
            ExceptionFlags::NONE
        } else {
            ExceptionFlags::INVALID
        });
    }
    if result.is_infinite() {
        return Some(if a.is_finite() && b.is_finite() {
            ExceptionFlags::OVERFLOW | ExceptionFlags::INEXACT
        } else {
            ExceptionFlags::NONE
        });
    }
    None
}

fn sum_flags<T: Float>(a: T, b: T, sum: T) -> ExceptionFlags {
    if let Some(flags) = special_result_flags(a, b, sum) {
        return flags;
    }
    // Two-sum: `err` is the exact rounding error of `a + b`.
    let b_virtual = sum - a;
    let a_virtual = sum - b_virtual;
    let err = (a - a_virtual) + (b - b_virtual);
    if err != T::ZERO {
        ExceptionFlags::INEXACT
    } else {
        ExceptionFlags::NONE
    }
}

fn product_flags<T: Float>(a: T, b: T, product: T) -> ExceptionFlags {
    if let Some(flags) = special_result_flags(a, b, product) {
        return flags;
    }
    if product == T::ZERO && a != T::ZERO && b != T::ZERO {
        return ExceptionFlags::UNDERFLOW | ExceptionFlags::INEXACT;
    }
    let err = if is_tiny(product) {
        // Scale the smaller operand; both scalings are exact.
        let (small, large) = if a.abs() < b.abs() { (a, b) } else { (b, a) };
        (small * T::TINY_SCALE).mul_add(large, -(product * T::TINY_SCALE))
    } else {
        a.mul_add(b, -product)
    };
    rounding_flags(product, err != T::ZERO)
}

fn quotient_flags<T: Float>(a: T, b: T, quotient: T) -> ExceptionFlags {
    if b == T::ZERO {
        if a.is_nan() || a.is_infinite() {
            return ExceptionFlags::NONE;
        }
        return if a == T::ZERO {
            ExceptionFlags::INVALID
        } else {
            ExceptionFlags::DIVIDE_BY_ZERO
        };
    }
    if let Some(flags) = special_result_flags(a, b, quotient) {
        return flags;
    }
    if b.is_infinite() {
        return ExceptionFlags::NONE;
    }
    if quotient == T::ZERO && a != T::ZERO {
        return ExceptionFlags::UNDERFLOW | ExceptionFlags::INEXACT;
    }
    let remainder = (-quotient).mul_add(b, a);
    rounding_flags(quotient, remainder != T::ZERO)
}

fn rounding_flags<T: Float>(result: T, inexact: bool) -> ExceptionFlags {
    match (inexact, is_tiny(result)) {
        (false, _) => ExceptionFlags::NONE,
        (true, false) => ExceptionFlags::INEXACT,
        (true, true) => ExceptionFlags::UNDERFLOW | ExceptionFlags::INEXACT,
    }
}

/// `a + b`, raising the exceptions the addition signals.
pub fn add<T: Float>(a: T, b: T) -> T {
    let sum = a + b;
    raise(sum_flags(a, b, sum));
    sum
}

/// `a - b`, raising the exceptions the subtraction signals.
pub fn sub<T: Float>(a: T, b: T) -> T {
    let difference = a - b;
    raise(sum_flags(a, -b, difference));
    difference
}

/// `a * b`, raising the exceptions the multiplication signals.
pub fn mul<T: Float>(a: T, b: T) -> T {
    let product = a * b;
    raise(product_flags(a, b, product));
    product
}

/// `a / b`, raising the exceptions the division signals.
pub fn div<T: Float>(a: T, b: T) -> T {
    let quotient = a / b;
    raise(quotient_flags(a, b, quotient));
    quotient
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() {
        clear_except(ExceptionFlags::ALL);
    }

    #[test]
    fn divide_by_zero_raises_only_that_flag() {
        fresh();
        let q = div(10.0f32, 0.0);
        assert!(q.is_infinite());
        assert_eq!(test_except(ExceptionFlags::ALL), ExceptionFlags::DIVIDE_BY_ZERO);
    }

    #[test]
    fn exact_division_raises_nothing() {
        fresh();
        assert_eq!(div(6.0f32, 2.0), 3.0);
        assert!(test_except(ExceptionFlags::ALL).is_empty());
    }

    #[test]
    fn inexact_division() {
        fresh();
        div(1.0f64, 3.0);
        assert_eq!(test_except(ExceptionFlags::ALL), ExceptionFlags::INEXACT);
    }

    #[test]
    fn zero_over_zero_is_invalid() {
        fresh();
        assert!(div(0.0f64, 0.0).is_nan());
        assert_eq!(test_except(ExceptionFlags::ALL), ExceptionFlags::INVALID);
    }

    #[test]
    fn infinity_minus_infinity_is_invalid() {
        fresh();
        assert!(sub(f64::INFINITY, f64::INFINITY).is_nan());
        assert_eq!(test_except(ExceptionFlags::ALL), ExceptionFlags::INVALID);
    }

    #[test]
    fn overflow_is_also_inexact() {
        fresh();
        assert!(mul(f32::MAX, 2.0).is_infinite());
        assert_eq!(
            test_except(ExceptionFlags::ALL),
            ExceptionFlags::OVERFLOW | ExceptionFlags::INEXACT
        );
    }

    #[test]
    fn underflow_to_zero() {
        fresh();
        assert_eq!(mul(1e-30f32, 1e-30), 0.0);
        assert_eq!(
            test_except(ExceptionFlags::ALL),
            ExceptionFlags::UNDERFLOW | ExceptionFlags::INEXACT
        );
    }

    #[test]
    fn gradual_underflow_in_multiplication() {
        fresh();
        let product = mul(1e-160f64, 1e-160);
        assert!(product != 0.0 && product < f64::MIN_POSITIVE);
        assert_eq!(
            test_except(ExceptionFlags::ALL),
            ExceptionFlags::UNDERFLOW | ExceptionFlags::INEXACT
        );

        fresh();
        let product = mul(1e-20f32, 1e-25);
        assert!(product != 0.0 && product < f32::MIN_POSITIVE);
        assert_eq!(
            test_except(ExceptionFlags::ALL),
            ExceptionFlags::UNDERFLOW | ExceptionFlags::INEXACT
        );
    }

    #[test]
    fn exact_subnormal_product_raises_nothing() {
        fresh();
        assert_eq!(mul(f64::MIN_POSITIVE, 0.5), f64::MIN_POSITIVE / 2.0);
        assert!(test_except(ExceptionFlags::ALL).is_empty());

        fresh();
        assert_eq!(mul(0.25f32, f32::MIN_POSITIVE), f32::MIN_POSITIVE / 4.0);
        assert!(test_except(ExceptionFlags::ALL).is_empty());
    }

    #[test]
    fn inexact_addition() {
        fresh();
        add(0.1f64, 0.2);
        assert_eq!(test_except(ExceptionFlags::ALL), ExceptionFlags::INEXACT);
        fresh();
        add(1.0f64, 2.0);
        assert!(test_except(ExceptionFlags::ALL).is_empty());
    }

    #[test]
    fn flags_are_sticky_until_cleared() {
        fresh();
        div(1.0f32, 0.0);
        div(4.0f32, 2.0);
        assert!(test_except(ExceptionFlags::DIVIDE_BY_ZERO).contains(ExceptionFlags::DIVIDE_BY_ZERO));
        clear_except(ExceptionFlags::DIVIDE_BY_ZERO);
        assert!(test_except(ExceptionFlags::ALL).is_empty());
    }

    #[test]
    fn display_lists_named_flags() {
        assert_eq!(ExceptionFlags::NONE.to_string(), "NONE");
        assert_eq!(
            (ExceptionFlags::INEXACT | ExceptionFlags::DIVIDE_BY_ZERO).to_string(),
            "DIVIDE_BY_ZERO | INEXACT"
        );
    }
}
