use rust_decimal::Decimal;

use crate::error::CalcError;
use crate::numeric::operator::Operator;

/// Number of fractional digits a quotient is rounded to unless configured
/// otherwise.
pub const DEFAULT_DIVISION_SCALE: u32 = 2;

/// Largest scale a `Decimal` can carry.
pub const MAX_SCALE: u32 = 28;

/// Apply `op` to `lhs` and `rhs`.
///
/// Addition, subtraction and multiplication are exact and keep the natural
/// scale of their operands (`1 + 2 = 3`, `1.5 * 2 = 3.0`). A result that
/// only fits once trailing zeros are dropped is returned at that smaller
/// scale; one that does not fit at all is `CalcError::Inexact`.
///
/// Division is rounded once, from the exact quotient, half away from zero to
/// exactly `division_scale` fractional digits, so `7 / 2 = 3.50` at the
/// default scale.
pub fn apply(
    op: Operator,
    lhs: Decimal,
    rhs: Decimal,
    division_scale: u32,
) -> Result<Decimal, CalcError> {
    let overflow = || CalcError::Overflow { operator: op, lhs, rhs };

    match op {
        Operator::Add => exact(op, lhs, rhs, Decimal::checked_add, u32::max),
        Operator::Sub => exact(op, lhs, rhs, Decimal::checked_sub, u32::max),
        Operator::Mul if lhs.is_zero() || rhs.is_zero() => {
            Ok(Decimal::new(0, (lhs.scale() + rhs.scale()).min(MAX_SCALE)))
        }
        Operator::Mul => exact(op, lhs, rhs, Decimal::checked_mul, |a, b| a + b),
        Operator::Div => {
            if rhs.is_zero() {
                return Err(CalcError::DivisionByZero);
            }
            divide_rounded(lhs, rhs, division_scale.min(MAX_SCALE)).ok_or_else(overflow)
        }
    }
}

/// Run `checked` and reject any result `rust_decimal` had to round.
///
/// `rust_decimal` only ever rounds by lowering the scale, so a result is
/// exact iff it carries the natural scale of its operands. A zero sum or
/// difference is always exact. The operands are retried without trailing
/// zeros before giving up.
fn exact(
    op: Operator,
    lhs: Decimal,
    rhs: Decimal,
    checked: fn(Decimal, Decimal) -> Option<Decimal>,
    natural_scale: fn(u32, u32) -> u32,
) -> Result<Decimal, CalcError> {
    let attempt = |a: Decimal, b: Decimal| -> Result<Option<Decimal>, CalcError> {
        let value = checked(a, b).ok_or(CalcError::Overflow { operator: op, lhs, rhs })?;
        let natural = value.scale() == natural_scale(a.scale(), b.scale());
        Ok((natural || (value.is_zero() && op != Operator::Mul)).then_some(value))
    };

    if let Some(value) = attempt(lhs, rhs)? {
        return Ok(value);
    }
    attempt(lhs.normalize(), rhs.normalize())?
        .ok_or(CalcError::Inexact { operator: op, lhs, rhs })
}

/// `lhs / rhs` rounded half away from zero to `scale` digits, computed by
/// long division on the mantissas so the exact remainder decides the last
/// digit. `None` if the result does not fit in a `Decimal`.
fn divide_rounded(lhs: Decimal, rhs: Decimal, scale: u32) -> Option<Decimal> {
    let num = lhs.mantissa().unsigned_abs();
    let den = rhs.mantissa().unsigned_abs();

    // lhs / rhs * 10^scale == num * 10^shift / den
    let shift = (rhs.scale() + scale) as i32 - lhs.scale() as i32;

    let (mut quotient, remainder, divisor) = if shift >= 0 {
        let mut quotient = num / den;
        let mut remainder = num % den;
        for _ in 0..shift {
            // remainder < den < 2^96, no overflow
            remainder *= 10;
            quotient = quotient.checked_mul(10)?.checked_add(remainder / den)?;
            remainder %= den;
        }
        (quotient, remainder, den)
    } else {
        match 10u128.checked_pow(shift.unsigned_abs()).and_then(|p| den.checked_mul(p)) {
            Some(divisor) => (num / divisor, num % divisor, divisor),
            // divisor exceeds twice any mantissa, the quotient rounds to zero
            None => (0, num, u128::MAX),
        }
    };

    if remainder >= divisor - remainder {
        quotient = quotient.checked_add(1)?;
    }

    let mut mantissa = i128::try_from(quotient).ok()?;
    if lhs.is_sign_negative() != rhs.is_sign_negative() {
        mantissa = -mantissa;
    }
    Decimal::try_from_i128_with_scale(mantissa, scale).ok()
}
