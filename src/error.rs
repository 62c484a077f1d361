use std::io;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::numeric::operator::Operator;

/// Failure of a single `calculate` call. The calculator state is never
/// touched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Division by zero!")]
    DivisionByZero,

    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    /// The exact result does not fit in a `Decimal`.
    #[error("Arithmetic overflow: {lhs} {operator} {rhs}")]
    Overflow {
        operator: Operator,
        lhs: Decimal,
        rhs: Decimal,
    },

    /// The exact result needs more than 28 significant or fractional digits.
    #[error("Result of {lhs} {operator} {rhs} cannot be represented exactly")]
    Inexact {
        operator: Operator,
        lhs: Decimal,
        rhs: Decimal,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
