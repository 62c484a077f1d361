use rust_decimal::Decimal;

use crate::numeric::operator::Operator;

/// One step of the calculation history: the value an operation produced
/// and the operator that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub value: Decimal,
    pub operator: Operator,
}

impl Entry {
    pub fn new(value: Decimal, operator: Operator) -> Self {
        Self { value, operator }
    }
}
