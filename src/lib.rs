//! Decimal calculator with a linear result history and undo/redo.
//!
//! ```
//! use decicalc::Calculator;
//! use rust_decimal_macros::dec;
//!
//! let mut calc = Calculator::new();
//! calc.calculate("*", dec!(6), dec!(4)).unwrap();
//! calc.calculate("/", dec!(7), dec!(2)).unwrap();
//! assert_eq!(calc.result().to_string(), "3.50");
//!
//! calc.undo();
//! assert_eq!(calc.result(), dec!(24));
//! calc.redo();
//! assert_eq!(calc.result(), dec!(3.50));
//! ```
//!
//! Undo cancels itself when the entry it would expose was produced by the
//! same operator as the one being removed. See [`History`].

pub mod calculator;
pub mod config;
pub mod error;
pub mod numeric;
pub mod transaction;

pub use calculator::Calculator;
pub use config::CalculatorConfig;
pub use error::{CalcError, ConfigError};
pub use numeric::arithmetic::apply;
pub use numeric::operator::Operator;
pub use rust_decimal::Decimal;
pub use transaction::entry::Entry;
pub use transaction::history::{History, UndoOutcome};
