use rust_decimal::Decimal;
use tracing::{debug, trace, warn};

use crate::config::CalculatorConfig;
use crate::error::CalcError;
use crate::numeric::arithmetic;
use crate::numeric::operator::Operator;
use crate::transaction::entry::Entry;
use crate::transaction::history::{History, UndoOutcome};

/// A decimal calculator that remembers its results.
///
/// Every successful [`calculate`](Calculator::calculate) pushes its result
/// onto the history; [`result`](Calculator::result) reads the newest one.
/// [`undo`](Calculator::undo) and [`redo`](Calculator::redo) move entries
/// between the history and an undo buffer, see [`History`] for the exact
/// policy. All mutation goes through `&mut self`; wrap the calculator in a
/// `Mutex` to share it between threads.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    history: History,
    config: CalculatorConfig,
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            history: History::with_max_depth(config.max_depth),
            config,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Evaluate `lhs <op> rhs` and record the result.
    ///
    /// On error nothing is recorded and the undo buffer is left alone.
    pub fn calculate(
        &mut self,
        op: &str,
        lhs: Decimal,
        rhs: Decimal,
    ) -> Result<Decimal, CalcError> {
        let result = op.parse::<Operator>().and_then(|op| self.apply(op, lhs, rhs));
        if let Err(e) = &result {
            warn!(error = %e, operator = op, %lhs, %rhs, "calculation failed");
        }
        result
    }

    /// Typed form of [`calculate`](Calculator::calculate).
    pub fn apply(
        &mut self,
        op: Operator,
        lhs: Decimal,
        rhs: Decimal,
    ) -> Result<Decimal, CalcError> {
        let value = arithmetic::apply(op, lhs, rhs, self.config.division_scale)?;
        self.history.record(Entry::new(value, op));
        debug!(operator = %op, %value, depth = self.history.depth(), "calculated");
        Ok(value)
    }

    pub fn undo(&mut self) {
        match self.history.undo() {
            UndoOutcome::Undone(entry) => debug!(
                operator = %entry.operator,
                value = %entry.value,
                depth = self.history.depth(),
                "undone"
            ),
            // already logged by the history
            UndoOutcome::Cancelled(_) => {}
            UndoOutcome::Empty => trace!("nothing to undo"),
        }
    }

    pub fn redo(&mut self) {
        match self.history.redo() {
            Some(entry) => debug!(
                operator = %entry.operator,
                value = %entry.value,
                depth = self.history.depth(),
                "redone"
            ),
            None => trace!("nothing to redo"),
        }
    }

    /// The newest result, or zero before the first calculation.
    pub fn result(&self) -> Decimal {
        self.history
            .current()
            .map(|entry| entry.value)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn depth(&self) -> usize {
        self.history.depth()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    /// Forget all results and any pending redo.
    pub fn clear(&mut self) {
        self.history.clear();
        debug!("history cleared");
    }
}
