//! Incremental two-stack evaluator
//!
//! Operands and operators arrive one at a time, never as an expression
//! string. Pushing an operator reduces pending operations for as long as the
//! top one binds at least as tightly as the incoming one, so equal precedence
//! evaluates left to right and only a strictly higher precedence operator is
//! deferred. With two precedence levels and no grouping, the operator stack
//! never holds more than two entries and both stacks live inline.

use smallvec::SmallVec;
use tracing::trace;

use crate::core::Operation;

/// Two-stack precedence evaluator
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    operands: SmallVec<[f64; 4]>,
    operators: SmallVec<[Operation; 4]>,
}

impl Evaluator {
    /// Creates an empty evaluator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes an operand
    pub fn push_operand(&mut self, operand: f64) {
        self.operands.push(operand);
    }

    /// Pushes an operator, first reducing every pending operation that
    /// binds at least as tightly as `op`
    pub fn push_operator(&mut self, op: Operation) {
        while self
            .operators
            .last()
            .is_some_and(|top| top.precedence() >= op.precedence())
        {
            if !self.evaluate_top() {
                break;
            }
        }
        self.operators.push(op);
    }

    /// Swaps the pending operator for `op`, as if `op` had been pushed in
    /// its place.
    ///
    /// This is not a plain pop-and-push: the replacement goes through
    /// [`Self::push_operator`], so a lower-precedence `op` reduces the
    /// operation it no longer defers to (`10 - 4 *` swapped to `+` evaluates
    /// `10 - 4` at once). A plain swap would leave `[-, +]` stacked and turn
    /// `10 - 4 + 1` into `10 - (4 + 1)`.
    pub fn replace_last_operator(&mut self, op: Operation) {
        let replaced = self.operators.pop();
        trace!(?replaced, with = %op, "replacing pending operator");
        self.push_operator(op);
    }

    /// Reduces the top operation: `operand1 op operand2`, where operand2 is
    /// the most recently pushed. Returns false (and changes nothing) if fewer
    /// than two operands or no operator are pending.
    fn evaluate_top(&mut self) -> bool {
        if self.operands.len() < 2 || self.operators.is_empty() {
            return false;
        }
        let (Some(rhs), Some(lhs), Some(op)) = (
            self.operands.pop(),
            self.operands.pop(),
            self.operators.pop(),
        ) else {
            return false;
        };

        let result = op.apply(lhs, rhs);
        trace!(lhs, %op, rhs, result, "reduced");
        self.operands.push(result);
        true
    }

    /// Reduces every pending operation and pops the final operand.
    ///
    /// Returns 0 when no operand was pushed. Operators left over without a
    /// right-hand operand are discarded.
    pub fn compute_result(&mut self) -> f64 {
        while !self.operators.is_empty() {
            if !self.evaluate_top() {
                trace!(
                    dangling = self.operators.len(),
                    "operators without operands discarded"
                );
                self.operators.clear();
            }
        }
        self.operands.pop().unwrap_or(0.0)
    }

    /// Empties both stacks
    pub fn clear(&mut self) {
        self.operands.clear();
        self.operators.clear();
    }

    /// Number of operands on the stack
    #[must_use]
    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    /// Number of pending operators
    #[must_use]
    pub fn operator_count(&self) -> usize {
        self.operators.len()
    }

    /// The operator on top of the stack, if any
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operation> {
        self.operators.last().copied()
    }

    /// True when both stacks are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operands.is_empty() && self.operators.is_empty()
    }

    /// True when operator precedence never decreases from bottom to top
    #[must_use]
    pub fn precedence_is_ordered(&self) -> bool {
        self.operators
            .windows(2)
            .all(|pair| pair[0].precedence() <= pair[1].precedence())
    }
}
