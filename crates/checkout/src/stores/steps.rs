//! Checkout step navigation.

use quickcart_core::CheckoutStep;

/// Position in the `information` → `delivery` → `summary` flow.
///
/// The store itself never refuses a move; completeness checks belong to the
/// checkout session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckoutStepStore {
    current: CheckoutStep,
}

impl CheckoutStepStore {
    /// Start at the information step.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: CheckoutStep::Information,
        }
    }

    #[must_use]
    pub const fn current_step(&self) -> CheckoutStep {
        self.current
    }

    /// Jump to any step.
    pub fn set_current_step(&mut self, step: CheckoutStep) {
        tracing::debug!(from = %self.current, to = %step, "Changed checkout step");
        self.current = step;
    }

    /// Advance one step; no-op on the last step.
    pub fn next_step(&mut self) {
        if let Some(next) = self.current.next() {
            self.set_current_step(next);
        }
    }

    /// Go back one step; no-op on the first step.
    pub fn prev_step(&mut self) {
        if let Some(previous) = self.current.previous() {
            self.set_current_step(previous);
        }
    }

    /// Return to the information step.
    pub fn reset_steps(&mut self) {
        self.current = CheckoutStep::Information;
    }
}
