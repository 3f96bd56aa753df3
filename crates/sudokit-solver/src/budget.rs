//! Search budgets and cooperative cancellation.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::SolveError;

/// A clonable handle for aborting a running search from another thread.
///
/// The solver polls the token between candidate attempts, so cancellation
/// takes effect within one search step.
///
/// # Examples
///
/// ```
/// use sudokit_solver::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
/// assert!(!token.is_cancelled());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of any search holding a clone of this token.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Limits imposed on a backtracking search.
///
/// Backtracking has exponential worst-case cost, so an interactive embedding
/// should bound it: either cap the number of candidate attempts or supply a
/// [`CancelToken`] it can trip from another thread. The default budget is
/// unlimited, which reproduces the unbounded original behavior.
#[derive(Debug, Clone, Default)]
pub struct SearchBudget {
    max_steps: Option<u64>,
    cancel: Option<CancelToken>,
}

impl SearchBudget {
    /// A budget with no step cap and no cancellation token.
    pub const UNLIMITED: Self = Self {
        max_steps: None,
        cancel: None,
    };

    /// Creates an unlimited budget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of candidate attempts.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Attaches a cancellation token.
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub(crate) fn check(&self, steps: u64) -> Result<(), SolveError> {
        if let Some(max_steps) = self.max_steps
            && steps > max_steps
        {
            return Err(SolveError::BudgetExhausted { max_steps });
        }
        if let Some(cancel) = &self.cancel
            && cancel.is_cancelled()
        {
            return Err(SolveError::Cancelled);
        }
        Ok(())
    }
}
