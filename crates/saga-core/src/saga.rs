use std::fmt::{self, Debug};
use std::time::Instant;

use tracing::{debug, warn};

use crate::audit::{ActivityStatus, SagaAuditLog};
use crate::error::{SagaError, SagaFailure};

/// A compensating transaction: undoes the effects of one completed step.
pub type Compensation<'a, E> = Box<dyn FnMut() -> Result<(), E> + 'a>;

/// Coordinates a sequence of fallible steps and their compensations.
///
/// Steps run inline through [`run`](Self::run) and [`make`](Self::make).
/// The first failure is sticky: every later step is skipped and every later
/// compensation is discarded. [`compensate`](Self::compensate) then undoes
/// the completed steps in reverse (LIFO) order.
///
/// Calling `compensate` twice on a failed saga runs every compensation
/// again. Call it once per workflow.
pub struct Saga<'a, E> {
    failures: SagaError<E>,
    compensations: Vec<Compensation<'a, E>>,
    audit_log: SagaAuditLog,
}

impl<E> Default for Saga<'_, E> {
    fn default() -> Self {
        Self {
            failures: SagaError::new(),
            compensations: Vec::new(),
            audit_log: SagaAuditLog::new(),
        }
    }
}

impl<E: Debug> Debug for Saga<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Saga")
            .field("failures", &self.failures)
            .field("compensations", &self.compensations.len())
            .finish_non_exhaustive()
    }
}

impl<'a, E> Saga<'a, E>
where
    E: Debug,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a step unless the saga has already failed.
    pub fn run<F>(&mut self, step: F)
    where
        F: FnOnce() -> Result<(), E>,
    {
        self.make(step);
    }

    /// Run a step and return its value unless the saga has already failed.
    ///
    /// Returns `V::default()` when the step is skipped or fails, so use
    /// `Option<T>` for results without a meaningful default.
    pub fn make<V, F>(&mut self, step: F) -> V
    where
        V: Default,
        F: FnOnce() -> Result<V, E>,
    {
        let index = self.audit_log.next_step_index();
        let started_at = Instant::now();

        if self.has_error() {
            debug!(step = index, "saga already failed, skipping step");
            self.audit_log.record_step(ActivityStatus::Skipped, started_at);
            return V::default();
        }

        match step() {
            Ok(value) => {
                debug!(step = index, "saga step succeeded");
                self.audit_log.record_step(ActivityStatus::Succeeded, started_at);
                value
            }
            Err(error) => {
                warn!(step = index, ?error, "saga step failed");
                self.audit_log.record_step(ActivityStatus::Failed, started_at);
                self.failures.push(SagaFailure::Step(error));
                V::default()
            }
        }
    }

    /// Register the compensation for the most recently completed step.
    ///
    /// Dropped without being registered if the saga has already failed.
    pub fn add_compensation<F>(&mut self, compensation: F)
    where
        F: FnMut() -> Result<(), E> + 'a,
    {
        if self.has_error() {
            debug!("saga already failed, compensation not registered");
            return;
        }
        self.compensations.push(Box::new(compensation));
    }

    /// Run every registered compensation in reverse order if a step failed.
    ///
    /// A failing compensation is recorded and the sweep continues.
    pub fn compensate(&mut self) {
        if !self.has_error() {
            return;
        }

        debug!(
            count = self.compensations.len(),
            "running compensating transactions"
        );

        for (index, compensation) in self.compensations.iter_mut().enumerate().rev() {
            let started_at = Instant::now();

            match compensation() {
                Ok(()) => {
                    debug!(compensation = index, "compensating transaction succeeded");
                    self.audit_log
                        .record_compensation(index, ActivityStatus::Succeeded, started_at);
                }
                Err(error) => {
                    warn!(compensation = index, ?error, "compensating transaction failed");
                    self.audit_log
                        .record_compensation(index, ActivityStatus::Failed, started_at);
                    self.failures.push(SagaFailure::Compensation {
                        index,
                        source: error,
                    });
                }
            }
        }
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        !self.failures.is_empty()
    }

    /// All failures so far: the step failure first, then compensation failures.
    #[must_use]
    pub fn errors(&self) -> &[SagaFailure<E>] {
        self.failures.failures()
    }

    /// The aggregated error, or `None` if nothing has failed.
    #[must_use]
    pub fn error(&self) -> Option<&SagaError<E>> {
        self.has_error().then_some(&self.failures)
    }

    #[must_use]
    pub fn compensation_count(&self) -> usize {
        self.compensations.len()
    }

    #[must_use]
    pub fn audit_log(&self) -> &SagaAuditLog {
        &self.audit_log
    }

    /// Consume the saga, yielding the aggregated error if anything failed.
    ///
    /// # Errors
    ///
    /// Returns the [`SagaError`] holding every recorded failure.
    pub fn into_result(self) -> Result<(), SagaError<E>> {
        self.finish().0
    }

    /// Consume the saga, returning both the outcome and the audit log.
    #[must_use]
    pub fn finish(self) -> (Result<(), SagaError<E>>, SagaAuditLog) {
        let result = if self.failures.is_empty() {
            Ok(())
        } else {
            Err(self.failures)
        };
        (result, self.audit_log)
    }
}
