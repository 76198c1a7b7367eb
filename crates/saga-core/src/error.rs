use std::error::Error;
use std::fmt;

/// A single failure recorded by a saga.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SagaFailure<E> {
    /// A forward step failed. Rendered as the step's own error.
    #[error(transparent)]
    Step(E),

    /// A compensating transaction failed during the sweep.
    #[error("compensating transaction [{index}] failed")]
    Compensation {
        /// Position of the compensation in registration order.
        index: usize,
        /// The error returned by the compensation.
        #[source]
        source: E,
    },
}

impl<E> SagaFailure<E> {
    /// The underlying error, regardless of where it came from.
    #[must_use]
    pub fn inner(&self) -> &E {
        match self {
            Self::Step(error) | Self::Compensation { source: error, .. } => error,
        }
    }

    #[must_use]
    pub fn is_compensation(&self) -> bool {
        matches!(self, Self::Compensation { .. })
    }
}

/// Every failure raised during a saga, in the order they occurred.
///
/// The original step failure comes first, followed by any compensation
/// failures in sweep order. Displaying the error renders all of them.
#[derive(Debug, PartialEq, Eq)]
pub struct SagaError<E> {
    failures: Vec<SagaFailure<E>>,
}

impl<E> SagaError<E> {
    pub(crate) fn new() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, failure: SagaFailure<E>) {
        self.failures.push(failure);
    }

    #[must_use]
    pub fn failures(&self) -> &[SagaFailure<E>] {
        &self.failures
    }

    pub fn iter(&self) -> impl Iterator<Item = &SagaFailure<E>> {
        self.failures.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// The step failure that triggered the rollback.
    #[must_use]
    pub fn step_failure(&self) -> Option<&E> {
        self.failures.iter().find_map(|failure| match failure {
            SagaFailure::Step(error) => Some(error),
            SagaFailure::Compensation { .. } => None,
        })
    }

    /// Compensations that could not undo their step, as `(index, error)`.
    pub fn compensation_failures(&self) -> impl Iterator<Item = (usize, &E)> {
        self.failures.iter().filter_map(|failure| match failure {
            SagaFailure::Compensation { index, source } => Some((*index, source)),
            SagaFailure::Step(_) => None,
        })
    }

    #[must_use]
    pub fn into_failures(self) -> Vec<SagaFailure<E>> {
        self.failures
    }
}

impl<E> IntoIterator for SagaError<E> {
    type Item = SagaFailure<E>;
    type IntoIter = std::vec::IntoIter<SagaFailure<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'e, E> IntoIterator for &'e SagaError<E> {
    type Item = &'e SagaFailure<E>;
    type IntoIter = std::slice::Iter<'e, SagaFailure<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

impl<E> fmt::Display for SagaError<E>
where
    E: Error + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.failures.len();
        let noun = if count == 1 { "error" } else { "errors" };
        write!(f, "{count} {noun} occurred:")?;

        for failure in &self.failures {
            write!(f, "\n\t* {failure}")?;
            let mut source = failure.source();
            while let Some(cause) = source {
                write!(f, ": {cause}")?;
                source = cause.source();
            }
        }
        Ok(())
    }
}

impl<E> Error for SagaError<E> where E: Error + 'static {}
