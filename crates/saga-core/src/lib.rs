//! Saga coordinator for multi-step workflows without distributed transactions.
//!
//! A [`Saga`] runs fallible steps in order. Once a step fails, later steps
//! are skipped and [`Saga::compensate`] undoes the completed ones by running
//! their registered compensations in reverse order. Every failure, including
//! failed compensations, is collected into one [`SagaError`].
//!
//! ```
//! use saga_core::Saga;
//!
//! #[derive(Debug)]
//! struct Unavailable;
//!
//! let mut saga: Saga<'_, Unavailable> = Saga::new();
//! let seat: Option<u32> = saga.make(|| Ok(Some(12)));
//! saga.add_compensation(move || {
//!     println!("releasing seat {seat:?}");
//!     Ok(())
//! });
//! saga.run(|| Err(Unavailable));
//! saga.compensate();
//!
//! assert!(saga.has_error());
//! assert_eq!(saga.errors().len(), 1);
//! ```

mod audit;
mod error;
mod saga;

pub use audit::{ActivityKind, ActivityRecord, ActivityStatus, SagaAuditLog};
pub use error::{SagaError, SagaFailure};
pub use saga::{Compensation, Saga};
