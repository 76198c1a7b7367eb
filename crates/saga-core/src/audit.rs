use std::time::Instant;

/// What kind of work an audit record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActivityKind {
    /// A forward step passed to `run` or `make`.
    Step,
    /// A compensating transaction invoked during the sweep.
    Compensation,
}

/// Outcome of a recorded activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActivityStatus {
    /// The activity ran and returned `Ok`.
    Succeeded,
    /// The activity ran and returned an error.
    Failed,
    /// The step was not invoked because the saga had already failed.
    Skipped,
}

/// Record of one step call or compensation invocation.
#[derive(Debug, Clone)]
pub struct ActivityRecord {
    pub kind: ActivityKind,
    /// Call ordinal for steps, registration index for compensations.
    pub index: usize,
    pub status: ActivityStatus,
    pub started_at: Instant,
    /// `None` when the activity never ran.
    pub completed_at: Option<Instant>,
}

/// Audit log tracking every step call and compensation in a saga.
#[derive(Debug, Default)]
pub struct SagaAuditLog {
    records: Vec<ActivityRecord>,
    step_count: usize,
}

impl SagaAuditLog {
    /// Create a new empty audit log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the next recorded step will receive.
    pub(crate) fn next_step_index(&self) -> usize {
        self.step_count
    }

    pub(crate) fn record_step(&mut self, status: ActivityStatus, started_at: Instant) {
        let completed_at = (status != ActivityStatus::Skipped).then(Instant::now);
        self.records.push(ActivityRecord {
            kind: ActivityKind::Step,
            index: self.step_count,
            status,
            started_at,
            completed_at,
        });
        self.step_count += 1;
    }

    pub(crate) fn record_compensation(
        &mut self,
        index: usize,
        status: ActivityStatus,
        started_at: Instant,
    ) {
        self.records.push(ActivityRecord {
            kind: ActivityKind::Compensation,
            index,
            status,
            started_at,
            completed_at: Some(Instant::now()),
        });
    }

    /// All records in the order they were written.
    #[must_use]
    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn steps(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.records_of(ActivityKind::Step)
    }

    pub fn compensations(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.records_of(ActivityKind::Compensation)
    }

    fn records_of(&self, kind: ActivityKind) -> impl Iterator<Item = &ActivityRecord> {
        self.records.iter().filter(move |record| record.kind == kind)
    }

    /// Get a summary of the saga execution for display.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        for record in &self.records {
            let (status, label) = match (record.kind, record.status) {
                (ActivityKind::Step, ActivityStatus::Succeeded) => ("✓", "step"),
                (ActivityKind::Step, ActivityStatus::Failed) => ("✗", "step"),
                (ActivityKind::Step, ActivityStatus::Skipped) => ("-", "step"),
                (ActivityKind::Compensation, ActivityStatus::Succeeded) => ("↩", "compensation"),
                (ActivityKind::Compensation, ActivityStatus::Failed) => ("⚠", "compensation"),
                (ActivityKind::Compensation, ActivityStatus::Skipped) => ("-", "compensation"),
            };
            lines.push(format!("{status} {label} {}", record.index));
        }
        lines.join("\n")
    }
}
