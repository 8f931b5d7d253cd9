#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of committing (blurring) a form field.
pub enum CommitOutcome {
    /// Resolved to an exact catalog entry.
    Accepted,
    /// Plausible input that does not name an entry yet; later stages stay locked.
    Pending,
    /// No acceptable match. The field and everything after it were cleared.
    Rejected,
    /// Blank input. The field and everything after it were cleared.
    Empty,
}

impl CommitOutcome {
    /// Returns `true` if accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, CommitOutcome::Accepted)
    }

    /// Returns a short debug string.
    pub fn debug_status(&self) -> &'static str {
        match self {
            CommitOutcome::Accepted => "ACCEPTED",
            CommitOutcome::Pending => "PENDING",
            CommitOutcome::Rejected => "REJECTED",
            CommitOutcome::Empty => "EMPTY",
        }
    }
}

impl std::fmt::Display for CommitOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.debug_status())
    }
}
