//! Aggregate counters for one migration run.

use std::fmt;

/// Outcome counters of a migration run.
///
/// `cleanup_failures` counts records that were published but whose source file
/// could not be removed or archived. Those records are still counted as
/// succeeded. `skipped` counts content files that could not be read at all;
/// they are neither succeeded nor failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationResult {
    pub succeeded: usize,
    pub failed: usize,
    pub cleanup_failures: usize,
    pub skipped: usize,
}

impl MigrationResult {
    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn record_cleanup_failure(&mut self) {
        self.cleanup_failures += 1;
    }

    /// Total number of records processed.
    pub fn processed(&self) -> usize {
        self.succeeded + self.failed
    }
}

impl fmt::Display for MigrationResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} posts created, {} failed",
            self.succeeded, self.failed
        )?;
        if self.cleanup_failures > 0 {
            write!(f, " ({} source files left in place)", self.cleanup_failures)?;
        }
        if self.skipped > 0 {
            write!(f, ", {} unreadable files skipped", self.skipped)?;
        }
        Ok(())
    }
}
