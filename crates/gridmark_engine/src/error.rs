//! Engine error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// A board size outside the supported range, with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display(
    "Invalid board size {}: must be between {} and {} (inclusive) at {}:{}",
    size,
    crate::BoardSize::MIN,
    crate::BoardSize::MAX,
    file,
    line
)]
pub struct SizeError {
    /// The rejected size.
    pub size: usize,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SizeError {
    /// Creates a new size error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(size: usize) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            size,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
