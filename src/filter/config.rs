//! Filter configuration types.

/// What the filter prints for a selected line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputMode {
    /// The whole input line
    #[default]
    Line,
    /// Only the field that matched
    Field,
    /// Only the matched suffix
    Suffix,
}

/// Configuration for a [`Filter`](super::Filter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterConfig {
    /// Select lines where no field matches
    pub invert: bool,
    /// What to print for selected lines
    pub output: OutputMode,
}

impl FilterConfig {
    /// Create a new FilterConfig.
    pub fn new(invert: bool, output: OutputMode) -> Self {
        Self { invert, output }
    }
}
