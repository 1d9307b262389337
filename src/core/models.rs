//! Output configuration.

/// Configuration for serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Spaces per nesting level (default: 2).
    ///
    /// JSON honors it, with `0` producing compact single-line output. YAML
    /// is always emitted with two-space nesting.
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
