//! Evaluation options.

/// Configuration options for hand evaluation.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use handrank::EvalOptions;
///
/// let options = EvalOptions::default().with_wheel(true);
/// assert!(options.wheel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EvalOptions {
    /// Whether A-2-3-4-5 (the wheel) counts as a straight.
    ///
    /// Disabled by default. Straights never wrap past the ace, so
    /// hands like Q-K-A-2-3 are not straights either way.
    pub wheel: bool,
}

impl EvalOptions {
    /// Sets whether the wheel counts as a straight.
    ///
    /// # Example
    ///
    /// ```
    /// use handrank::EvalOptions;
    ///
    /// let options = EvalOptions::default().with_wheel(true);
    /// assert_eq!(options.wheel, true);
    /// ```
    #[must_use]
    pub const fn with_wheel(mut self, wheel: bool) -> Self {
        self.wheel = wheel;
        self
    }
}
