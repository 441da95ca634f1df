//! Configuration for template rendering

/// Configuration options for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Maximum edit distance for "did you mean" suggestions
    pub suggestion_distance: usize,

    /// Maximum number of suggestions attached to an unknown placeholder error
    pub max_suggestions: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            suggestion_distance: 2,
            max_suggestions: 3,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum suggestion edit distance
    pub fn with_suggestion_distance(mut self, distance: usize) -> Self {
        self.suggestion_distance = distance;
        self
    }

    /// Set the maximum number of suggestions
    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.suggestion_distance, 2);
        assert_eq!(config.max_suggestions, 3);
    }

    #[test]
    fn test_builder() {
        let config = RenderConfig::new()
            .with_suggestion_distance(1)
            .with_max_suggestions(5);
        assert_eq!(config.suggestion_distance, 1);
        assert_eq!(config.max_suggestions, 5);
    }
}
