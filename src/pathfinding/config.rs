/// Number of search passes allowed before unfinished paths are abandoned.
pub const DEFAULT_MAX_DEPTH: usize = 7;

/// Tuning for [`FindPath`](super::FindPath).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathfinderConfig {
    /// Each pass resolves one more wall hit per candidate path. Candidates
    /// still unfinished after pass `max_depth` are invalidated.
    pub max_depth: usize,
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl PathfinderConfig {
    /// Overrides the depth limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_depth() {
        assert_eq!(PathfinderConfig::default().max_depth, 7);
        assert_eq!(PathfinderConfig::default().with_max_depth(2).max_depth, 2);
    }
}
