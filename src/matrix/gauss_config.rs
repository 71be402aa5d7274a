/// Tunables of the elimination engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaussConfig {
    /// Row count from which the row updates of a pivot step run on the rayon
    /// pool. Results match the sequential path exactly.
    pub parallel_threshold: usize,
}

impl Default for GaussConfig {
    fn default() -> Self {
        GaussConfig {
            parallel_threshold: 128,
        }
    }
}

impl GaussConfig {
    /// Never leaves the calling thread.
    pub fn sequential() -> Self {
        GaussConfig {
            parallel_threshold: usize::MAX,
        }
    }

    pub fn with_parallel_threshold(mut self, rows: usize) -> Self {
        self.parallel_threshold = rows;
        self
    }

    pub fn is_parallel(&self, rows: usize) -> bool {
        rows >= self.parallel_threshold
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
