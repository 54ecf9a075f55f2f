//! Configuration for writing matrix files

/// Options applied when a matrix is written to disk
#[derive(Debug, Clone, Default)]
pub struct IoConfig {
    /// Drop zero-valued entries before writing
    pub prune_zeros: bool,
    /// Create missing parent directories of the output path
    pub create_dirs: bool,
}

impl IoConfig {
    /// Set whether zero-valued entries are dropped before writing
    pub fn with_prune_zeros(mut self, prune_zeros: bool) -> Self {
        self.prune_zeros = prune_zeros;
        self
    }

    /// Set whether missing parent directories are created
    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }
}
