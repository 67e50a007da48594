//! Dependency graph model for the generated tree.
//!
//! Every generated file `f` of a module depends on the `fanout` files that
//! follow it cyclically: `(f + k) % files_per_module` for `k in 0..fanout`.
//! The scheme needs no randomness, so identical parameters always produce an
//! identical graph, and density is controlled by `fanout` alone.
//!
//! Dependencies never cross module boundaries.
use crate::errors::GenError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FILES_PER_MODULE: usize = 10;
pub const DEFAULT_FANOUT: usize = 7;
pub const DEFAULT_MODULES: usize = 5;

/// Shape of the generated tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    pub files_per_module: usize,
    pub fanout: usize,
    pub modules: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            files_per_module: DEFAULT_FILES_PER_MODULE,
            fanout: DEFAULT_FANOUT,
            modules: DEFAULT_MODULES,
        }
    }
}

impl Params {
    #[must_use]
    pub fn new(files_per_module: usize, fanout: usize, modules: usize) -> Self {
        Self { files_per_module, fanout, modules }
    }

    /// Reject shapes that cannot describe a tree.
    ///
    /// # Errors
    /// Returns `GenError::InvalidParams` when there are no files per module or no modules.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.files_per_module == 0 {
            return Err(GenError::InvalidParams("files per module must be at least 1".into()));
        }
        if self.modules == 0 {
            return Err(GenError::InvalidParams("module count must be at least 1".into()));
        }
        Ok(())
    }

    /// Include/call edges across the whole tree (`files * fanout * modules`),
    /// saturating instead of overflowing.
    #[must_use]
    pub fn dependency_edges(&self) -> usize {
        self.files_per_module.saturating_mul(self.fanout).saturating_mul(self.modules)
    }
}

/// Ordered dependency indices of `file` within its module.
///
/// Indices repeat when `fanout` exceeds `files_per_module`; they are kept as-is.
///
/// # Panics
/// Panics if `files_per_module` is zero.
#[must_use]
pub fn dependencies_of(file: usize, fanout: usize, files_per_module: usize) -> Vec<usize> {
    assert!(files_per_module > 0, "files_per_module must be non-zero");
    (0..fanout).map(|k| (file + k) % files_per_module).collect()
}
