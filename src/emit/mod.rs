//! Emission of the generated C tree.
//!
//! Rendering is pure (`module::render_header`, `module::render_source`,
//! `root::render_main`); storage goes through a [`Sink`], which receives
//! explicit paths and never relies on the process working directory.
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub mod module;
pub mod root;

pub use module::emit_module;
pub use root::emit_root;

/// Storage capability used by the emitters.
pub trait Sink: Send + Sync {
    /// Create `dir` (and missing parents). Existing directories are reused.
    ///
    /// # Errors
    /// Returns the underlying I/O error.
    fn create_dir(&self, dir: &Path) -> io::Result<()>;

    /// Write `contents` to `path`, replacing any previous file.
    ///
    /// # Errors
    /// Returns the underlying I/O error.
    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Writes straight to the filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSink;

impl Sink for FsSink {
    fn create_dir(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)
    }

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// Keeps every artifact in memory, keyed by path. Used by tests and benches.
#[derive(Debug, Default)]
pub struct MemorySink {
    dirs: Mutex<Vec<PathBuf>>,
    files: Mutex<BTreeMap<PathBuf, String>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all written files, sorted by path.
    #[must_use]
    pub fn files(&self) -> BTreeMap<PathBuf, String> {
        self.files.lock().map(|f| f.clone()).unwrap_or_default()
    }

    #[must_use]
    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().ok()?.get(path.as_ref()).cloned()
    }

    /// Directories created so far, sorted and without repeats.
    #[must_use]
    pub fn dirs(&self) -> Vec<PathBuf> {
        let mut out = self.dirs.lock().map(|d| d.clone()).unwrap_or_default();
        out.sort();
        out.dedup();
        out
    }
}

fn poisoned() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "memory sink lock poisoned")
}

impl Sink for MemorySink {
    fn create_dir(&self, dir: &Path) -> io::Result<()> {
        self.dirs.lock().map_err(|_| poisoned())?.push(dir.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.files
            .lock()
            .map_err(|_| poisoned())?
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

/// Directory name of module `module`.
#[must_use]
pub fn module_dir_name(module: usize) -> String {
    format!("module{module}")
}
