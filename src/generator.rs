//! Generation driver.
//!
//! Writes `main.c`, then every module directory with its sources and one
//! build description per backend, then the root build descriptions. All
//! locations are derived from the explicit `root` argument.
use crate::backend::{Backend, BuildBackend};
use crate::emit::{self, module_dir_name, Sink};
use crate::errors::GenError;
use crate::graph::Params;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Counters for one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub modules: usize,
    pub sources: usize,
    pub descriptions: usize,
    pub dependency_edges: usize,
}

/// Record of one run: parameters, backends, and every artifact written
/// (relative to the output root, sorted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub params: Params,
    pub backends: Vec<Backend>,
    pub summary: Summary,
    pub artifacts: Vec<PathBuf>,
}

impl Manifest {
    /// # Errors
    /// Returns `GenError::Manifest` if encoding fails, or `GenError::Io` if writing fails.
    pub fn save_json(&self, path: &Path) -> Result<(), GenError> {
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }
}

pub struct Generator {
    params: Params,
    backends: Vec<Backend>,
    parallel: bool,
}

struct ModuleOutput {
    paths: Option<Vec<PathBuf>>,
    sources: usize,
}

impl Generator {
    /// Repeated backends are dropped, keeping the first occurrence.
    #[must_use]
    pub fn new(params: Params, backends: Vec<Backend>) -> Self {
        let mut unique = Vec::with_capacity(backends.len());
        for b in backends {
            if !unique.contains(&b) {
                unique.push(b);
            }
        }
        Self { params, backends: unique, parallel: false }
    }

    /// Emit modules on the rayon pool. Output is identical to a sequential run.
    #[must_use]
    pub fn parallel(mut self, on: bool) -> Self {
        self.parallel = on;
        self
    }

    /// Generate the whole tree under `root`.
    ///
    /// # Errors
    /// Returns `GenError::InvalidParams` before writing anything if the shape is
    /// empty; otherwise the first I/O error, leaving a partial tree behind.
    pub fn generate(&self, sink: &dyn Sink, root: &Path) -> Result<Summary, GenError> {
        self.run(sink, root, false).map(|m| m.summary)
    }

    /// Like [`Generator::generate`], also returning the list of artifacts.
    ///
    /// # Errors
    /// Same as [`Generator::generate`].
    pub fn generate_with_manifest(&self, sink: &dyn Sink, root: &Path) -> Result<Manifest, GenError> {
        self.run(sink, root, true)
    }

    fn run(&self, sink: &dyn Sink, root: &Path, record: bool) -> Result<Manifest, GenError> {
        self.params.validate()?;
        let backends: Vec<Box<dyn BuildBackend>> =
            self.backends.iter().map(|b| b.implementation()).collect();
        tracing::info!(
            files_per_module = self.params.files_per_module,
            fanout = self.params.fanout,
            modules = self.params.modules,
            root = %root.display(),
            "generating tree"
        );

        sink.create_dir(root)?;
        let main = emit::emit_root(sink, root, self.params.modules)?;
        let mut artifacts = Vec::new();
        if record {
            artifacts.push(main);
        }

        let outputs: Vec<ModuleOutput> = if self.parallel {
            (0..self.params.modules)
                .into_par_iter()
                .map(|m| self.emit_one_module(sink, root, m, &backends, record))
                .collect::<Result<_, _>>()?
        } else {
            (0..self.params.modules)
                .map(|m| self.emit_one_module(sink, root, m, &backends, record))
                .collect::<Result<_, _>>()?
        };

        let mut sources = 0usize;
        for out in outputs {
            sources = sources.saturating_add(out.sources);
            artifacts.extend(out.paths.unwrap_or_default());
        }

        for backend in &backends {
            let path = root.join(backend.file_name());
            sink.write_file(&path, &backend.render_root(self.params.modules))?;
            if record {
                artifacts.push(path);
            }
        }

        let summary = Summary {
            modules: self.params.modules,
            sources,
            descriptions: backends.len().saturating_mul(self.params.modules.saturating_add(1)),
            dependency_edges: self.params.dependency_edges(),
        };
        tracing::info!(?summary, "tree generated");

        let mut artifacts: Vec<PathBuf> = artifacts
            .into_iter()
            .map(|p| p.strip_prefix(root).map(Path::to_path_buf).unwrap_or(p))
            .collect();
        artifacts.sort();
        Ok(Manifest { params: self.params, backends: self.backends.clone(), summary, artifacts })
    }

    fn emit_one_module(
        &self,
        sink: &dyn Sink,
        root: &Path,
        module: usize,
        backends: &[Box<dyn BuildBackend>],
        record: bool,
    ) -> Result<ModuleOutput, GenError> {
        let dir = root.join(module_dir_name(module));
        sink.create_dir(&dir)?;
        let mut paths = record.then(Vec::new);
        let sources = emit::emit_module(sink, &dir, module, &self.params, paths.as_mut())?;
        for backend in backends {
            let path = dir.join(backend.file_name());
            sink.write_file(&path, &backend.render_module(module, self.params.files_per_module))?;
            tracing::debug!(module, backend = backend.name(), "module description written");
            if let Some(paths) = paths.as_mut() {
                paths.push(path);
            }
        }
        Ok(ModuleOutput { paths, sources })
    }
}
