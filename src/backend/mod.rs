//! Build-description backends.
//!
//! Each backend renders the same structure (one shared library per module,
//! one executable linking them all) in its own syntax. The generator only
//! talks to [`BuildBackend`], so a new format is a new file here plus a
//! [`Backend`] variant.
use crate::errors::ConfigError;
use clap::builder::PossibleValue;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod cmake;
pub mod meique;

pub use cmake::CMakeBackend;
pub use meique::MeiqueBackend;

/// Name of the library target built from module `module`.
#[must_use]
pub fn library_name(module: usize) -> String {
    format!("module{module}")
}

pub const EXECUTABLE_NAME: &str = "exe";

pub trait BuildBackend: Send + Sync {
    /// Short identifier, as accepted on the command line.
    fn name(&self) -> &'static str;

    /// File name of the description, in the module directory and at the root.
    fn file_name(&self) -> &'static str;

    /// Description of the shared library built from the module's sources.
    fn render_module(&self, module: usize, files_per_module: usize) -> String;

    /// Description of the executable linking every module library.
    fn render_root(&self, modules: usize) -> String;
}

/// Selectable backend. Names come from each implementation's `NAME` and are
/// shared by the command line, the config file and the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Backend {
    Cmake,
    Meique,
}

impl Backend {
    /// Every supported backend, in emission order.
    #[must_use]
    pub fn all() -> Vec<Backend> {
        Self::value_variants().to_vec()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Backend::Cmake => CMakeBackend::NAME,
            Backend::Meique => MeiqueBackend::NAME,
        }
    }

    #[must_use]
    pub fn implementation(self) -> Box<dyn BuildBackend> {
        match self {
            Backend::Cmake => Box::new(CMakeBackend),
            Backend::Meique => Box::new(MeiqueBackend),
        }
    }
}

impl ValueEnum for Backend {
    fn value_variants<'a>() -> &'a [Self] {
        &[Backend::Cmake, Backend::Meique]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.name()))
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::value_variants()
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownBackend(s.to_string()))
    }
}

impl TryFrom<String> for Backend {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Backend> for &'static str {
    fn from(b: Backend) -> Self {
        b.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_names_round_trip() {
        for b in Backend::all() {
            assert_eq!(b.name().parse::<Backend>().unwrap(), b);
            assert_eq!(b.implementation().name(), b.name());
            assert_eq!(<Backend as ValueEnum>::from_str(b.name(), false).unwrap(), b);
        }
        assert!("ninja".parse::<Backend>().is_err());
        assert_eq!("CMake".parse::<Backend>().unwrap(), Backend::Cmake);
    }

    #[test]
    fn serde_uses_backend_names() {
        let json = serde_json::to_string(&Backend::all()).unwrap();
        assert_eq!(json, "[\"cmake\",\"meique\"]");
        let back: Vec<Backend> = serde_json::from_str("[\"meique\",\"CMake\"]").unwrap();
        assert_eq!(back, vec![Backend::Meique, Backend::Cmake]);
        assert!(serde_json::from_str::<Backend>("\"bazel\"").is_err());
    }

    #[test]
    fn file_names_are_distinct() {
        let names: Vec<_> = Backend::all().into_iter().map(|b| b.implementation().file_name()).collect();
        assert_eq!(names, vec!["CMakeLists.txt", "meique.lua"]);
    }
}
