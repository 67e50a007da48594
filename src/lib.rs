//! buildbench-gen — synthetic C trees for build-system benchmarks
//!
//! Generates `MODULES` directories of `FILES` C header/source pairs plus a
//! `main.c`, with CMake and meique build descriptions for each module and
//! for the root. File `f` of a module includes and calls the `DEPS` files
//! `(f + k) % FILES`, so the include/call graph is dense, reproducible and
//! sized by three integers.
//!
//! # Quickstart (Library)
//! ```no_run
//! use buildbench_gen::backend::Backend;
//! use buildbench_gen::emit::FsSink;
//! use buildbench_gen::generator::Generator;
//! use buildbench_gen::graph::Params;
//!
//! let summary = Generator::new(Params::new(10, 7, 5), Backend::all())
//!     .generate(&FsSink, std::path::Path::new("bench-tree"))
//!     .expect("generate tree");
//! println!("sources: {}", summary.sources);
//! ```
//!
//! # Quickstart (CLI)
//! ```text
//! buildbench-gen 100 7 5 --out bench-tree
//! buildbench-gen 50 --backend cmake --manifest tree.json
//! ```
pub mod app;
pub mod backend;
pub mod cli;
pub mod emit;
pub mod errors;
pub mod generator;
pub mod graph;
pub mod utils;
