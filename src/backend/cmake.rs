use super::{library_name, BuildBackend, EXECUTABLE_NAME};
use crate::emit::module::source_name;
use crate::emit::module_dir_name;
use crate::emit::root::MAIN_FILE;
use std::fmt::Write as _;

#[derive(Debug, Default, Clone, Copy)]
pub struct CMakeBackend;

impl CMakeBackend {
    pub const NAME: &'static str = "cmake";
}

impl BuildBackend for CMakeBackend {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn file_name(&self) -> &'static str {
        "CMakeLists.txt"
    }

    fn render_module(&self, module: usize, files_per_module: usize) -> String {
        let mut s = String::new();
        let _ = write!(s, "add_library({} SHARED", library_name(module));
        for f in 0..files_per_module {
            let _ = writeln!(s, " {}", source_name(f));
        }
        s.push_str(")\n");
        s
    }

    fn render_root(&self, modules: usize) -> String {
        let mut s = String::from("cmake_minimum_required(VERSION 2.8)\n");
        for m in 0..modules {
            let _ = writeln!(s, "add_subdirectory({})", module_dir_name(m));
        }
        s.push_str("include_directories(");
        for m in 0..modules {
            let _ = write!(s, " {}", module_dir_name(m));
        }
        s.push_str(")\n");
        let _ = writeln!(s, "add_executable({EXECUTABLE_NAME} {MAIN_FILE})");
        let _ = write!(s, "target_link_libraries({EXECUTABLE_NAME}");
        for m in 0..modules {
            let _ = write!(s, " {}", library_name(m));
        }
        s.push_str(")\n");
        s
    }
}
