use super::{library_name, BuildBackend, EXECUTABLE_NAME};
use crate::emit::module::source_name;
use crate::emit::module_dir_name;
use crate::emit::root::MAIN_FILE;
use std::fmt::Write as _;

/// Lua scripts for the meique build tool.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeiqueBackend;

impl MeiqueBackend {
    pub const NAME: &'static str = "meique";
}

impl BuildBackend for MeiqueBackend {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn file_name(&self) -> &'static str {
        "meique.lua"
    }

    fn render_module(&self, module: usize, files_per_module: usize) -> String {
        let lib = library_name(module);
        let mut s = String::new();
        let _ = writeln!(s, "{lib} = Library:new(\"{lib}\", SHARED)");
        let _ = writeln!(s, "{lib}:addFiles([[");
        for f in 0..files_per_module {
            let _ = writeln!(s, "{}", source_name(f));
        }
        s.push_str("]])\n");
        s
    }

    fn render_root(&self, modules: usize) -> String {
        let mut s = String::new();
        let _ = writeln!(s, "{EXECUTABLE_NAME} = Executable:new(\"{EXECUTABLE_NAME}\")");
        let _ = writeln!(s, "{EXECUTABLE_NAME}:addFile(\"{MAIN_FILE}\")");
        for m in 0..modules {
            let _ = writeln!(s, "addSubdirectory(\"{}\")", module_dir_name(m));
            let _ = writeln!(s, "{EXECUTABLE_NAME}:use({})", library_name(m));
        }
        let dirs: Vec<String> = (0..modules).map(|m| format!("\"{}\"", module_dir_name(m))).collect();
        let _ = writeln!(s, "{EXECUTABLE_NAME}:addIncludeDirs({})", dirs.join(", "));
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_script_lists_every_source() {
        assert_eq!(
            MeiqueBackend.render_module(0, 2),
            "module0 = Library:new(\"module0\", SHARED)\nmodule0:addFiles([[\n0.c\n1.c\n]])\n"
        );
    }

    #[test]
    fn root_script_uses_every_module() {
        let s = MeiqueBackend.render_root(2);
        assert!(s.starts_with("exe = Executable:new(\"exe\")\nexe:addFile(\"main.c\")\n"));
        assert!(s.contains("addSubdirectory(\"module1\")\nexe:use(module1)\n"));
        assert!(s.ends_with("exe:addIncludeDirs(\"module0\", \"module1\")\n"));
    }
}
