use super::{module_dir_name, Sink};
use std::fmt::Write as _;
use std::io;
use std::path::{Path, PathBuf};

pub const MAIN_FILE: &str = "main.c";

/// `main.c`: includes the entry header of every module and calls each
/// initializer in ascending module order.
#[must_use]
pub fn render_main(modules: usize) -> String {
    let mut s = String::new();
    for m in 0..modules {
        let _ = writeln!(s, "#include \"{}/0.h\"", module_dir_name(m));
    }
    s.push_str("\nint main() {\n");
    for m in 0..modules {
        let _ = writeln!(s, "    initModule{m}({m});");
    }
    s.push_str("    return 0;\n}\n");
    s
}

/// # Errors
/// Returns the I/O error from `sink`.
pub fn emit_root(sink: &dyn Sink, root: &Path, modules: usize) -> io::Result<PathBuf> {
    let path = root.join(MAIN_FILE);
    sink.write_file(&path, &render_main(modules))?;
    Ok(path)
}
