use super::Sink;
use crate::graph::{dependencies_of, Params};
use std::fmt::Write as _;
use std::io;
use std::path::{Path, PathBuf};

/// Include guard token of header `file` in module `module`.
#[must_use]
pub fn include_guard(module: usize, file: usize) -> String {
    format!("MODULE{module}_HEADER{file}_H")
}

#[must_use]
pub fn header_name(file: usize) -> String {
    format!("{file}.h")
}

#[must_use]
pub fn source_name(file: usize) -> String {
    format!("{file}.c")
}

#[must_use]
pub fn render_header(module: usize, file: usize) -> String {
    let guard = include_guard(module, file);
    let mut s = String::new();
    let _ = writeln!(s, "#ifndef {guard}");
    let _ = writeln!(s, "#define {guard}");
    if file == 0 {
        let _ = writeln!(s, "__attribute__ ((visibility(\"default\"))) int initModule{module}(int);");
    }
    let _ = writeln!(s, "int func{file}(int a, int b);");
    s.push_str("#endif\n");
    s
}

/// Source of `file`: includes and calls every dependency, in graph order.
/// File 0 also defines the module initializer.
#[must_use]
pub fn render_source(module: usize, file: usize, params: &Params) -> String {
    let deps = dependencies_of(file, params.fanout, params.files_per_module);
    let mut s = String::new();
    for dep in &deps {
        let _ = writeln!(s, "#include \"{}\"", header_name(*dep));
    }
    let _ = writeln!(s, "int func{file}(int a, int b) {{");
    s.push_str("    return a + b");
    for dep in &deps {
        let _ = write!(s, " + func{dep}(a, b)");
    }
    s.push_str(";\n}\n");
    if file == 0 {
        let _ = writeln!(s, "int initModule{module}(int a) {{");
        s.push_str("    return func0(a, a + 1);\n");
        s.push_str("}\n");
    }
    s
}

/// Write the header and source of every file of `module` into `dir`.
///
/// Returns the number of artifacts written. Paths are pushed to `record`
/// only when one is given, so large modules stream without buffering.
///
/// # Errors
/// Stops at and returns the first I/O error from `sink`.
pub fn emit_module(
    sink: &dyn Sink,
    dir: &Path,
    module: usize,
    params: &Params,
    mut record: Option<&mut Vec<PathBuf>>,
) -> io::Result<usize> {
    let mut written = 0;
    for file in 0..params.files_per_module {
        let header = dir.join(header_name(file));
        sink.write_file(&header, &render_header(module, file))?;
        let source = dir.join(source_name(file));
        sink.write_file(&source, &render_source(module, file, params))?;
        written += 2;
        if let Some(paths) = record.as_deref_mut() {
            paths.push(header);
            paths.push(source);
        }
    }
    tracing::debug!(module, files = written, dir = %dir.display(), "module sources written");
    Ok(written)
}
