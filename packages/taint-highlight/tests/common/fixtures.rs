//! Test fixture generators

use std::fs;
use std::path::{Path, PathBuf};

/// Small C program with one tainted flow: getenv → strcpy → system
pub const VULN_C: &str = concat!(
    "#include <stdlib.h>\n",
    "#include <string.h>\n",
    "\n",
    "int main(void) {\n",
    "    char *input = getenv(\"CMD\");\n",
    "    char buf[64];\n",
    "    strcpy(buf, input);\n",
    "    system(buf);\n",
    "    return 0;\n",
    "}\n",
);

/// Trace over `VULN_C`, as the analysis tool writes it
pub const VULN_TRACE: &str = "{ ln: 5 cl: 11 fl: vuln.c } --> { ln: 7 cl: 17 fl: vuln.c } --> { ln: 8 cl: 12 fl: vuln.c }\n";

/// Format one trace segment
pub fn segment(line: u32, column: u32, file: &str) -> String {
    format!("{{ ln: {line} cl: {column} fl: {file} }}")
}

/// Join segments the way the analysis tool does
pub fn trace_of(segments: &[String]) -> String {
    segments.join(" --> ")
}

/// Write `VULN_C` (and optionally a trace) into `dir`, returning the source path
pub fn write_project(dir: &Path, trace_name: Option<&str>, trace: &str) -> PathBuf {
    let source = dir.join("vuln.c");
    fs::write(&source, VULN_C).unwrap();
    if let Some(name) = trace_name {
        fs::write(dir.join(name), trace).unwrap();
    }
    source
}
