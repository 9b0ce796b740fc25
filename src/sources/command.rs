use regex::Regex;
use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

// First field code only (%f, %U, %i, ...). Substitution is not supported.
static FIELD_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" %[A-Za-z]").expect("field code pattern is valid"));

/// Directories consulted when resolving a bare program name, in order.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    #[cfg(test)]
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    pub fn from_env() -> Self {
        let dirs = env::var_os("PATH")
            .map(|paths| env::split_paths(&paths).collect())
            .unwrap_or_default();
        Self { dirs }
    }

    /// Locates `program` the way a shell would: names containing a slash
    /// are taken as paths, anything else is looked up in each directory.
    pub fn find(&self, program: &str) -> Option<PathBuf> {
        if program.contains('/') {
            let path = Path::new(program);
            return is_executable(path).then(|| absolute(path)).flatten();
        }

        self.dirs.iter().find_map(|dir| {
            // An empty PATH component means the working directory.
            let candidate = if dir.as_os_str().is_empty() {
                PathBuf::from(".").join(program)
            } else {
                dir.join(program)
            };
            is_executable(&candidate).then(|| absolute(&candidate)).flatten()
        })
    }
}

fn is_executable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|metadata| metadata.is_file() && metadata.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

fn absolute(path: &Path) -> Option<PathBuf> {
    std::path::absolute(path).ok()
}

/// Turns an `Exec=` value into an absolute command line.
///
/// Arguments are split on single spaces and passed through untouched, so
/// runs of spaces survive as empty arguments. Returns `None` when the
/// program cannot be found on the search path.
pub fn resolve_command(exec: &str, search_path: &SearchPath) -> Option<String> {
    let exec = exec.trim();
    if exec.is_empty() {
        return None;
    }

    let stripped = FIELD_CODE.replacen(exec, 1, "");
    let mut tokens = stripped.split(' ');
    let program = tokens.next().filter(|token| !token.is_empty())?;

    let Some(binary) = search_path.find(program) else {
        log::debug!("'{}' not found on search path", program);
        return None;
    };

    let mut parts = vec![binary.to_string_lossy().into_owned()];
    parts.extend(tokens.map(str::to_string));
    Some(parts.join(" "))
}
