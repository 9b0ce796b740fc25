use std::path::Path;

/// Resolves an `Icon=` value to a path usable by the host.
///
/// Only absolute paths are supported. Theme names (`firefox`) and relative
/// paths would need an icon theme lookup and resolve to an empty string.
pub fn resolve_icon(icon: &str) -> String {
    if !icon.is_empty() && Path::new(icon).is_absolute() {
        icon.to_string()
    } else {
        String::new()
    }
}
