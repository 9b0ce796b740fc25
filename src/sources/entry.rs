use std::collections::HashMap;

const DESKTOP_ENTRY_SECTION: &str = "Desktop Entry";

/// Keys read from the `[Desktop Entry]` section. Everything else,
/// localized variants such as `Name[de]` included, is ignored.
pub const DESKTOP_ENTRY_KEYS: [&str; 6] = ["Name", "Comment", "Exec", "Type", "Terminal", "Icon"];

/// The recognized fields of one `[Desktop Entry]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesktopEntry {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub exec: Option<String>,
    pub entry_type: Option<String>,
    pub terminal: bool,
    pub icon: Option<String>,
}

/// Parses desktop file content.
///
/// Returns `None` when the file has no `[Desktop Entry]` section. Lines
/// that are not `key=value` are skipped, so a damaged file yields an entry
/// with missing fields rather than an error.
pub fn parse_desktop_entry(content: &str) -> Option<DesktopEntry> {
    let mut fields: HashMap<&str, &str> = HashMap::new();
    let mut in_desktop_entry = false;
    let mut found_section = false;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }

        if line.starts_with('[') && line.ends_with(']') {
            in_desktop_entry = &line[1..line.len() - 1] == DESKTOP_ENTRY_SECTION;
            found_section |= in_desktop_entry;
            continue;
        }

        if !in_desktop_entry { continue; }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if DESKTOP_ENTRY_KEYS.contains(&key) {
                fields.insert(key, value.trim());
            }
        }
    }

    if !found_section {
        return None;
    }

    let get = |key: &str| fields.get(key).map(|v| v.to_string());

    Some(DesktopEntry {
        name: get("Name"),
        comment: get("Comment"),
        exec: get("Exec"),
        entry_type: get("Type"),
        terminal: fields.get("Terminal").is_some_and(|v| *v == "true"),
        icon: get("Icon"),
    })
}
