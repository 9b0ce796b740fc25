/// Entry type that marks a launchable application.
pub const APPLICATION_TYPE: &str = "Application";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRecord {
    pub name: String,                     // Display name, also the dedup key
    pub description: String,              // Comment= line
    pub exec_command: String,             // Exec= as declared, field codes included
    pub resolved_command: Option<String>, // Absolute, invocation-ready command
    pub entry_type: String,               // Type= line
    pub is_terminal_app: bool,
    pub icon_path: String, // Absolute icon path, empty when unresolved
}

impl ApplicationRecord {
    /// Whether the record belongs in the searchable set.
    ///
    /// Terminal apps are only rejected when `exclude_terminal_apps` is set.
    pub fn is_searchable(&self, exclude_terminal_apps: bool) -> bool {
        !self.name.is_empty()
            && !self.description.is_empty()
            && self.resolved_command.is_some()
            && self.entry_type == APPLICATION_TYPE
            && !(exclude_terminal_apps && self.is_terminal_app)
    }
}
