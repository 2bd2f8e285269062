use tracing::Level;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UIMode {
    /// Project form, action buttons and command output.
    #[default]
    Form,
    /// Picking the public directory.
    Browse,
    /// The application's own `tracing` output.
    Diagnostics {
        /// Substring to match; a leading `-` excludes matching modules.
        filter: Option<String>,
        level: Level,
    },
}
