use aquainfra_core::error::CoreError;

/// User-facing error raised by a process handler.
///
/// The hosting framework translates this into its outward-facing protocol
/// response; only the display message is meant for the requesting user.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// A required request parameter is absent. Raised before any container
    /// is spawned.
    #[error("Missing parameter \"{name}\". {hint}")]
    MissingParameter {
        name: &'static str,
        hint: &'static str,
    },

    /// The container ran and exited non-zero. Carries the message extracted
    /// from its stderr, or the generic fallback.
    #[error("{0}")]
    Execution(String),

    /// Configuration or runtime failure below the handler layer.
    #[error(transparent)]
    Core(#[from] CoreError),
}
