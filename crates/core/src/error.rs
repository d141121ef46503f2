/// Error type for the shared container runtime.
///
/// Note that a container exiting non-zero is *not* an error at this layer;
/// it is reported through [`crate::container::RunOutcome`] and interpreted by
/// the calling handler.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to launch container runtime {executable:?}: {source}")]
    Spawn {
        executable: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Container run exceeded {limit_secs}s and was killed")]
    Timeout { limit_secs: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
