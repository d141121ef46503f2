//! User-facing diagnostics extracted from container logs.
//!
//! The workflow containers report failures as free-form text on stderr, so
//! the best we can do for the user is a heuristic scan: keep the lines that
//! look like error reports, drop the ones that look like interpreter
//! traceback frames. False positives and negatives are expected; callers
//! must treat an empty result as "no usable message" and substitute
//! [`FALLBACK_ERROR`].

/// Generic message used when nothing usable could be extracted from stderr.
pub const FALLBACK_ERROR: &str = "Running docker container failed.";

/// Extract a short user-facing message from a container's stderr.
///
/// Scans line by line: blank lines are skipped, lines containing a
/// case-insensitive `"error"` are kept, except those that also contain
/// `"raise"` (traceback frames of the embedded runtime). Kept lines are
/// trimmed and concatenated without a separator. Returns an empty string
/// when no line matches.
pub fn user_error_message(stderr: &str) -> String {
    let mut message = String::new();
    for line in stderr.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let lowered = trimmed.to_lowercase();
        if !lowered.contains("error") || lowered.contains("raise") {
            continue;
        }
        message.push_str(trimmed);
    }
    message
}
