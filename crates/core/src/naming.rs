//! Deterministic output artifact naming.
//!
//! Every run writes its artifact into the shared output directory, so the
//! filename must be unique per job. Convention:
//! `{stem}{_infix}-{job_id}.{ext}`.

/// Generate the output filename for one process run.
///
/// - `stem`: operation-specific prefix, e.g. `"trend_analysis_results"`
/// - `infix`: optional request-derived discriminator (lowercased), e.g. the
///   sensor name for the optical water type classification
/// - `job_id`: the job identifier assigned by the hosting framework
/// - `ext`: file extension without the dot
///
/// # Examples
///
/// ```
/// use aquainfra_core::naming::output_filename;
///
/// assert_eq!(
///     output_filename("trend_analysis_results", None, "abc123", "csv"),
///     "trend_analysis_results-abc123.csv"
/// );
/// assert_eq!(
///     output_filename("owt_classification_output", Some("HYPER"), "42", "txt"),
///     "owt_classification_output_hyper-42.txt"
/// );
/// ```
pub fn output_filename(stem: &str, infix: Option<&str>, job_id: &str, ext: &str) -> String {
    let mut name = String::from(stem);
    if let Some(infix) = infix {
        name.push('_');
        name.push_str(&infix.to_lowercase());
    }
    name.push('-');
    name.push_str(job_id);
    name.push('.');
    name.push_str(ext);
    name
}
