//! Declarative operation descriptors and the generic processor over them.
//!
//! The deployment grew one handler per operation, each repeating the same
//! validate → run container → link artifact sequence. Here that sequence
//! lives once in [`TableProcessor`]; an operation is reduced to a static
//! [`OperationDescriptor`] naming its image, parameters, argument layout and
//! outputs. Operations whose behavior does not fit the table implement
//! [`Processor`](crate::Processor) directly (see `ops::tordera_gloria`).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value};

use aquainfra_core::config::RuntimeConfig;
use aquainfra_core::container::ContainerInvocation;
use aquainfra_core::diagnostics::{user_error_message, FALLBACK_ERROR};
use aquainfra_core::naming::output_filename;

use crate::error::ProcessError;
use crate::request::ProcessRequest;
use crate::response::{download_href, ProcessOutputs};
use crate::Processor;

/// Whether a parameter must be present in the request.
#[derive(Debug, Clone, Copy)]
pub enum Requirement {
    /// Absent means validation failure; `hint` completes the error message.
    Required { hint: &'static str },
    /// Absent means `default` is substituted.
    Optional { default: &'static str },
}

/// Rewriting applied to a parameter value before it becomes a container
/// argument.
#[derive(Debug, Clone, Copy)]
pub enum Transform {
    Verbatim,
    /// Remove every space, e.g. `"a, b"` to `"a,b"` for column lists.
    StripSpaces,
    /// Rewrite a compact date pattern to the R `strptime` form:
    /// `y` to `%Y`, `m` to `%m`, `d` to `%d`, everything else kept.
    RDateFormat,
}

impl Transform {
    fn apply(self, value: String) -> String {
        match self {
            Transform::Verbatim => value,
            Transform::StripSpaces => value.replace(' ', ""),
            Transform::RDateFormat => r_date_format(&value),
        }
    }
}

fn r_date_format(pattern: &str) -> String {
    let mut rewritten = String::new();
    for ch in pattern.to_lowercase().chars() {
        match ch {
            'y' => rewritten.push_str("%Y"),
            'm' => rewritten.push_str("%m"),
            'd' => rewritten.push_str("%d"),
            other => rewritten.push(other),
        }
    }
    rewritten
}

/// One request parameter, in container-argument order.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub requirement: Requirement,
    pub transform: Transform,
}

impl ParamSpec {
    pub const fn required(name: &'static str, hint: &'static str) -> Self {
        Self {
            name,
            requirement: Requirement::Required { hint },
            transform: Transform::Verbatim,
        }
    }

    pub const fn optional(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            requirement: Requirement::Optional { default },
            transform: Transform::Verbatim,
        }
    }

    pub const fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

/// How parameter values are laid out on the container command line.
#[derive(Debug, Clone, Copy)]
pub enum ArgStyle {
    /// The generic R workflow images: `R_SCRIPT=<script>` in the
    /// environment, then `-- <values...> <container-out>/<filename>`.
    RScript { script: &'static str },
    /// Flag/value pairs, one flag per parameter, closed by
    /// `<output_flag> <container-out>/<filename>`.
    Flagged {
        flags: &'static [&'static str],
        output_flag: &'static str,
    },
}

/// Host directory mounts for the run.
#[derive(Debug, Clone, Copy)]
pub struct MountLayout {
    /// Mount `<download_dir>/in` at `/in`.
    pub with_input: bool,
    /// In-container path of the output mount.
    pub container_out: &'static str,
}

impl MountLayout {
    /// The layout of the generic R workflow images.
    pub const IN_OUT: Self = Self {
        with_input: true,
        container_out: "/out",
    };
}

/// Output artifact naming: `{stem}{_infix}-{job_id}.{ext}`.
#[derive(Debug, Clone, Copy)]
pub struct OutputFile {
    pub stem: &'static str,
    /// Parameter whose lowercased value is embedded into the filename.
    pub infix_param: Option<&'static str>,
    pub ext: &'static str,
}

/// One declared response output.
#[derive(Debug, Clone, Copy)]
pub struct OutputSpec {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Complete static description of one operation.
#[derive(Debug)]
pub struct OperationDescriptor {
    pub id: &'static str,
    pub image: &'static str,
    pub arg_style: ArgStyle,
    pub mounts: MountLayout,
    pub params: &'static [ParamSpec],
    pub output_file: OutputFile,
    pub outputs: &'static [OutputSpec],
    /// Whether the download link goes through the `out/` path segment.
    pub link_via_out_dir: bool,
}

/// Generic processor executing any [`OperationDescriptor`].
pub struct TableProcessor {
    descriptor: &'static OperationDescriptor,
    config: Arc<RuntimeConfig>,
}

impl TableProcessor {
    pub fn new(descriptor: &'static OperationDescriptor, config: Arc<RuntimeConfig>) -> Self {
        if let ArgStyle::Flagged { flags, .. } = descriptor.arg_style {
            debug_assert_eq!(
                flags.len(),
                descriptor.params.len(),
                "descriptor {}: one flag per parameter",
                descriptor.id
            );
        }
        Self { descriptor, config }
    }

    /// Validate the request and render every parameter value, in declared
    /// order. Fails on the first missing required parameter, before any
    /// container is spawned.
    fn collect_values(&self, request: &ProcessRequest<'_>) -> Result<Vec<String>, ProcessError> {
        self.descriptor
            .params
            .iter()
            .map(|param| {
                let value = match param.requirement {
                    Requirement::Required { hint } => request.required(param.name, hint)?,
                    Requirement::Optional { default } => request.optional(param.name, default),
                };
                Ok(param.transform.apply(value))
            })
            .collect()
    }

    fn filename(&self, values: &[String], job_id: &str) -> String {
        let file = &self.descriptor.output_file;
        let infix = file.infix_param.map(|name| {
            let position = self
                .descriptor
                .params
                .iter()
                .position(|p| p.name == name)
                .expect("infix parameter is declared");
            values[position].as_str()
        });
        output_filename(file.stem, infix, job_id, file.ext)
    }

    fn build_invocation(&self, values: Vec<String>, filename: &str) -> ContainerInvocation {
        let descriptor = self.descriptor;
        let mut invocation =
            ContainerInvocation::new(&self.config.docker_executable, descriptor.image).timeout(
                self.config
                    .container_timeout_secs
                    .map(Duration::from_secs),
            );
        if descriptor.mounts.with_input {
            invocation = invocation.mount(self.config.input_dir(), "/in");
        }
        invocation = invocation.mount(self.config.output_dir(), descriptor.mounts.container_out);

        let output_path = format!("{}/{filename}", descriptor.mounts.container_out);
        match descriptor.arg_style {
            ArgStyle::RScript { script } => invocation
                .env("R_SCRIPT", script)
                .arg("--")
                .args(values)
                .arg(output_path),
            ArgStyle::Flagged { flags, output_flag } => {
                for (flag, value) in flags.iter().zip(values) {
                    invocation = invocation.arg(*flag).arg(value);
                }
                invocation.arg(output_flag).arg(output_path)
            }
        }
    }
}

#[async_trait]
impl Processor for TableProcessor {
    fn id(&self) -> &'static str {
        self.descriptor.id
    }

    async fn execute(
        &self,
        job_id: &str,
        inputs: &Map<String, Value>,
    ) -> Result<ProcessOutputs, ProcessError> {
        let request = ProcessRequest::new(inputs);
        let values = self.collect_values(&request)?;
        let filename = self.filename(&values, job_id);

        let outcome = self.build_invocation(values, &filename).run().await?;
        outcome.log_output();

        if !outcome.success() {
            tracing::error!(
                process = self.descriptor.id,
                exit_code = outcome.exit_code,
                "container run failed"
            );
            let message = user_error_message(&outcome.stderr);
            return Err(ProcessError::Execution(if message.is_empty() {
                FALLBACK_ERROR.to_string()
            } else {
                message
            }));
        }

        let href = download_href(
            &self.config.own_url,
            self.descriptor.link_via_out_dir,
            &filename,
        );
        let mut outputs = ProcessOutputs::default();
        for output in self.descriptor.outputs {
            outputs.insert(output.key, output.title, output.description, href.clone());
        }
        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_format_rewrite() {
        assert_eq!(r_date_format("y-m-d"), "%Y-%m-%d");
        assert_eq!(r_date_format("d.m.y"), "%d.%m.%Y");
        assert_eq!(r_date_format("Y/M/D"), "%Y/%m/%d");
        assert_eq!(r_date_format(""), "");
    }

    #[test]
    fn strip_spaces_transform() {
        assert_eq!(
            Transform::StripSpaces.apply("long, lat, Year_adj_generated".to_string()),
            "long,lat,Year_adj_generated"
        );
    }

    #[test]
    fn verbatim_transform_keeps_value() {
        assert_eq!(
            Transform::Verbatim.apply("Dec-01:Mar-01,Mar-02:May-30".to_string()),
            "Dec-01:Mar-01,Mar-02:May-30"
        );
    }
}
