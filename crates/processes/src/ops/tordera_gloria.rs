//! SWAT+ scenario run for the Tordera catchment (GLORIA storm case study).
//!
//! One run extracts a time series per requested model variable, so the
//! response fans out into one download link per variable; this is the one
//! operation the descriptor table cannot express.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value};

use aquainfra_core::config::RuntimeConfig;
use aquainfra_core::container::ContainerInvocation;
use aquainfra_core::diagnostics::{user_error_message, FALLBACK_ERROR};

use super::CATALUNYA_IMAGE;
use crate::error::ProcessError;
use crate::request::ProcessRequest;
use crate::response::{download_href, ProcessOutputs};
use crate::Processor;

const DEFAULT_PROJECT_URL: &str = "https://raw.githubusercontent.com/AmandaBatlle/AquaINFRA_CaseUse_MedInlandModel/refs/heads/main/example_inputs/project.zip";
const DEFAULT_PAR_CAL_URL: &str = "https://raw.githubusercontent.com/AmandaBatlle/AquaINFRA_CaseUse_MedInlandModel/refs/heads/main/example_inputs/par_cal.json";

const OUTPUT_TITLE: &str = "SWAT+ output series";
const OUTPUT_DESCRIPTION: &str =
    "Time series extracted from the SWAT+ run for one requested variable.";

pub struct TorderaGloria {
    config: Arc<RuntimeConfig>,
}

impl TorderaGloria {
    pub const ID: &'static str = "tordera-gloria";

    pub fn new(config: Arc<RuntimeConfig>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Processor for TorderaGloria {
    fn id(&self) -> &'static str {
        Self::ID
    }

    async fn execute(
        &self,
        job_id: &str,
        inputs: &Map<String, Value>,
    ) -> Result<ProcessOutputs, ProcessError> {
        let request = ProcessRequest::new(inputs);
        let project = request.optional("TextInOut_URL", DEFAULT_PROJECT_URL);
        let par_cal = request.optional("par_cal", DEFAULT_PAR_CAL_URL);
        let swat_file = request.optional("file", "channel_sd_day");
        let variable = request.optional("variable", "flo_out,water_temp");
        let unit = request.optional("unit", "1");
        let start_date = request.optional("start_date", "20160101");
        let end_date = request.optional("end_date", "20160228");
        let start_date_print = request.optional("start_date_print", "20160115");

        let variables: Vec<String> = variable
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect();
        let filenames: Vec<String> = variables
            .iter()
            .map(|var| format!("swat_output_file-{job_id}-{var}.csv"))
            .collect();

        let outcome = ContainerInvocation::new(&self.config.docker_executable, CATALUNYA_IMAGE)
            .timeout(self.config.container_timeout_secs.map(Duration::from_secs))
            .mount(self.config.input_dir(), "/in")
            .mount(self.config.output_dir(), "/out")
            .env("R_SCRIPT", "swat_tordera_gloria.R")
            .arg("--")
            .args([
                project,
                par_cal,
                swat_file,
                variable.replace(' ', ""),
                unit,
                start_date,
                end_date,
                start_date_print,
            ])
            .arg("/out/")
            .arg(filenames.join(","))
            .run()
            .await?;
        outcome.log_output();

        if !outcome.success() {
            tracing::error!(
                process = Self::ID,
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

        let mut outputs = ProcessOutputs::default();
        for (var, filename) in variables.iter().zip(&filenames) {
            outputs.insert(
                format!("swat_output_file_{var}"),
                OUTPUT_TITLE,
                OUTPUT_DESCRIPTION,
                download_href(&self.config.own_url, true, filename),
            );
        }
        Ok(outputs)
    }
}
