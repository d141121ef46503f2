//! Process handlers for the AquaINFRA container-backed computations.
//!
//! Each registered operation validates its request parameters, launches one
//! containerized worker run through `aquainfra-core`, and answers with
//! download links to the artifacts the container wrote, or with a short
//! user-facing error. The hosting web-processing framework owns HTTP
//! routing and job bookkeeping; it builds the [`registry`] once at startup
//! (with the configuration resolved once, not per request) and dispatches
//! one [`Processor::execute`] call per job.

pub mod descriptor;
pub mod error;
pub mod ops;
pub mod request;
pub mod response;

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use aquainfra_core::config::RuntimeConfig;

use crate::descriptor::{OperationDescriptor, TableProcessor};
use crate::error::ProcessError;
use crate::response::ProcessOutputs;

/// One registered operation: the seam called by the hosting framework.
#[async_trait]
pub trait Processor: Send + Sync {
    /// Stable process identifier, e.g. `"trend-analysis-mk"`.
    fn id(&self) -> &'static str;

    /// Run one job. `job_id` is assigned by the hosting framework and
    /// namespaces the output artifacts.
    async fn execute(
        &self,
        job_id: &str,
        inputs: &Map<String, Value>,
    ) -> Result<ProcessOutputs, ProcessError>;
}

/// Build all registered processors, keyed by process identifier.
pub fn registry(config: &Arc<RuntimeConfig>) -> BTreeMap<&'static str, Box<dyn Processor>> {
    let table = |descriptor: &'static OperationDescriptor| -> Box<dyn Processor> {
        Box::new(TableProcessor::new(descriptor, config.clone()))
    };
    let processors: Vec<Box<dyn Processor>> = vec![
        table(&ops::points_att_polygon::DESCRIPTOR),
        table(&ops::peri_conv::DESCRIPTOR),
        table(&ops::mean_by_group::DESCRIPTOR),
        table(&ops::ts_selection_interpolation::DESCRIPTOR),
        table(&ops::trend_analysis_mk::DESCRIPTOR),
        table(&ops::barplot_trend_results::DESCRIPTOR),
        table(&ops::map_trends_static::DESCRIPTOR),
        table(&ops::map_shapefile_points::DESCRIPTOR),
        table(&ops::swat_mitgcm_connection::DESCRIPTOR),
        table(&ops::owt_classification::DESCRIPTOR),
        Box::new(ops::tordera_gloria::TorderaGloria::new(config.clone())),
    ];
    processors.into_iter().map(|p| (p.id(), p)).collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn test_config() -> Arc<RuntimeConfig> {
        Arc::new(RuntimeConfig {
            download_dir: PathBuf::from("/tmp/aquainfra"),
            own_url: "https://aqua.example.org/download".to_string(),
            docker_executable: "docker".to_string(),
            r_script_dir: None,
            container_timeout_secs: None,
        })
    }

    #[test]
    fn registry_contains_every_operation() {
        let registry = registry(&test_config());
        let ids: Vec<&str> = registry.keys().copied().collect();
        assert_eq!(
            ids,
            [
                "barplot-trend-results",
                "hereon-pyowt",
                "map-shapefile-points",
                "map-trends-static",
                "mean-by-group",
                "peri-conv",
                "points-att-polygon",
                "swat-mitgcm-connection",
                "tordera-gloria",
                "trend-analysis-mk",
                "ts-selection-interpolation",
            ]
        );
    }

    #[test]
    fn registry_keys_match_processor_ids() {
        for (key, processor) in registry(&test_config()) {
            assert_eq!(key, processor.id());
        }
    }
}
