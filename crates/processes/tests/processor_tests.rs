//! End-to-end handler tests against a stub container runtime.
//!
//! `docker_executable` is pointed at a shell script standing in for docker,
//! so the full validate → invoke → capture → respond sequence runs without
//! a container runtime on the test machine.

use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use assert_matches::assert_matches;
use serde_json::{json, Map, Value};

use aquainfra_core::config::RuntimeConfig;
use aquainfra_processes::error::ProcessError;
use aquainfra_processes::{registry, Processor};

/// Write an executable script standing in for the docker binary.
fn write_stub(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("docker-stub.sh");
    let mut f = std::fs::File::create(&path).expect("create stub");
    writeln!(f, "#!/bin/bash").expect("write shebang");
    write!(f, "{body}").expect("write body");
    let mut perms = f.metadata().expect("stub metadata").permissions();
    perms.set_mode(0o755);
    f.set_permissions(perms).expect("chmod stub");
    path
}

fn test_config(download_dir: &Path, stub: &Path) -> Arc<RuntimeConfig> {
    Arc::new(RuntimeConfig {
        download_dir: download_dir.to_path_buf(),
        own_url: "https://aqua.example.org/download".to_string(),
        docker_executable: stub.to_str().expect("stub path").to_string(),
        r_script_dir: None,
        container_timeout_secs: None,
    })
}

fn inputs(value: Value) -> Map<String, Value> {
    value.as_object().expect("object").clone()
}

async fn run_process(
    config: &Arc<RuntimeConfig>,
    id: &str,
    job_id: &str,
    request: Value,
) -> Result<aquainfra_processes::response::ProcessOutputs, ProcessError> {
    let processors = registry(config);
    let processor = processors.get(id).expect("registered process");
    processor.execute(job_id, &inputs(request)).await
}

#[tokio::test]
async fn missing_parameter_fails_before_any_spawn() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let marker = scratch.path().join("spawned");
    let stub = write_stub(
        scratch.path(),
        &format!("touch {}\nexit 0\n", marker.display()),
    );
    let config = test_config(scratch.path(), &stub);

    let err = run_process(&config, "trend-analysis-mk", "1", json!({}))
        .await
        .expect_err("must fail validation");
    assert_matches!(
        err,
        ProcessError::MissingParameter {
            name: "input_data",
            ..
        }
    );
    assert!(!marker.exists(), "no container may be spawned");
}

#[tokio::test]
async fn success_links_the_declared_output() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let stub = write_stub(scratch.path(), "exit 0\n");
    let config = test_config(scratch.path(), &stub);

    let outputs = run_process(
        &config,
        "trend-analysis-mk",
        "c66cecda-9501",
        json!({
            "input_data": "https://aqua.example.org/download/trend_input.csv",
            "colnames_relevant": "group_labels,HELCOM_ID",
            "colname_time": "Year_adj_generated",
            "colname_value": "transparency_m"
        }),
    )
    .await
    .expect("execute");

    let keys: Vec<&String> = outputs.outputs.keys().collect();
    assert_eq!(keys, ["trend_analysis_results"]);
    let link = &outputs.outputs["trend_analysis_results"];
    assert_eq!(
        link.href,
        "https://aqua.example.org/download/trend_analysis_results-c66cecda-9501.csv"
    );
    assert!(!link.title.is_empty());

    // The mount directories must exist after the run.
    assert!(scratch.path().join("in").is_dir());
    assert!(scratch.path().join("out").is_dir());
}

#[tokio::test]
async fn owt_classification_embeds_sensor_and_job_id() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let stub = write_stub(scratch.path(), "exit 0\n");
    let config = test_config(scratch.path(), &stub);

    let outputs = run_process(
        &config,
        "hereon-pyowt",
        "42",
        json!({
            "input_data_url": "a.csv",
            "input_option": "csv",
            "sensor": "HYPER",
            "output_option": 1
        }),
    )
    .await
    .expect("execute");

    let link = &outputs.outputs["owt_classification"];
    assert!(link
        .href
        .ends_with("/out/owt_classification_output_hyper-42.txt"));
    assert!(link.href.contains("42"));
}

#[tokio::test]
async fn stderr_error_line_is_surfaced_verbatim() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let stub = write_stub(
        scratch.path(),
        "echo 'Error: sensor not recognized' >&2\necho '  raise ValueError(...)' >&2\nexit 1\n",
    );
    let config = test_config(scratch.path(), &stub);

    let err = run_process(
        &config,
        "hereon-pyowt",
        "42",
        json!({
            "input_data_url": "a.csv",
            "input_option": "csv",
            "sensor": "HYPER",
            "output_option": 1
        }),
    )
    .await
    .expect_err("must fail");
    assert_matches!(
        err,
        ProcessError::Execution(message) if message == "Error: sensor not recognized"
    );
}

#[tokio::test]
async fn failure_without_error_line_falls_back_to_generic_message() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let stub = write_stub(
        scratch.path(),
        "echo 'Loading required package: sf' >&2\nexit 3\n",
    );
    let config = test_config(scratch.path(), &stub);

    let err = run_process(
        &config,
        "mean-by-group",
        "5",
        json!({
            "input_data": "https://aqua.example.org/download/peri_conv-1.csv",
            "colnames_to_group_by": "group_labels",
            "colname_value": "transparency_m"
        }),
    )
    .await
    .expect_err("must fail");
    assert_matches!(
        err,
        ProcessError::Execution(message) if message == "Running docker container failed."
    );
}

#[tokio::test]
async fn generic_r_image_receives_arguments_in_declared_order() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let record = scratch.path().join("argv.txt");
    let stub = write_stub(
        scratch.path(),
        &format!("printf '%s\\n' \"$@\" > {}\nexit 0\n", record.display()),
    );
    let config = test_config(scratch.path(), &stub);

    run_process(
        &config,
        "peri-conv",
        "9",
        json!({
            "input_data": "https://aqua.example.org/download/data_merged_with_regions-1.csv",
            "colname_date": "visit_date",
            "date_format": "y/m/d"
        }),
    )
    .await
    .expect("execute");

    let recorded = std::fs::read_to_string(&record).expect("read argv record");
    let argv: Vec<&str> = recorded.lines().collect();
    assert_eq!(argv[0..3], ["run", "--rm", "--name"]);
    assert!(argv[3].starts_with("daugava-workflow-image_"));
    assert_eq!(argv[4], "-v");
    assert!(argv[5].ends_with(":/in"));
    assert_eq!(argv[6], "-v");
    assert!(argv[7].ends_with(":/out"));
    assert_eq!(
        argv[8..],
        [
            "-e",
            "R_SCRIPT=peri_conv.R",
            "daugava-workflow-image",
            "--",
            "https://aqua.example.org/download/data_merged_with_regions-1.csv",
            "visit_date",
            "Dec-01:Mar-01,Mar-02:May-30,Jun-01:Aug-30,Sep-01:Nov-30",
            "winter,spring,summer,autumn",
            "True",
            "%Y/%m/%d",
            "/out/peri_conv-9.csv",
        ]
    );
}

#[tokio::test]
async fn grouping_columns_lose_their_spaces() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let record = scratch.path().join("argv.txt");
    let stub = write_stub(
        scratch.path(),
        &format!("printf '%s\\n' \"$@\" > {}\nexit 0\n", record.display()),
    );
    let config = test_config(scratch.path(), &stub);

    run_process(
        &config,
        "mean-by-group",
        "5",
        json!({
            "input_data": "https://aqua.example.org/download/peri_conv-1.csv",
            "colnames_to_group_by": "longitude, latitude, Year_adj_generated",
            "colname_value": "transparency_m"
        }),
    )
    .await
    .expect("execute");

    let recorded = std::fs::read_to_string(&record).expect("read argv record");
    assert!(recorded
        .lines()
        .any(|l| l == "longitude,latitude,Year_adj_generated"));
}

#[tokio::test]
async fn tordera_gloria_fans_out_one_output_per_variable() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let stub = write_stub(scratch.path(), "exit 0\n");
    let config = test_config(scratch.path(), &stub);

    let outputs = run_process(
        &config,
        "tordera-gloria",
        "9",
        json!({
            "file": "channel_sd_day",
            "variable": "flo_out, water_temp",
            "unit": 1,
            "start_date": 20160101,
            "end_date": 20201231,
            "start_date_print": 20190601
        }),
    )
    .await
    .expect("execute");

    let keys: Vec<&String> = outputs.outputs.keys().collect();
    assert_eq!(keys, ["swat_output_file_flo_out", "swat_output_file_water_temp"]);
    assert!(outputs.outputs["swat_output_file_flo_out"]
        .href
        .ends_with("/out/swat_output_file-9-flo_out.csv"));
    assert!(outputs.outputs["swat_output_file_water_temp"]
        .href
        .ends_with("/out/swat_output_file-9-water_temp.csv"));
}

#[tokio::test]
async fn distinct_job_ids_yield_distinct_artifacts() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let stub = write_stub(scratch.path(), "exit 0\n");
    let config = test_config(scratch.path(), &stub);

    let request = json!({
        "regions": "https://maps.example.org/subbasins.zip",
        "input_data": "https://aqua.example.org/download/secchi.json",
    });
    let first = run_process(&config, "points-att-polygon", "job-a", request.clone())
        .await
        .expect("execute");
    let second = run_process(&config, "points-att-polygon", "job-b", request)
        .await
        .expect("execute");
    assert_ne!(
        first.outputs["data_merged_with_regions"].href,
        second.outputs["data_merged_with_regions"].href
    );
}
