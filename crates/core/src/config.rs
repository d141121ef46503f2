//! Runtime configuration shared by all process handlers.
//!
//! The deployment provides a small JSON file naming the shared download
//! directory, the public URL it is served under, and the container runtime
//! to invoke. The file path is resolved from an environment variable once at
//! process startup; handlers receive the parsed configuration at
//! construction time and never re-read it per request.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CoreError;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "AQUAINFRA_CONFIG_FILE";

/// Fallback configuration file path when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "./config.json";

/// Parsed deployment configuration.
///
/// | Key                      | Required | Default    |
/// |--------------------------|----------|------------|
/// | `download_dir`           | yes      | none       |
/// | `own_url` / `download_url` | yes    | none       |
/// | `docker_executable`      | no       | `"docker"` |
/// | `r_script_dir`           | no       | absent     |
/// | `container_timeout_secs` | no       | absent (no timeout) |
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    /// Host path to the shared storage directory. Containers read from
    /// `<download_dir>/in` and write to `<download_dir>/out`.
    pub download_dir: PathBuf,

    /// Public base URL under which `download_dir` is served by the static
    /// file server.
    #[serde(alias = "download_url")]
    pub own_url: String,

    /// Container runtime executable.
    #[serde(default = "default_docker_executable")]
    pub docker_executable: String,

    /// Host directory with the R scripts baked into the generic workflow
    /// images. Advisory; carried for deployments that bind-mount scripts.
    #[serde(default)]
    pub r_script_dir: Option<PathBuf>,

    /// Optional wall-clock limit for a single container run. Absent means
    /// the container is trusted to terminate on its own.
    #[serde(default)]
    pub container_timeout_secs: Option<u64>,
}

fn default_docker_executable() -> String {
    "docker".to_string()
}

impl RuntimeConfig {
    /// Resolve the configuration file path from the environment and parse it.
    pub fn resolve() -> Result<Self, CoreError> {
        Self::from_file(&config_path())
    }

    /// Parse the configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path).map_err(|err| {
            CoreError::Config(format!("cannot read {}: {err}", path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|err| {
            CoreError::Config(format!("cannot parse {}: {err}", path.display()))
        })
    }

    /// Host directory mounted read-side into containers.
    pub fn input_dir(&self) -> PathBuf {
        self.download_dir.join("in")
    }

    /// Host directory the containers write their artifacts into.
    pub fn output_dir(&self) -> PathBuf {
        self.download_dir.join("out")
    }
}

/// Configuration file path: [`CONFIG_PATH_ENV`] if set, else
/// [`DEFAULT_CONFIG_PATH`].
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(json: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().expect("create temp file");
        f.write_all(json.as_bytes()).expect("write config");
        f
    }

    #[test]
    fn minimal_config_applies_defaults() {
        let f = write_config(
            r#"{"download_dir": "/var/lib/aquainfra", "own_url": "https://aqua.example.org/download"}"#,
        );
        let config = RuntimeConfig::from_file(f.path()).expect("parse");
        assert_eq!(config.download_dir, PathBuf::from("/var/lib/aquainfra"));
        assert_eq!(config.own_url, "https://aqua.example.org/download");
        assert_eq!(config.docker_executable, "docker");
        assert!(config.r_script_dir.is_none());
        assert!(config.container_timeout_secs.is_none());
    }

    #[test]
    fn download_url_alias_accepted() {
        let f = write_config(
            r#"{"download_dir": "/data", "download_url": "https://aqua.example.org/dl"}"#,
        );
        let config = RuntimeConfig::from_file(f.path()).expect("parse");
        assert_eq!(config.own_url, "https://aqua.example.org/dl");
    }

    #[test]
    fn full_config() {
        let f = write_config(
            r#"{
                "download_dir": "/data",
                "own_url": "https://aqua.example.org/dl",
                "docker_executable": "/usr/local/bin/podman",
                "r_script_dir": "/opt/r-scripts",
                "container_timeout_secs": 900
            }"#,
        );
        let config = RuntimeConfig::from_file(f.path()).expect("parse");
        assert_eq!(config.docker_executable, "/usr/local/bin/podman");
        assert_eq!(config.r_script_dir, Some(PathBuf::from("/opt/r-scripts")));
        assert_eq!(config.container_timeout_secs, Some(900));
    }

    #[test]
    fn missing_required_key_is_config_error() {
        let f = write_config(r#"{"own_url": "https://aqua.example.org/dl"}"#);
        let err = RuntimeConfig::from_file(f.path()).expect_err("must fail");
        assert!(err.to_string().contains("download_dir"));
    }

    #[test]
    fn unreadable_file_is_config_error() {
        let err = RuntimeConfig::from_file(Path::new("/nonexistent/config.json"))
            .expect_err("must fail");
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn in_out_dirs_derive_from_download_dir() {
        let f = write_config(r#"{"download_dir": "/data", "own_url": "u"}"#);
        let config = RuntimeConfig::from_file(f.path()).expect("parse");
        assert_eq!(config.input_dir(), PathBuf::from("/data/in"));
        assert_eq!(config.output_dir(), PathBuf::from("/data/out"));
    }
}
