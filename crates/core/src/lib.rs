//! Shared runtime for the AquaINFRA container-backed processing services.
//!
//! Every process handler delegates its actual computation (classification,
//! trend analysis, spatial joins, plotting) to an external container image.
//! This crate holds the pieces those handlers share: runtime configuration,
//! the container invocation builder and runner, user-facing diagnostics
//! extraction from container logs, and deterministic output-file naming.

pub mod config;
pub mod container;
pub mod diagnostics;
pub mod error;
pub mod naming;
