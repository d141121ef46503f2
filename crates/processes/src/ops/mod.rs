//! The registered operations, one module per process.
//!
//! Most operations are fully described by a static
//! [`OperationDescriptor`](crate::descriptor::OperationDescriptor);
//! `tordera_gloria` fans out into one output per requested variable and
//! implements [`Processor`](crate::Processor) directly.

pub mod barplot_trend_results;
pub mod map_shapefile_points;
pub mod map_trends_static;
pub mod mean_by_group;
pub mod owt_classification;
pub mod peri_conv;
pub mod points_att_polygon;
pub mod swat_mitgcm_connection;
pub mod tordera_gloria;
pub mod trend_analysis_mk;
pub mod ts_selection_interpolation;

/// Generic R workflow image of the Baltic (HELCOM) tool chain. The script
/// to run inside is selected via the `R_SCRIPT` environment variable.
pub(crate) const DAUGAVA_IMAGE: &str = "daugava-workflow-image";

/// R workflow image of the Catalan coastal case study (Tordera catchment).
pub(crate) const CATALUNYA_IMAGE: &str = "catalunya-tordera-image";
