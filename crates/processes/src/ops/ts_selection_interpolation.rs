//! Select sufficiently complete time series and interpolate their gaps.

use super::DAUGAVA_IMAGE;
use crate::descriptor::{
    ArgStyle, MountLayout, OperationDescriptor, OutputFile, OutputSpec, ParamSpec,
};

pub static DESCRIPTOR: OperationDescriptor = OperationDescriptor {
    id: "ts-selection-interpolation",
    image: DAUGAVA_IMAGE,
    arg_style: ArgStyle::RScript {
        script: "ts_selection_interpolation.R",
    },
    mounts: MountLayout::IN_OUT,
    params: &[
        ParamSpec::required("input_data", "Please provide a URL to your input table."),
        ParamSpec::required("colnames_relevant", "Please provide column name(s)."),
        ParamSpec::required("missing_threshold_percentage", "Please provide a value."),
        ParamSpec::required("colname_year", "Please provide a column name."),
        ParamSpec::required("colname_value", "Please provide a column name."),
        ParamSpec::required("min_data_point", "Please provide a value."),
    ],
    output_file: OutputFile {
        stem: "interpolated_time_series",
        infix_param: None,
        ext: "csv",
    },
    outputs: &[OutputSpec {
        key: "interpolated_time_series",
        title: "Interpolated time series",
        description: "Time series that passed the completeness thresholds, with gaps interpolated.",
    }],
    link_via_out_dir: true,
};
