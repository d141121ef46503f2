//! Mann-Kendall trend detection over grouped time series.

use super::DAUGAVA_IMAGE;
use crate::descriptor::{
    ArgStyle, MountLayout, OperationDescriptor, OutputFile, OutputSpec, ParamSpec,
};

pub static DESCRIPTOR: OperationDescriptor = OperationDescriptor {
    id: "trend-analysis-mk",
    image: DAUGAVA_IMAGE,
    arg_style: ArgStyle::RScript {
        script: "trend_analysis_mk.R",
    },
    mounts: MountLayout::IN_OUT,
    params: &[
        ParamSpec::required("input_data", "Please provide a URL to your input data."),
        ParamSpec::required("colnames_relevant", "Please provide column name(s)."),
        ParamSpec::required("colname_time", "Please provide a column name."),
        ParamSpec::required("colname_value", "Please provide a column name."),
    ],
    output_file: OutputFile {
        stem: "trend_analysis_results",
        infix_param: None,
        ext: "csv",
    },
    outputs: &[OutputSpec {
        key: "trend_analysis_results",
        title: "Trend analysis results",
        description: "One Mann-Kendall trend test result per group of the relevant columns.",
    }],
    link_via_out_dir: false,
};
