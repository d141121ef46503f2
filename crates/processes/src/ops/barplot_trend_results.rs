//! Bar plot rendering of trend analysis results.

use super::DAUGAVA_IMAGE;
use crate::descriptor::{
    ArgStyle, MountLayout, OperationDescriptor, OutputFile, OutputSpec, ParamSpec,
};

pub static DESCRIPTOR: OperationDescriptor = OperationDescriptor {
    id: "barplot-trend-results",
    image: DAUGAVA_IMAGE,
    arg_style: ArgStyle::RScript {
        script: "barplot_trend_results.R",
    },
    mounts: MountLayout::IN_OUT,
    params: &[
        ParamSpec::required("input_data", "Please provide a URL to your input data."),
        ParamSpec::required("colname_id", "Please provide a column name."),
        ParamSpec::required("colname_test_value", "Please provide a column name."),
        ParamSpec::required("colname_p_value", "Please provide a column name."),
        ParamSpec::required("p_value_threshold", "Please provide a value."),
        ParamSpec::required("colname_group", "Please provide a column name."),
    ],
    output_file: OutputFile {
        stem: "barplot_image",
        infix_param: None,
        ext: "png",
    },
    outputs: &[OutputSpec {
        key: "barplot_image",
        title: "Bar plot of trend results",
        description: "Bar plot of the trend test statistic per region, marking significance.",
    }],
    link_via_out_dir: false,
};
