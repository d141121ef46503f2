//! Static map of trend results over the study-area polygons.

use super::DAUGAVA_IMAGE;
use crate::descriptor::{
    ArgStyle, MountLayout, OperationDescriptor, OutputFile, OutputSpec, ParamSpec,
};

pub static DESCRIPTOR: OperationDescriptor = OperationDescriptor {
    id: "map-trends-static",
    image: DAUGAVA_IMAGE,
    arg_style: ArgStyle::RScript {
        script: "map_trends_static.R",
    },
    mounts: MountLayout::IN_OUT,
    params: &[
        ParamSpec::required("regions", "Please provide a URL to your input data."),
        ParamSpec::required("input_data", "Please provide a URL to your input data."),
        ParamSpec::required("colname_id_trend", "Please provide a column name."),
        ParamSpec::required("colname_region_id", "Please provide a column name."),
        ParamSpec::required("colname_group", "Please provide a column name."),
        ParamSpec::required("p_value_threshold", "Please provide a value."),
        ParamSpec::required("colname_p_value", "Please provide a column name."),
    ],
    output_file: OutputFile {
        stem: "map_trends_static",
        infix_param: None,
        ext: "png",
    },
    outputs: &[OutputSpec {
        key: "trend_map",
        title: "Trend map",
        description: "Static map of the study regions colored by trend direction and significance.",
    }],
    link_via_out_dir: false,
};
