//! Interactive HTML map of data points over the study-area polygons.

use super::DAUGAVA_IMAGE;
use crate::descriptor::{
    ArgStyle, MountLayout, OperationDescriptor, OutputFile, OutputSpec, ParamSpec,
};

pub static DESCRIPTOR: OperationDescriptor = OperationDescriptor {
    id: "map-shapefile-points",
    image: DAUGAVA_IMAGE,
    arg_style: ArgStyle::RScript {
        script: "map_shapefile_points.R",
    },
    mounts: MountLayout::IN_OUT,
    params: &[
        ParamSpec::required("regions", "Please provide a URL to your input data."),
        ParamSpec::required("input_data", "Please provide a URL to your input data."),
        ParamSpec::required("colname_long", "Please provide a column name."),
        ParamSpec::required("colname_lat", "Please provide a column name."),
        ParamSpec::required("colname_value_name", "Please provide a column name."),
        ParamSpec::required("colname_region_id", "Please provide a column name."),
    ],
    output_file: OutputFile {
        stem: "interactive_map",
        infix_param: None,
        ext: "html",
    },
    outputs: &[OutputSpec {
        key: "interactive_map",
        title: "Interactive map",
        description: "Interactive HTML map of the data points over the study-area polygons.",
    }],
    link_via_out_dir: false,
};
