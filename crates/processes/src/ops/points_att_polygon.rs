//! Spatial join: assign observation points to the study-area polygons they
//! fall into.

use super::DAUGAVA_IMAGE;
use crate::descriptor::{
    ArgStyle, MountLayout, OperationDescriptor, OutputFile, OutputSpec, ParamSpec,
};

pub static DESCRIPTOR: OperationDescriptor = OperationDescriptor {
    id: "points-att-polygon",
    image: DAUGAVA_IMAGE,
    arg_style: ArgStyle::RScript {
        script: "points_att_polygon.R",
    },
    mounts: MountLayout::IN_OUT,
    params: &[
        ParamSpec::required(
            "regions",
            "Please provide a URL to your input study area (as zipped shapefile).",
        ),
        ParamSpec::required("input_data", "Please provide a URL to your input table."),
        ParamSpec::optional("colname_long", "long"),
        ParamSpec::optional("colname_lat", "lat"),
    ],
    output_file: OutputFile {
        stem: "data_merged_with_regions",
        infix_param: None,
        ext: "csv",
    },
    outputs: &[OutputSpec {
        key: "data_merged_with_regions",
        title: "Data merged with regions",
        description: "Input data points, each attributed with the study-area polygon it falls into.",
    }],
    link_via_out_dir: true,
};
