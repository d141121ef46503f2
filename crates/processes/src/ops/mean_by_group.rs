//! Group-wise means of a value column.

use super::DAUGAVA_IMAGE;
use crate::descriptor::{
    ArgStyle, MountLayout, OperationDescriptor, OutputFile, OutputSpec, ParamSpec, Transform,
};

pub static DESCRIPTOR: OperationDescriptor = OperationDescriptor {
    id: "mean-by-group",
    image: DAUGAVA_IMAGE,
    arg_style: ArgStyle::RScript {
        script: "mean_by_group.R",
    },
    mounts: MountLayout::IN_OUT,
    params: &[
        ParamSpec::required("input_data", "Please provide a URL to your input data."),
        // Users paste column lists with spaces after the commas.
        ParamSpec::required("colnames_to_group_by", "Please provide column name(s).")
            .with_transform(Transform::StripSpaces),
        ParamSpec::required("colname_value", "Please provide a column name."),
    ],
    output_file: OutputFile {
        stem: "mean_by_group",
        infix_param: None,
        ext: "csv",
    },
    outputs: &[OutputSpec {
        key: "mean_by_group",
        title: "Mean by group",
        description: "Mean of the value column per group of the grouping columns.",
    }],
    link_via_out_dir: true,
};
