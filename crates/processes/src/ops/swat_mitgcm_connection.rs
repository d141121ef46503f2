//! Join SWAT+ flow and water temperature output into the MITgcm coupling
//! table.

use super::CATALUNYA_IMAGE;
use crate::descriptor::{
    ArgStyle, MountLayout, OperationDescriptor, OutputFile, OutputSpec, ParamSpec,
};

pub static DESCRIPTOR: OperationDescriptor = OperationDescriptor {
    id: "swat-mitgcm-connection",
    image: CATALUNYA_IMAGE,
    arg_style: ArgStyle::RScript {
        script: "swat_mitgcm_connection.R",
    },
    mounts: MountLayout::IN_OUT,
    params: &[
        ParamSpec::required("flow_file", "Please provide a URL to the flow output file."),
        ParamSpec::required(
            "temp_file",
            "Please provide a URL to the water temperature output file.",
        ),
    ],
    output_file: OutputFile {
        stem: "joinedFile",
        infix_param: None,
        ext: "csv",
    },
    outputs: &[OutputSpec {
        key: "joined_file",
        title: "Joined model output",
        description: "Flow and water temperature series joined into one table.",
    }],
    link_via_out_dir: true,
};
