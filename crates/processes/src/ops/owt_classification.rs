//! Optical water type classification of spectral reflectance samples.
//!
//! Unlike the generic R workflow images, the classification image has its
//! own entrypoint taking flag-style arguments and only needs the output
//! mount.

use crate::descriptor::{
    ArgStyle, MountLayout, OperationDescriptor, OutputFile, OutputSpec, ParamSpec,
};

pub static DESCRIPTOR: OperationDescriptor = OperationDescriptor {
    id: "hereon-pyowt",
    image: "owt-classification-image",
    arg_style: ArgStyle::Flagged {
        flags: &["--input", "--input_option", "--sensor", "--output_option"],
        output_flag: "--output",
    },
    mounts: MountLayout {
        with_input: false,
        container_out: "/app/projects/AquaINFRA/out",
    },
    params: &[
        ParamSpec::optional("input_data_url", "Rrs_demo_AquaINFRA_hyper.csv"),
        ParamSpec::required(
            "input_option",
            "Please provide an input option (\"csv\" or \"sat\").",
        ),
        ParamSpec::required("sensor", "Please provide a sensor name."),
        ParamSpec::required("output_option", "Please provide an output option (1 or 2)."),
    ],
    output_file: OutputFile {
        stem: "owt_classification_output",
        infix_param: Some("sensor"),
        ext: "txt",
    },
    outputs: &[OutputSpec {
        key: "owt_classification",
        title: "Optical water type classification",
        description: "Per-sample optical water types predicted from the spectral input.",
    }],
    link_via_out_dir: true,
};
