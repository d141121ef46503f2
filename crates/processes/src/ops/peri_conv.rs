//! Group observations into within-year periods (seasons).
//!
//! The `date_format` parameter accepts the compact `y-m-d` style and is
//! rewritten to the R `strptime` form before reaching the container (see
//! [`Transform::RDateFormat`](crate::descriptor::Transform)).

use super::DAUGAVA_IMAGE;
use crate::descriptor::{
    ArgStyle, MountLayout, OperationDescriptor, OutputFile, OutputSpec, ParamSpec, Transform,
};

pub static DESCRIPTOR: OperationDescriptor = OperationDescriptor {
    id: "peri-conv",
    image: DAUGAVA_IMAGE,
    arg_style: ArgStyle::RScript {
        script: "peri_conv.R",
    },
    mounts: MountLayout::IN_OUT,
    params: &[
        ParamSpec::required("input_data", "Please provide a URL to your input table."),
        ParamSpec::required("colname_date", "Please provide a column name."),
        ParamSpec::optional(
            "group_to_periods",
            "Dec-01:Mar-01,Mar-02:May-30,Jun-01:Aug-30,Sep-01:Nov-30",
        ),
        ParamSpec::optional("period_labels", "winter,spring,summer,autumn"),
        ParamSpec::optional("year_starts_at_dec1", "True"),
        ParamSpec::optional("date_format", "y-m-d").with_transform(Transform::RDateFormat),
    ],
    output_file: OutputFile {
        stem: "peri_conv",
        infix_param: None,
        ext: "csv",
    },
    outputs: &[OutputSpec {
        key: "data_grouped_by_date",
        title: "Data grouped by date",
        description: "Input time series with every observation assigned to its within-year period.",
    }],
    link_via_out_dir: true,
};
