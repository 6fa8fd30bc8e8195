//! Command-line definition

use clap::{value_parser, Arg, ArgAction, Command as ClapCommand};

use crate::config::DEFAULT_OUTPUT_FOLDER;

/// Build the `figcrop` argument parser
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("figcrop")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Locate figures and charts in a document image and save them as separate JPEG files")
        .arg(
            Arg::new("input")
                .help("Input image (with --base64: file holding base64 data, '-' for stdin)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output_folder")
                .help(format!("Folder for the extracted figures [default: {}]", DEFAULT_OUTPUT_FOLDER))
                .index(2),
        )
        .arg(
            Arg::new("padding_percent")
                .help("Extra margin around each figure in percent [default: 8, 0 with --local]")
                .value_parser(value_parser!(u32))
                .index(3),
        )
        .arg(
            Arg::new("local")
                .long("local")
                .help("Use the local layout model or contour heuristic instead of the vision API")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("base64")
                .long("base64")
                .help("Treat the input as base64 image data and run the local pipeline on it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .help("Base name for the decoded image with --base64")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("model")
                .long("model")
                .help("ONNX layout model used by the local pipeline")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("order")
                .long("order")
                .help("Numbering order of the figures")
                .value_name("ORDER")
                .value_parser(["discovery", "position"])
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write diagnostics to this file as well as stderr")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("journal")
                .long("journal")
                .help("Record every written figure with its type and description")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only report warnings and errors")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
}
