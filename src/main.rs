use std::path::Path;
use std::process;
use log::{error, LevelFilter};

use figcrop::cli::build_cli;
use figcrop::commands::{CommandFactory, FigCropCommandFactory};
use figcrop::config::load_env_file;
use figcrop::output::ExtractionReport;
use figcrop::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else if matches.get_flag("quiet") {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    if let Some(log_file) = matches.get_one::<String>("log-file") {
        if let Err(e) = Logger::init_global_logger(Path::new(log_file), level) {
            eprintln!("Error setting up global logger: {}", e);
            process::exit(1);
        }
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
            .target(env_logger::Target::Stderr)
            .init();
    }

    let journal = match matches.get_one::<String>("journal") {
        Some(path) => match Logger::new(Path::new(path)) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error initializing journal: {}", e);
                process::exit(1);
            }
        },
        None => Logger::disabled(),
    };

    load_env_file();

    let factory = FigCropCommandFactory::new();
    let report = match factory.create_command(&matches, &journal).and_then(|command| command.execute()) {
        Ok(paths) => ExtractionReport::success(&paths),
        Err(e) => {
            error!("Extraction failed: {}", e);
            ExtractionReport::failure(&e)
        }
    };

    println!("{}", report.to_json());
    process::exit(report.exit_code());
}
