use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use env_logger::{Builder, Env, Target};

use gridpath::{Config, Error};

fn init_logging(config: &Config) -> gridpath::Result<()> {
    match &config.log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| Error::LogFile {
                path: path.clone(),
                source,
            })?;
            Builder::from_env(Env::default().default_filter_or("info"))
                .target(Target::Pipe(Box::new(file)))
                .init();
        }
        // stderr shares the terminal with the canvas.
        None if std::env::var_os("RUST_LOG").is_some() => env_logger::init(),
        None => {}
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = Config::parse();
    if let Err(e) = config.validate().and_then(|()| init_logging(&config)) {
        eprintln!("gridpath: {e}");
        return ExitCode::FAILURE;
    }

    log::info!(
        "starting: {} rows over {} pixels",
        config.rows,
        config.width
    );
    match gridpath::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridpath: {e}");
            ExitCode::FAILURE
        }
    }
}
