use env_logger::Env;
use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
