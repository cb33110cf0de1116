use std::path::Path;
use std::process::ExitCode;

use woof::infra::config::{AppConfig, CONFIG_PATH};
use woof::infra::logging::init_logging;
use woof::ui::app_shell::launch_window;

fn main() -> ExitCode {
    let config = match AppConfig::load(Path::new(CONFIG_PATH)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("failed to load woof config: {error}");
            return ExitCode::from(2);
        }
    };
    init_logging(&config.log_level);

    match launch_window(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "woof exited with an error");
            eprintln!("{error}");
            ExitCode::from(1)
        }
    }
}
