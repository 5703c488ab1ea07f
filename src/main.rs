mod color;
mod data;
mod prompt;
mod registry;
mod session;
mod stats;
mod ui;

use std::process::ExitCode;

use session::Session;

fn main() -> ExitCode {
    env_logger::init();

    let mut session = Session::new(registry::load_registry());
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("session ended with error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
