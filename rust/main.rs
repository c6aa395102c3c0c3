use karatechop::verify::{run_battery, Battery};
use log::error;
use std::process::ExitCode;

const SUCCESS: u8 = 0;
const FAILURE: u8 = 1;

/// Verify every strategy against `battery`, mapping the first mismatch to a failing exit status.
fn run(battery: &Battery) -> u8 {
    match run_battery(battery) {
        Ok(()) => SUCCESS,
        Err(e) => {
            error!("verification aborted: {}", e);
            FAILURE
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    ExitCode::from(run(&Battery::standard()))
}
