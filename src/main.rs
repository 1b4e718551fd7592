use std::process::ExitCode;

use kiosk_config::KioskConfig;
use kiosk_scene::FrameLoopFailed;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = KioskConfig::load();
    match kiosk_scene::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("launcher stopped: {err:#}");
            // Loop failures were printed before the grace period started.
            if err.downcast_ref::<FrameLoopFailed>().is_none() {
                eprintln!("{err:?}");
            }
            ExitCode::FAILURE
        }
    }
}
