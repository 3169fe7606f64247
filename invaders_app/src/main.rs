//! Space Invaders client entry point
//!
//! Opens the 640x480 game window, clears it to red every frame until the
//! window is closed, then exits. Any initialization failure exits with -1.

use invaders_engine::prelude::*;

fn main() {
    foundation::logging::init();

    let code = run();

    // All windowing resources are released by the time `run` returns.
    std::process::exit(code);
}

fn run() -> i32 {
    let bootstrap = DisplayBootstrap::new(GlfwPlatform, DisplayConfig::default());

    match bootstrap.run() {
        Ok(stats) => {
            log::info!("Window closed after {} frames", stats.frames);
            EXIT_SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            e.exit_code()
        }
    }
}
