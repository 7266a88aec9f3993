mod data;
mod graphics;
mod math;
mod modes;
mod scene;

use std::process::ExitCode;

use data::{
    error::{AppResult, ArgError},
    reader::USAGE,
    Config, Program,
};
use modes::Mode;

fn run() -> AppResult<()> {
    let args = std::env::args().collect::<Vec<_>>();
    let config = Config::default().eval_args(&mut args.iter())?;

    let prog = Program::new(config);
    prog.print_startup_info();

    match prog.mode() {
        Mode::Win => modes::windowed_mode::winit_main(prog),

        #[cfg(feature = "terminal")]
        _ => modes::console_mode::con_main(prog),

        #[cfg(not(feature = "terminal"))]
        _ => Err(ArgError::FeatureDisabled("terminal").into()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,

        Err(data::error::AppError::Args(ArgError::HelpRequested)) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }

        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
