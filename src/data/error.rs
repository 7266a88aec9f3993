use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ArgError {
    #[error("help requested")]
    HelpRequested,
    #[error("expected a value for {0}")]
    MissingValue(&'static str),
    #[error("invalid value {value:?} for {option}")]
    InvalidValue { option: &'static str, value: String },
    #[error("{0} must not be zero")]
    Zero(&'static str),
    #[error(
        "feature {0} is turned off in this build of orbitswap, \
        recompile with `--features {0}` to use this flag"
    )]
    FeatureDisabled(&'static str),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("argument error: {0}")]
    Args(#[from] ArgError),
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("unable to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("surface error: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("window reported a zero-sized surface")]
    ZeroSize,
}

pub type AppResult<T> = Result<T, AppError>;
