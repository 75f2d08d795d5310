pub mod args;
pub mod logging;
pub mod runner;

pub use args::{get_cli, get_log_level_from_verbose, Cli, Commands, GenerateArgs, LogFormat};
pub use logging::init_logger;
pub use runner::run;
