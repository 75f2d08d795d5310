use recipedex::{
    cli::{get_cli, init_logger, run, Commands},
    error::default_error_handler,
};

fn main() {
    let cli = get_cli();
    init_logger(cli.verbose, cli.log_format);

    match cli.command {
        Commands::Generate(args) => {
            if let Err(err) = run(args, cli.log_format) {
                default_error_handler(err);
            }
        }
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
    }
}
