use clap::Parser;
use invest101::api::cli::{Cli, Command, run_project};
use invest101::api::{AppState, run_http_server};
use invest101::logger;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    match cli.command {
        Command::Serve(args) => {
            let state = match AppState::new(&args.lang, args.theme.into()) {
                Ok(state) => state,
                Err(e) => {
                    tracing::error!("Failed to initialise widget: {e}");
                    std::process::exit(1);
                }
            };
            if let Err(e) = run_http_server(args.port, state).await {
                tracing::error!("Server error: {e}");
                std::process::exit(1);
            }
        }
        Command::Project(args) => match run_project(&args) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                tracing::error!("Projection failed: {e}");
                std::process::exit(1);
            }
        },
    }
}
