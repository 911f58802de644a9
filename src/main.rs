use clap::Parser;
use spawnselect::cli::{check, discover, render, CheckCommand, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render(args) => render::execute(args).await,
        Commands::Discover(args) => discover::execute(args).await,
        Commands::Check(CheckCommand::Config(args)) => check::execute_config(args),
        Commands::Check(CheckCommand::Gpu(args)) => check::execute_gpu(args).await,
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
