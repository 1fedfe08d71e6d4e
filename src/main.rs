use clap::Parser;
use clap::Subcommand;
use commands::prune::Prune;
use commands::show::Show;
use git::Git;

mod commands;
mod core;
mod errors;
mod git;
mod model;
mod parser;

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "clip")]
#[command(about = "Show how local branches relate to the remotes, clip the remote ones nobody uses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Show(Show),
    Prune(Prune),
}

fn main() {
    env_logger::init();

    let args = Cli::parse();

    let result = Git::open(".").and_then(|git| match args.command {
        Commands::Show(show) => show.execute(git),
        Commands::Prune(prune) => prune.execute(git),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
