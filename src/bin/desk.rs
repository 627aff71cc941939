use associates_manager::desktop::{console, Desk};
use clap::Parser;
use dotenv::dotenv;
use log::error;
use std::process::ExitCode;

/// Terminal table client for the associates_info table.
#[derive(Parser, Debug)]
#[command(name = "associates-desk")]
struct Args {
    /// Postgres connection string; a new connection is opened for every action.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    let result = Desk::connect(&args.database_url).and_then(|mut desk| console::run(&mut desk));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
