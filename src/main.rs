use std::path::Path;
use std::process::ExitCode;

use dotenvy::dotenv;
use link_budget::budget::max_bitrate;
use link_budget::cli::{self, Invocation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=error", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();

    let params = match cli::parse_invocation(&args) {
        Invocation::Evaluate(params) => params,
        Invocation::Usage => {
            println!("{}", cli::usage(program_name(&args)));
            return ExitCode::SUCCESS;
        }
        Invocation::Malformed(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    match max_bitrate(&params) {
        Ok(bitrate) => {
            println!("{bitrate}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn program_name(args: &[String]) -> &str {
    args.first()
        .map(Path::new)
        .and_then(|path| path.file_name())
        .and_then(|name| name.to_str())
        .unwrap_or(env!("CARGO_BIN_NAME"))
}
