//! Simple CLI that reads HTML from stdin and writes the extracted article
//! as JSON to stdout.
//!
//! Exit codes: 0 on success, 1 on invalid input, 2 on an internal fault.

use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use rs_readable::{extract_bytes, Error};

#[derive(Parser, Debug)]
#[command(name = "extract_stdin")]
#[command(about = "Extract the readable article of an HTML page read from stdin")]
#[command(version)]
struct Cli {
    /// Page URL, used to resolve relative links
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        eprintln!("failed to read stdin: {err}");
        return ExitCode::from(1);
    }

    match extract_bytes(&html, cli.url.as_deref()) {
        Ok(article) => {
            let json = if cli.pretty {
                serde_json::to_string_pretty(&article)
            } else {
                serde_json::to_string(&article)
            };
            match json {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("failed to serialize result: {err}");
                    ExitCode::from(2)
                }
            }
        }
        Err(err @ Error::InvalidInput(_)) => {
            eprintln!("{err}");
            ExitCode::from(1)
        }
        Err(err @ Error::InternalFault(_)) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
    }
}
