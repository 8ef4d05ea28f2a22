use std::io::Read;

use clap::Parser;
use serde::Serialize;

mod args;
mod exit_codes;
mod output;

pub use args::*;

use dburl_core::{local_proxy_url, parse_connection_url, DEFAULT_PROXY_PORT};
use output::{print_error, print_result, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "convert-db-url",
    version,
    about = "Rewrite a cloud database URL to a local proxy URL"
)]
struct Cli {
    /// Destination port of the local proxy.
    #[arg(long, default_value_t = DEFAULT_PROXY_PORT)]
    port: u16,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Serialize)]
struct RewriteResult {
    url: String,
    port: u16,
}

fn main() {
    let cli = Cli::parse();
    let exit_code = run(cli);
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> i32 {
    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        print_error(
            cli.output.format,
            cli.output.quiet,
            &format!("failed to read stdin: {e}"),
        );
        return exit_codes::RUNTIME_ERROR;
    }

    let parts = match parse_connection_url(input.trim()) {
        Ok(p) => p,
        Err(e) => {
            print_error(cli.output.format, cli.output.quiet, &e.to_string());
            return exit_codes::PARSE_FAILED;
        }
    };

    let result = RewriteResult {
        url: local_proxy_url(&parts, cli.port),
        port: cli.port,
    };
    if cli.output.format == OutputFormat::Text && !cli.output.quiet {
        println!("{}", result.url);
    } else {
        print_result(cli.output.format, cli.output.quiet, &result);
    }
    exit_codes::SUCCESS
}
