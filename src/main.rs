use std::{env, path::PathBuf, process::ExitCode, str::FromStr, time::Instant};

use anyhow::Context;
use clap::Parser as _;
use tiny::{
    lexer::lexer::{tokenize, Lexer},
    parser::parser::parse,
    render_error,
};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Parse a TINY program and print its syntax tree.
#[derive(clap::Parser)]
#[clap(name = "tiny")]
struct Cli {
    /// Path to the TINY source file
    file: PathBuf,

    /// Print the token stream before parsing
    #[clap(long)]
    tokens: bool,

    /// Show the source line under each diagnostic
    #[clap(long)]
    explain: bool,

    /// Print the tree indented, one node per line
    #[clap(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    initialize_logging()?;

    let cli = Cli::parse();

    let start = Instant::now();
    let lexer = Lexer::open(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let source = lexer.source().to_string();

    if cli.tokens {
        let file_name = cli
            .file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        match tokenize(source.clone(), file_name) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{}", token);
                }
                debug!(elapsed = ?start.elapsed(), "Tokenized");
            }
            Err(error) => {
                print!("{}", render_error(&error, &source));
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    let parse_start = Instant::now();
    let (parser, tree) = parse(lexer);
    debug!(elapsed = ?parse_start.elapsed(), "Parsed");

    for diagnostic in parser.diagnostics() {
        println!("{}", diagnostic);
        if cli.explain {
            print!("{}", render_error(diagnostic, &source));
        }
    }
    println!("{}", parser.summary());

    if cli.pretty {
        print!("{}", tree.pretty());
    } else {
        println!("{}", tree);
    }

    debug!(elapsed = ?start.elapsed(), "Total");

    if parser.error_count() == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn initialize_logging() -> anyhow::Result<()> {
    let env_filter = env::var("RUST_LOG").unwrap_or_default();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(EnvFilter::from_str(&env_filter)?))
        .init();

    Ok(())
}
