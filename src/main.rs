use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    time::Instant,
};

use anyhow::Context;
use clap::Parser as _;
use frontend::{
    ast::ast::Node,
    errors::errors::{ErrorTip, ParseError},
    lexer::lexer::tokenize,
    parser::parser::{Parser, DEFAULT_MAX_DEPTH},
};
use tracing_subscriber::EnvFilter;

/// Parse a source file and print its canonical rendering.
#[derive(Debug, clap::Parser)]
#[command(name = "frontend")]
struct Args {
    /// Source file to parse; stdin is read when omitted
    file: Option<PathBuf>,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,

    /// Maximum expression nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let source = read_source(args.file.as_ref())?;

    if args.tokens {
        for token in tokenize(source.as_str()) {
            println!("{}", token.debug());
        }
    }

    let start = Instant::now();
    let mut parser = Parser::from_source(&source).with_max_depth(args.max_depth);
    let program = parser.parse_program();
    tracing::info!("Parsed in {:?}", start.elapsed());

    println!("{}", program.render());

    if !parser.errors().is_empty() {
        for error in parser.errors() {
            display_error(error);
        }
        anyhow::bail!("{} syntax error(s)", parser.errors().len());
    }

    Ok(())
}

fn read_source(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            Ok(source)
        }
    }
}

fn display_error(error: &ParseError) {
    match error.get_tip() {
        ErrorTip::None => eprintln!("Error: {}: {}", error.get_error_name(), error),
        tip => eprintln!("Error: {}: {} ({})", error.get_error_name(), error, tip),
    }
}
