use std::{
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser as _;
use minilang::{
    config::config::{LexerConfig, ParserConfig, DEFAULT_MAX_NESTING_DEPTH},
    lexer::lexer::{tokenize, Lexer},
    parser::parser::Parser,
};
use tracing_subscriber::{fmt, EnvFilter};

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Parse a minilang program and print its canonical form
#[derive(Debug, clap::Parser)]
#[command(name = "minilang", author, version)]
struct MinilangArgs {
    /// Source file to parse, stdin when omitted
    #[arg()]
    file: Option<PathBuf>,

    /// Print the token stream instead of the program
    #[arg(short, long)]
    tokens: bool,

    /// Print the tree outline instead of the canonical form
    #[arg(short, long)]
    dump: bool,

    /// Deepest expression nesting accepted
    #[arg(long, default_value_t = DEFAULT_MAX_NESTING_DEPTH)]
    max_depth: usize,
}

//--------------------------------------------------------------------------------------------------
// Functions: main
//--------------------------------------------------------------------------------------------------

fn main() -> anyhow::Result<ExitCode> {
    fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = MinilangArgs::parse();
    let source = read_source(args.file.as_ref())?;
    tracing::trace!("read {} bytes of source", source.len());

    if args.tokens {
        for token in tokenize(LexerConfig::new(source)) {
            println!("{}", token);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = ParserConfig {
        max_depth: args.max_depth,
    };
    let mut parser = Parser::with_config(Lexer::new(LexerConfig::new(source)), config);
    let program = parser.parse_program();

    if args.dump {
        print!("{}", program.dump());
    } else {
        print!("{}", program);
    }

    if parser.errors().is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    for error in parser.errors() {
        eprintln!("Error: {} ({})", error.get_error_name(), error);
    }

    Ok(ExitCode::FAILURE)
}

//--------------------------------------------------------------------------------------------------
// Functions: *
//--------------------------------------------------------------------------------------------------

fn read_source(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
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
