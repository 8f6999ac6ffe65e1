//! Numbers C2PA CLI - build, sign and read C2PA manifests through c2patool.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use numbers_c2pa_core::{C2paTool, ToolConfig};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod exit_codes;
mod utils;

use commands::inject::InjectArgs;
use commands::keygen::KeygenArgs;
use commands::manifest::ManifestArgs;
use exit_codes::ExitCode;

const EXIT_CODES_HELP: &str = "\
Exit codes:
  0   Success
  1   General error
  64  Usage error
  65  No C2PA claim found, or invalid manifest data
  66  Input file not found
  69  c2patool unavailable or failed
  74  I/O error";

#[derive(Parser)]
#[command(name = "numbers-c2pa")]
#[command(author, version, about = "Build, sign and read C2PA manifests", long_about = None)]
#[command(after_help = EXIT_CODES_HELP)]
struct Cli {
    /// Only print command results, no decoration
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// c2patool executable (overrides C2PATOOL_PATH)
    #[arg(long, value_name = "PATH", global = true)]
    tool: Option<PathBuf>,

    /// Argument passed to the tool ahead of its own arguments (repeatable)
    #[arg(long = "tool-arg", value_name = "ARG", global = true, allow_hyphen_values = true)]
    tool_args: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a Numbers Protocol manifest and print it as JSON
    Manifest(ManifestArgs),

    /// Sign a file with a manifest through c2patool
    Inject(InjectArgs),

    /// Print the C2PA manifest report of a signed file
    Read {
        /// Path to the signed file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Generate an ES256 key and a self-signed certificate for testing
    Keygen(KeygenArgs),
}

impl Cli {
    fn tool(&self) -> C2paTool {
        let mut config = ToolConfig::from_env();
        if let Some(program) = &self.tool {
            config = config.with_program(program);
        }
        for arg in &self.tool_args {
            config = config.with_program_arg(arg);
        }
        C2paTool::new(config)
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let tool = cli.tool();
    let quiet = cli.quiet;

    match cli.command {
        Commands::Manifest(args) => commands::manifest::execute(args, quiet),
        Commands::Inject(args) => commands::inject::execute(&tool, args, quiet),
        Commands::Read { file } => commands::read::execute(&tool, file),
        Commands::Keygen(args) => commands::keygen::execute(args, quiet),
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also arrive here and are not failures.
            let code = if err.use_stderr() {
                exit_codes::USAGE_ERROR
            } else {
                exit_codes::SUCCESS
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    init_tracing(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        let exit = ExitCode::from_anyhow(&err);
        if let Some(message) = &exit.message {
            eprintln!("{} {}", "error:".red().bold(), message);
        }
        process::exit(exit.code);
    }
}
