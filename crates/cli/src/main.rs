mod report;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use getarg::ArgumentStore;
use tracing_subscriber::{EnvFilter, fmt};

use crate::report::DumpReport;

/// Stands in for argv[0], which the store always discards.
const PROGRAM_NAME: &str = "getarg";

#[derive(Parser)]
#[command(name = "getarg")]
#[command(
    version,
    about = "Show how an argument vector resolves to typed flag values",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a flag as a boolean (honors -noNAME)
    Bool(BoolArgs),

    /// Resolve a flag as a string
    Str(StrArgs),

    /// Resolve a flag as an integer
    Int(IntArgs),

    /// Print every value a flag was given, one per line
    All(AllArgs),

    /// Print the resolved flag map and positional arguments
    Dump(DumpArgs),
}

#[derive(Args)]
struct Input {
    /// Tokens as one whitespace-separated string instead of TOKENS
    #[arg(long, value_name = "LINE", conflicts_with = "tokens")]
    line: Option<String>,

    /// Argument tokens without a program name (place them after `--`)
    #[arg(
        value_name = "TOKENS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    tokens: Vec<String>,
}

impl Input {
    fn store(&self) -> ArgumentStore {
        let argv = std::iter::once(PROGRAM_NAME);
        match &self.line {
            Some(line) => ArgumentStore::parse(argv.chain(line.split_whitespace())),
            None => ArgumentStore::parse(argv.chain(self.tokens.iter().map(String::as_str))),
        }
    }
}

#[derive(Parser)]
struct BoolArgs {
    /// Flag name (leading dash optional)
    #[arg(value_name = "NAME")]
    name: String,

    /// Value to report when neither NAME nor noNAME is given
    #[arg(long)]
    default: bool,

    #[command(flatten)]
    input: Input,
}

#[derive(Parser)]
struct StrArgs {
    /// Flag name (leading dash optional)
    #[arg(value_name = "NAME")]
    name: String,

    /// Value to report when NAME is not given
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    default: String,

    #[command(flatten)]
    input: Input,
}

#[derive(Parser)]
struct IntArgs {
    /// Flag name (leading dash optional)
    #[arg(value_name = "NAME")]
    name: String,

    /// Value to report when NAME is not given
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    default: i64,

    #[command(flatten)]
    input: Input,
}

#[derive(Parser)]
struct AllArgs {
    /// Flag name (leading dash optional)
    #[arg(value_name = "NAME")]
    name: String,

    #[command(flatten)]
    input: Input,
}

#[derive(Parser)]
struct DumpArgs {
    /// Output format
    #[arg(long, value_enum, env = "GETARG_FORMAT", default_value = "plain")]
    format: Format,

    #[command(flatten)]
    input: Input,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Plain,
    Json,
}

fn main() -> Result<()> {
    // A missing .env is fine; RUST_LOG and GETARG_FORMAT may come from anywhere.
    let dotenv = dotenvy::dotenv();
    init_tracing();
    if let Err(e) = dotenv
        && !e.not_found()
    {
        tracing::warn!("ignoring .env: {e}");
    }
    let cli = Cli::parse();

    match cli.command {
        Commands::Bool(args) => bool_command(args),
        Commands::Str(args) => str_command(args),
        Commands::Int(args) => int_command(args),
        Commands::All(args) => all_command(args),
        Commands::Dump(args) => dump_command(args),
    }
}

fn check_name(name: &str) -> Result<&str> {
    if name.trim_start_matches('-').is_empty() {
        bail!("flag name must not be empty: {name:?}");
    }
    Ok(name)
}

fn bool_command(args: BoolArgs) -> Result<()> {
    tracing::debug!("executing bool command");
    let name = check_name(&args.name)?;
    let store = args.input.store();
    println!("{}", store.get_bool_arg(name, args.default));
    Ok(())
}

fn str_command(args: StrArgs) -> Result<()> {
    tracing::debug!("executing str command");
    let name = check_name(&args.name)?;
    let store = args.input.store();
    println!("{}", store.get_arg(name, args.default.as_str()));
    Ok(())
}

fn int_command(args: IntArgs) -> Result<()> {
    tracing::debug!("executing int command");
    let name = check_name(&args.name)?;
    let store = args.input.store();
    println!("{}", store.get_arg(name, args.default));
    Ok(())
}

fn all_command(args: AllArgs) -> Result<()> {
    tracing::debug!("executing all command");
    let name = check_name(&args.name)?;
    let store = args.input.store();
    for value in store.get_args(name) {
        println!("{value}");
    }
    Ok(())
}

fn dump_command(args: DumpArgs) -> Result<()> {
    tracing::debug!("executing dump command");
    let report = DumpReport::from_store(&args.input.store());
    match args.format {
        Format::Plain => print!("{report}"),
        Format::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("failed to serialize dump report")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
