use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

use oas_structs::{
    declarations_to_json, generate_rust, Error, GeneratorConfig, SchemaCatalog,
};

/// File written into the output directory.
const OUTPUT_FILE_NAME: &str = "api.rs";

#[derive(Parser)]
#[command(name = "oas-structs")]
#[command(about = "Generate Rust types from the component schemas of an OpenAPI document", long_about = None)]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct GenerationArgs {
    /// Input OpenAPI document (`.json`, `.yaml` or `.yml`)
    #[arg(short, long)]
    input: PathBuf,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Extra word kept fully upper-cased in identifiers (repeatable)
    #[arg(long = "exception", value_name = "WORD")]
    exceptions: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Rust source from the document's schemas
    GenRust {
        #[command(flatten)]
        args: GenerationArgs,

        /// Output directory; `api.rs` is written there (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the resolved declarations as JSON (printed to stdout)
    Declarations {
        #[command(flatten)]
        args: GenerationArgs,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

impl GenerationArgs {
    fn config(&self) -> Result<GeneratorConfig, Error> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };
        config.uppercase_exceptions.extend(self.exceptions.iter().cloned());
        Ok(config)
    }

    fn catalog(&self) -> Result<SchemaCatalog, Error> {
        Ok(SchemaCatalog::load(&self.input)?)
    }
}

fn write_output(dir: &Path, rust_code: &str) -> Result<PathBuf, Error> {
    fs::create_dir_all(dir)?;
    let out_path = dir.join(OUTPUT_FILE_NAME);
    fs::write(&out_path, rust_code)?;
    Ok(out_path)
}

fn run(cli: &Cli) -> Result<(), Error> {
    match &cli.command {
        Commands::GenRust { args, output } => {
            let config = args.config()?;
            let catalog = args.catalog()?;
            let rust_code = generate_rust(&catalog, &config)?;
            if let Some(dir) = output {
                let out_path = write_output(dir, &rust_code)?;
                info!(input = %args.input.display(), output = %out_path.display(), "generated Rust code");
                eprintln!("Generated {} → {}", args.input.display(), out_path.display());
            } else {
                print!("{}", rust_code);
            }
            Ok(())
        }

        Commands::Declarations { args } => {
            let config = args.config()?;
            let catalog = args.catalog()?;
            println!("{}", declarations_to_json(&catalog, &config)?);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
