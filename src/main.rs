use clap::{Parser, Subcommand};
use filterpath::commands::{check_paths, load_document, mapping_paths, render};
use filterpath::{FilterPathError, Settings, read, resolve_fields, validate};
use std::path::PathBuf;
use std::process::ExitCode;

/// Resolve filterable dotted paths against JSON documents.
#[derive(Parser, Debug)]
#[command(name = "filterpath", version, about)]
struct Cli {
    /// Settings file (TOML). Defaults to ./filterpath.toml when present.
    #[arg(long, global = true, env = "FILTERPATH_CONFIG")]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one path against a payload and print the result.
    Read {
        /// Payload file (JSON, or YAML for .yml/.yaml).
        #[arg(long)]
        data: PathBuf,
        /// Reject malformed paths instead of resolving them to nothing.
        #[arg(long)]
        strict: bool,
        path: String,
    },
    /// Resolve every field of a mapping document against a payload.
    Resolve {
        #[arg(long)]
        data: PathBuf,
        /// Mapping document (JSON, or YAML for .yml/.yaml).
        #[arg(long)]
        mapping: PathBuf,
        /// The mapping file holds dotted keys (or a config-server response).
        #[arg(long)]
        flat: bool,
    },
    /// Strictly validate the paths of a mapping document, or paths given inline.
    Check {
        #[arg(long, required_unless_present = "paths", conflicts_with = "paths")]
        mapping: Option<PathBuf>,
        #[arg(long, requires = "mapping")]
        flat: bool,
        paths: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(cli: Cli) -> Result<ExitCode, FilterPathError> {
    let settings = Settings::load(cli.config.as_deref())?;
    let pretty = settings.output.pretty;

    match cli.command {
        Command::Read { data, strict, path } => {
            if strict {
                validate(&path)?;
            }
            let payload = load_document(&data)?;
            let result = read(&payload, &path);
            println!("{}", render(&result.to_value(), pretty)?);
        }
        Command::Resolve {
            data,
            mapping,
            flat,
        } => {
            let payload = load_document(&data)?;
            let paths = mapping_paths(load_document(&mapping)?, flat, &settings.mapping)?;
            let fields = resolve_fields(&payload, &paths);
            for name in fields.absent() {
                log::info!("Field '{}' was not populated", name);
            }
            let out = fields.to_value(settings.output.include_absent);
            println!("{}", render(&out, pretty)?);
        }
        Command::Check {
            mapping,
            flat,
            paths,
        } => {
            let named: Vec<(String, String)> = match mapping {
                Some(file) => mapping_paths(load_document(&file)?, flat, &settings.mapping)?
                    .into_iter()
                    .collect(),
                None => paths.into_iter().map(|p| (p.clone(), p)).collect(),
            };
            let failures = check_paths(named.iter().map(|(n, p)| (n.as_str(), p.as_str())));
            for (name, err) in &failures {
                eprintln!("{}: {}", name, err);
            }
            if !failures.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
            println!("{} path(s) OK", named.len());
        }
    }
    Ok(ExitCode::SUCCESS)
}
