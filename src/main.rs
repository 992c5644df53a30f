use anyhow::{Context, Result};
use bookworms::analysis::{find_common_books, recommend, top_recommendations};
use bookworms::config::{
    find_config_file, load_config, save_config, Config, CONFIG_FILE_NAME,
};
use bookworms::loader::{find_bookworm, load_bookworms};
use bookworms::models::Bookworm;
use bookworms::utils::{render_books, render_recommendations, DisplayFormat};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Bookworms - Find shared books and recommend new ones from overlapping shelves
#[derive(Parser, Debug)]
#[command(name = "bookworms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find the books bookworms share and recommend new ones", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path of the bookworms JSON file
    #[arg(long, short, global = true)]
    file: Option<PathBuf>,

    /// Show all environment variables
    #[arg(long, global = true)]
    env: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (table if TTY, JSON otherwise)
    Auto,
    /// Table format (human-readable)
    Table,
    /// JSON format (machine-readable)
    Json,
    /// Plain text format
    Plain,
}

impl OutputFormat {
    fn resolve(self) -> DisplayFormat {
        match self {
            OutputFormat::Auto => DisplayFormat::detect(),
            OutputFormat::Table => DisplayFormat::Table,
            OutputFormat::Json => DisplayFormat::Json,
            OutputFormat::Plain => DisplayFormat::Plain,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the books found on more than one shelf (the default)
    #[command(alias = "c")]
    Common,

    /// Recommend books to a reader
    #[command(alias = "r")]
    Recommend {
        /// Name of the reader to recommend books to
        reader: String,

        /// Number of recommendations asked for (default from configuration)
        #[arg(long, short = 'n')]
        max_results: Option<usize>,

        /// Keep only the best `max-results` recommendations
        #[arg(long)]
        top: bool,
    },

    /// Write a default configuration file
    InitConfig {
        /// Where to write the file
        #[arg(long, default_value = CONFIG_FILE_NAME)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Print all available environment variables
fn print_env_vars() {
    println!("Bookworms - Environment Variables");
    println!();
    println!("Input:");
    println!("  BOOKWORMS_INPUT__BOOKWORMS_FILE            Bookworms JSON file (default: testdata/bookworms.json)");
    println!();
    println!("Recommendations:");
    println!("  BOOKWORMS_RECOMMENDATIONS__MAX_RESULTS     Number of recommendations asked for (default: 10)");
    println!("  BOOKWORMS_RECOMMENDATIONS__TRUNCATE        Keep only the best results (default: false)");
    println!();
    println!("Logging:");
    println!("  BOOKWORMS_LOGGING__LEVEL                   Default log level (default: warn)");
    println!("  RUST_LOG                                   Rust logging filter, overrides everything else");
}

fn main() {
    let cli = Cli::parse();

    if cli.env {
        print_env_vars();
        return;
    }

    if let Err(err) = run(&cli) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Load configuration from file if specified or found in default locations
    let config_path = cli.config.clone().or_else(find_config_file);
    let config = load_config(config_path.as_deref()).with_context(|| match &config_path {
        Some(path) => format!("failed to load config {}", path.display()),
        None => "failed to load config".to_string(),
    })?;

    init_tracing(cli, &config);

    if let Some(path) = &config_path {
        tracing::info!("Using config file: {}", path.display());
    }

    let format = cli.output.resolve();

    match &cli.command {
        None | Some(Commands::Common) => {
            let bookworms = load(cli, &config)?;
            let common = find_common_books(&bookworms);

            let body = render_books(&common, format)?;
            let heading = "Here are the common books:";
            print!("{}", compose_output(heading, &body, format, cli.quiet));
        }

        Some(Commands::Recommend {
            reader,
            max_results,
            top,
        }) => {
            let bookworms = load(cli, &config)?;
            let target = select_reader(&bookworms, reader)?;

            let n = (*max_results).unwrap_or(config.recommendations.max_results);
            let mut recommendations = recommend(&bookworms, target, n);
            if *top || config.recommendations.truncate {
                recommendations = top_recommendations(recommendations, n);
            }

            let heading = format!("Here are the recommendations for {}:", target.name);
            let body = render_recommendations(&recommendations, format)?;
            print!("{}", compose_output(&heading, &body, format, cli.quiet));
        }

        Some(Commands::InitConfig { path, force }) => {
            init_config(path, *force)?;
            if !cli.quiet {
                println!("Wrote default configuration to {}", path.display());
            }
        }
    }

    Ok(())
}

/// Prefix rendered output with a heading, except for JSON or when quiet
fn compose_output(heading: &str, body: &str, format: DisplayFormat, quiet: bool) -> String {
    if quiet || format == DisplayFormat::Json {
        body.to_string()
    } else {
        format!("{heading}\n{body}")
    }
}

fn select_reader<'a>(bookworms: &'a [Bookworm], name: &str) -> Result<&'a Bookworm> {
    find_bookworm(bookworms, name)
        .ok_or_else(|| anyhow::anyhow!("no bookworm named {:?}", name))
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    save_config(&Config::default(), path)
        .with_context(|| format!("failed to write {}", path.display()))
}

fn init_tracing(cli: &Cli, config: &Config) {
    let level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => config.logging.level.as_str(),
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("bookworms={}", level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load(cli: &Cli, config: &Config) -> Result<Vec<Bookworm>> {
    let path = cli.file.as_deref().unwrap_or(config.input.bookworms_file.as_path());

    load_bookworms(path).context("failed to load bookworms")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookworms::models::Book;
    use tempfile::tempdir;

    #[test]
    fn test_load_failure_report() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let cli = Cli::parse_from(["bookworms", "-f", missing.to_str().unwrap()]);

        let err = load(&cli, &Config::default()).unwrap_err();
        let report = format!("{err:#}");
        assert!(report.starts_with(&format!(
            "failed to load bookworms: cannot read {}: ",
            missing.display()
        )));
        assert_eq!(report.matches("os error").count(), 1);
    }

    #[test]
    fn test_load_uses_configured_file() {
        let mut config = Config::default();
        config.input.bookworms_file =
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata/bookworms.json");

        let bookworms = load(&Cli::parse_from(["bookworms"]), &config).unwrap();
        assert_eq!(bookworms.len(), 2);
    }

    #[test]
    fn test_select_unknown_reader() {
        let bookworms = vec![Bookworm::new(
            "Fadi",
            vec![Book::new("Sylvia Plath", "The Bell Jar")],
        )];

        assert_eq!(select_reader(&bookworms, "Fadi").unwrap().name, "Fadi");
        let err = select_reader(&bookworms, "Peggy").unwrap_err();
        assert_eq!(err.to_string(), "no bookworm named \"Peggy\"");
    }

    #[test]
    fn test_init_config_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookworms.toml");
        std::fs::write(&path, "# keep me\n").unwrap();

        assert!(init_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# keep me\n");

        init_config(&path, true).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("max_results = 10"));
    }

    #[test]
    fn test_init_config_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookworms.toml");

        init_config(&path, false).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_compose_output_headings() {
        let heading = "Here are the common books:";

        assert_eq!(
            compose_output(heading, "[]\n", DisplayFormat::Json, false),
            "[]\n"
        );
        let body = "- Jane Eyre by Charlotte Brontë\n";
        assert_eq!(
            compose_output(heading, body, DisplayFormat::Plain, false),
            "Here are the common books:\n- Jane Eyre by Charlotte Brontë\n"
        );
        assert_eq!(compose_output(heading, body, DisplayFormat::Plain, true), body);
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["bookworms"]);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert_eq!(cli.output, OutputFormat::Auto);
        assert!(cli.config.is_none());
        assert!(cli.file.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["bookworms", "-v"]);
        assert_eq!(cli.verbose, 1);

        let cli = Cli::parse_from(["bookworms", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_file_flag() {
        let cli = Cli::parse_from(["bookworms", "--file", "shelves.json"]);
        assert_eq!(cli.file, Some(PathBuf::from("shelves.json")));

        let cli = Cli::parse_from(["bookworms", "common", "-f", "other.json"]);
        assert_eq!(cli.file, Some(PathBuf::from("other.json")));
        assert!(matches!(cli.command, Some(Commands::Common)));
    }

    #[test]
    fn test_cli_output_format() {
        let cli = Cli::parse_from(["bookworms", "-o", "json"]);
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.output.resolve(), DisplayFormat::Json);

        let cli = Cli::parse_from(["bookworms", "--output", "plain"]);
        assert_eq!(cli.output.resolve(), DisplayFormat::Plain);
    }

    #[test]
    fn test_cli_common_alias() {
        let cli = Cli::parse_from(["bookworms", "c"]);
        assert!(matches!(cli.command, Some(Commands::Common)));
    }

    #[test]
    fn test_cli_recommend_command() {
        let cli = Cli::parse_from(["bookworms", "recommend", "Fadi"]);
        match &cli.command {
            Some(Commands::Recommend {
                reader,
                max_results,
                top,
            }) => {
                assert_eq!(reader, "Fadi");
                assert!(max_results.is_none());
                assert!(!*top);
            }
            _ => panic!("Expected Recommend command"),
        }
    }

    #[test]
    fn test_cli_recommend_with_options() {
        let cli = Cli::parse_from(["bookworms", "r", "Peggy", "-n", "3", "--top"]);
        match &cli.command {
            Some(Commands::Recommend {
                reader,
                max_results,
                top,
            }) => {
                assert_eq!(reader, "Peggy");
                assert_eq!(*max_results, Some(3));
                assert!(*top);
            }
            _ => panic!("Expected Recommend command"),
        }
    }

    #[test]
    fn test_cli_init_config_command() {
        let cli = Cli::parse_from(["bookworms", "init-config"]);
        match &cli.command {
            Some(Commands::InitConfig { path, force }) => {
                assert_eq!(path, &PathBuf::from(CONFIG_FILE_NAME));
                assert!(!*force);
            }
            _ => panic!("Expected InitConfig command"),
        }
    }
}
