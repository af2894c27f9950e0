// SPDX-License-Identifier: AGPL-3.0-or-later
//! Zeebe-Contacts: initial contact points for dual-region Zeebe clusters
//!
//! Prints the `ZEEBE_BROKER_CLUSTER_INITIALCONTACTPOINTS` value for the base
//! Camunda Helm chart values file, or substitutes it into one.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use zeebe_contacts::{
    config::ClusterInputs,
    prompt::Prompter,
    render::{self, OutputFormat},
    ClusterSpec, Config, ContactList,
};

const DEFAULT_CONFIG: &str = "zeebe-contacts.toml";

/// Zeebe-Contacts: dual-region contact point generator
///
/// Builds the initial contact point list shared by every Zeebe broker of a
/// Camunda 8 cluster split across two Kubernetes clusters. Values not given
/// as flags or in the configuration file are asked for interactively.
#[derive(Parser, Debug)]
#[command(name = "zeebe-contacts")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path [default: zeebe-contacts.toml]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Defaults to `generate`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the contact point list
    #[command(alias = "gen")]
    Generate {
        #[command(flatten)]
        cluster: ClusterArgs,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Substitute the contact point list into a Helm values file
    Render {
        /// Values file containing the placeholder
        values_file: PathBuf,

        #[command(flatten)]
        cluster: ClusterArgs,

        /// Marker to replace (defaults to the configured placeholder)
        #[arg(long)]
        placeholder: Option<String>,

        /// Write the result to this file instead of stdout
        #[arg(short, long, conflicts_with = "in_place")]
        output: Option<PathBuf>,

        /// Overwrite the values file
        #[arg(long)]
        in_place: bool,
    },

    /// Initialize a new configuration file
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show configuration
    Config,

    /// Show version information
    Version,
}

/// Cluster layout flags; anything left out is prompted for
#[derive(Args, Debug, Default)]
struct ClusterArgs {
    /// Namespace of the Camunda installation in region 0
    #[arg(long = "namespace-0")]
    namespace_0: Option<String>,

    /// Namespace of the Camunda installation in region 1
    #[arg(long = "namespace-1")]
    namespace_1: Option<String>,

    /// Helm release name used in both regions
    #[arg(short, long)]
    release: Option<String>,

    /// Total number of Zeebe brokers across both regions
    #[arg(short = 'n', long)]
    cluster_size: Option<u32>,
}

impl From<ClusterArgs> for ClusterInputs {
    fn from(args: ClusterArgs) -> Self {
        Self {
            namespace_0: args.namespace_0,
            namespace_1: args.namespace_1,
            release: args.release,
            cluster_size: args.cluster_size,
        }
    }
}

fn main() -> ExitCode {
    let Cli {
        config: config_path,
        verbose,
        debug,
        command,
    } = Cli::parse();

    let command = command.unwrap_or(Commands::Generate {
        cluster: ClusterArgs::default(),
        format: None,
    });

    // Only commands that read presets touch the configuration file
    let config = match command {
        Commands::Generate { .. } | Commands::Render { .. } | Commands::Config => {
            load_config(config_path.as_deref()).map(Some)
        }
        Commands::Init { .. } | Commands::Version => Ok(None),
    };

    // Initialize logging; stdout is reserved for the generated output
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        let level = match &config {
            Ok(Some(config)) => config.logging.level.as_str(),
            _ => "warn",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .with_writer(io::stderr)
        .init();

    let result = config.and_then(|config| run(config_path.as_deref(), command, config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("Error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(
    config_path: Option<&Path>,
    command: Commands,
    config: Option<Config>,
) -> anyhow::Result<()> {
    let config_path = config_path.unwrap_or(Path::new(DEFAULT_CONFIG));
    let config = config.unwrap_or_default();

    match command {
        Commands::Version => {
            println!("Zeebe-Contacts v{}", env!("CARGO_PKG_VERSION"));
            println!("Initial contact points for dual-region Zeebe clusters");
            Ok(())
        }

        Commands::Init { force } => init_config(config_path, force),

        Commands::Config => show_config(config_path, &config),

        Commands::Generate { cluster, format } => generate(&config, cluster, format),

        Commands::Render {
            values_file,
            cluster,
            placeholder,
            output,
            in_place,
        } => {
            let target = if in_place {
                Some(values_file.clone())
            } else {
                output
            };
            render_values(&config, &values_file, cluster, placeholder, target)
        }
    }
}

/// Load the configuration file
///
/// An explicit path must exist; the default path falls back to defaults
/// when absent.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let config_path = match explicit {
        Some(path) => path,
        None => {
            let path = Path::new(DEFAULT_CONFIG);
            if !path.exists() {
                return Ok(Config::default());
            }
            path
        }
    };

    Config::from_file(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))
}

/// Merge flags over the configuration file and prompt for the rest
fn resolve_spec(config: &Config, cluster: ClusterArgs) -> anyhow::Result<ClusterSpec> {
    let inputs = ClusterInputs::from(cluster).or(config.cluster.clone());

    if !inputs.is_complete() {
        debug!("Prompting for missing cluster values");
    }

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stderr());
    let spec = prompter.complete(inputs)?;

    info!(
        namespace_0 = spec.namespace_a(),
        namespace_1 = spec.namespace_b(),
        release = spec.release(),
        cluster_size = spec.cluster_size(),
        "Cluster layout validated"
    );
    Ok(spec)
}

/// Print the contact point list
fn generate(
    config: &Config,
    cluster: ClusterArgs,
    format: Option<OutputFormat>,
) -> anyhow::Result<()> {
    let spec = resolve_spec(config, cluster)?;
    let list = ContactList::from_spec(&spec);
    info!(contact_points = list.len(), "Generated contact point list");

    let rendered = render::render(&list, format.unwrap_or(config.output.format))?;
    print!("{}", rendered);
    Ok(())
}

/// Substitute the contact point list into a values file
fn render_values(
    config: &Config,
    values_file: &Path,
    cluster: ClusterArgs,
    placeholder: Option<String>,
    target: Option<PathBuf>,
) -> anyhow::Result<()> {
    let template = std::fs::read_to_string(values_file)
        .with_context(|| format!("Failed to read values file {}", values_file.display()))?;

    let spec = resolve_spec(config, cluster)?;
    let list = ContactList::from_spec(&spec);

    let placeholder = placeholder.unwrap_or_else(|| config.output.placeholder.clone());
    let filled = render::fill_placeholder(
        &template,
        &placeholder,
        &list,
        &values_file.display().to_string(),
    )?;

    match target {
        Some(path) => {
            std::fs::write(&path, filled)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Wrote values file");
            println!("Wrote contact points to {}", path.display());
        }
        None => print!("{}", filled),
    }

    Ok(())
}

/// Initialize a new configuration file
fn init_config(config_path: &Path, force: bool) -> anyhow::Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let default_config = r#"# SPDX-License-Identifier: AGPL-3.0-or-later
# Zeebe-Contacts Configuration
#
# Unset cluster values are asked for interactively.

[cluster]
# namespace_0 = "camunda-primary"
# namespace_1 = "camunda-secondary"
# release = "camunda"
# cluster_size = 8

[output]
format = "helm"
placeholder = "PLACEHOLDER"

[logging]
level = "warn"
"#;

    std::fs::write(config_path, default_config)?;
    info!("Created configuration file: {}", config_path.display());
    println!("Created configuration file: {}", config_path.display());
    Ok(())
}

/// Show the effective configuration
fn show_config(config_path: &Path, config: &Config) -> anyhow::Result<()> {
    if !config_path.exists() {
        println!("No configuration file found. Using defaults:");
        println!();
    }

    println!("{}", config.to_toml()?);
    Ok(())
}
