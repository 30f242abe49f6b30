use crate::config::{load_generator_config, GeneratorConfig, DEFAULT_CONFIG_FILE};
use crate::generator::{generate, plan};
use crate::logging::{init_logging, LogFormat};
use crate::source::{load_manifest, DescriptorSource, Pivot, TypeCatalog};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Command-line interface for dto2mvc
///
/// Scaffolds controller actions and view stubs from a descriptor manifest.
#[derive(Parser, Debug)]
#[command(name = "dto2mvc-gen")]
#[command(about = "dto2mvc scaffolding generator", long_about = None)]
pub struct Cli {
    /// Log output format: `pretty` or `json`
    #[arg(long, global = true, env = "DTO2MVC_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,

    /// Log filter directives (e.g. `info`, `dto2mvc=debug`)
    #[arg(long = "log", global = true, env = "DTO2MVC_LOG", default_value = "warn")]
    pub log_filter: String,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate controller and view stubs from a descriptor manifest
    Generate {
        /// Path to the descriptor manifest (YAML or JSON)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Output root; receives `Controllers/` and `Views/`
        #[arg(short, long)]
        output: PathBuf,

        /// Path to the generator configuration (dto2mvc.toml)
        /// If not provided, will auto-detect alongside the manifest
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Module or type to start discovery from (repeatable)
        /// If not provided, every module in the manifest is used
        #[arg(short, long)]
        pivot: Vec<String>,

        /// Base type of every generated controller (overrides the config file)
        #[arg(long)]
        base_controller: Option<String>,

        /// Namespace of generated controllers (overrides the config file)
        #[arg(long)]
        namespace: Option<String>,

        /// Perform a dry run: list the artifacts without writing files
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// List the annotated types and endpoints a manifest yields, in generation order
    Inspect {
        /// Path to the descriptor manifest (YAML or JSON)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Module or type to start discovery from (repeatable)
        #[arg(short, long)]
        pivot: Vec<String>,
    },
}

/// Parse the process arguments, install logging and run the command
///
/// # Errors
///
/// Returns an error if the manifest or config cannot be loaded, or if
/// generation fails.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(LogFormat::parse(&cli.log_format), &cli.log_filter);
    run(&cli)
}

/// Execute an already-parsed command
///
/// # Errors
///
/// See [`run_cli`].
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate {
            manifest,
            output,
            config,
            pivot,
            base_controller,
            namespace,
            dry_run,
        } => {
            let catalog = load_manifest(manifest)?;
            let pivots = resolve_pivots(&catalog, pivot);
            let mut config = resolve_config(manifest, config.as_deref())?;
            if let Some(base) = base_controller {
                config = config.with_base_controller(base);
            }
            if let Some(ns) = namespace {
                config = config.with_namespace(ns);
            }
            debug!(?pivots, ?config, "resolved generation inputs");

            if *dry_run {
                let artifacts = plan(&catalog, &pivots, output, &config)?;
                for artifact in &artifacts {
                    println!("📝 Would write {}: {}", artifact.kind, artifact.path.display());
                }
                println!("🔍 Dry run: {} artifact(s) planned", artifacts.len());
                return Ok(());
            }

            let written = generate(&catalog, &pivots, output, &config)?;
            for path in &written {
                println!("✅ Generated {}", path.display());
            }
            println!("🎉 {} artifact(s) under {}", written.len(), output.display());
            Ok(())
        }
        Commands::Inspect { manifest, pivot } => {
            let catalog = load_manifest(manifest)?;
            let pivots = resolve_pivots(&catalog, pivot);
            let types = catalog.annotated_types(&pivots)?;
            for ty in &types {
                println!("{}::{}", ty.module(), ty.name());
                for descriptor in ty.endpoints() {
                    println!("  {descriptor}");
                }
            }
            if types.is_empty() {
                println!("No annotated types found");
            }
            Ok(())
        }
    }
}

/// Map `--pivot` values onto catalog pivots
///
/// A value naming a manifest module selects that module; anything else is
/// treated as a type name. No values means every module.
pub(crate) fn resolve_pivots(catalog: &TypeCatalog, values: &[String]) -> Vec<Pivot> {
    if values.is_empty() {
        return catalog.all_modules();
    }
    let modules = catalog.modules();
    values
        .iter()
        .map(|value| {
            if modules.contains(&value.as_str()) {
                Pivot::module(value.as_str())
            } else {
                Pivot::type_name(value.as_str())
            }
        })
        .collect()
}

/// Load the explicit config, or `dto2mvc.toml` beside the manifest, or defaults
pub(crate) fn resolve_config(
    manifest: &Path,
    explicit: Option<&Path>,
) -> anyhow::Result<GeneratorConfig> {
    if let Some(path) = explicit {
        return load_generator_config(path)?
            .with_context(|| format!("Config file not found: {}", path.display()));
    }
    let beside = manifest
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(DEFAULT_CONFIG_FILE);
    Ok(load_generator_config(&beside)?.unwrap_or_default())
}
