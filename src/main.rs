//! Routing-table compiler CLI.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use routec::config::factory;
use routec::config::schema::ParamMap;
use routec::RoutingCompiler;

#[derive(Parser)]
#[command(name = "routec")]
#[command(about = "Compile declarative route definitions into a cached dispatch table", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile sources and emit the cache fragment
    Compile {
        /// Definition sources, in order; later files override earlier ones
        #[arg(required = true)]
        sources: Vec<PathBuf>,

        /// Factory settings file supplying default route options
        #[arg(short, long)]
        factory: Option<PathBuf>,

        /// Write the fragment here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List top-level definitions without flattening them
    Inspect {
        /// Definition sources, in order
        #[arg(required = true)]
        sources: Vec<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "routec=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let compiler = RoutingCompiler::new();

    match cli.command {
        Commands::Compile {
            sources,
            factory: factory_path,
            output,
        } => {
            let default_options = match factory_path {
                Some(path) => factory::load_default_options(&path)?,
                None => ParamMap::new(),
            };

            let fragment = compiler.execute(&sources, &default_options)?;

            match output {
                Some(path) => {
                    fs::write(&path, &fragment)?;
                    tracing::info!(path = %path.display(), "cache fragment written");
                }
                None => print!("{fragment}"),
            }
        }
        Commands::Inspect { sources } => {
            for (name, route) in compiler.evaluate(&sources)? {
                let kind = if route.is_collection() {
                    "collection"
                } else {
                    "route"
                };
                println!("{name} ({kind})");
            }
        }
    }

    Ok(())
}
