//! Namereg Command Line Tool
//!
//! Derivation helpers and an in-process demo for the hierarchical naming
//! registry.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use namereg_registrar::TldRegistrar;
use namereg_registry::NamespaceRegistry;
use namereg_types::{namehash, LabelHash, NodeId, Principal};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "namereg-cli")]
#[command(about = "Namereg Command Line Tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a single label (path segment)
    LabelHash {
        /// Label to hash, e.g. "domain"
        label: String,
    },

    /// Compute the node identifier of a dot-separated name
    NodeId {
        /// Fully qualified name, e.g. "domain.eth"
        name: String,
    },

    /// Derive a child node identifier under a parent
    Child {
        /// Parent node identifier (0x-prefixed hex)
        parent: String,

        /// Label of the child, e.g. "sub"
        label: String,
    },

    /// Run the bootstrap + register flow in-process and print the events
    Demo {
        /// Top-level label the registrar administers
        #[arg(long, default_value = "eth")]
        tld: String,

        /// Label to register under the top-level node
        #[arg(long, default_value = "domain")]
        label: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::LabelHash { label } => {
            println!("{}", LabelHash::hash(&label));
        }

        Commands::NodeId { name } => {
            println!("{}", namehash(&name));
        }

        Commands::Child { parent, label } => {
            let parent = NodeId::from_hex(&parent).context("invalid parent node id")?;
            println!("{}", parent.child(&LabelHash::hash(&label)));
        }

        Commands::Demo { tld, label } => run_demo(&tld, &label)?,
    }

    Ok(())
}

/// Deploy a registry and a registrar, bootstrap the registrar as the
/// owner of the top-level node, register one label and print the emitted
/// events plus the resulting domain info as JSON lines.
fn run_demo(tld: &str, label: &str) -> Result<()> {
    let deployer = Principal::new([1u8; 32]);
    let registrar_identity = Principal::new([2u8; 32]);
    let owner = Principal::new([3u8; 32]);

    let registry = Arc::new(NamespaceRegistry::new(deployer));
    let root = registry
        .set_subnode_owner(
            deployer,
            NodeId::ROOT,
            LabelHash::hash(tld),
            registrar_identity,
        )
        .context("bootstrap delegation failed")?;

    let registrar = TldRegistrar::new(registry.clone(), registrar_identity, root);
    let node = registrar
        .register(owner, LabelHash::hash(label))
        .context("registration failed")?;

    info!("registered {}.{} as {}", label, tld, node);

    for event in registry.take_events() {
        println!("{}", serde_json::to_string(&event)?);
    }
    println!(
        "{}",
        serde_json::to_string(&registrar.domain_info(LabelHash::hash(label)))?
    );

    Ok(())
}
