//! Korral CLI - organizes Kubernetes manifests into a canonical directory
//! layout

use clap::Parser;
use miette::Result;
use std::path::PathBuf;

mod organize;

#[derive(Parser)]
#[command(name = "korral")]
#[command(author = "Korral Contributors")]
#[command(version)]
#[command(
    about = "Organizes Kubernetes manifests into a canonical directory layout",
    long_about = None
)]
struct Cli {
    /// Input files or directories containing manifests (stdin when omitted)
    #[arg(short, long)]
    input: Vec<PathBuf>,

    /// Output directory to write organized manifests
    #[arg(short, long)]
    output: PathBuf,

    /// Exclude Kind.group from output manifests (e.g. Deployment.apps or Secret)
    #[arg(short, long)]
    filter: Vec<String>,

    /// Add a Kind.group/version:Cluster or Kind.group/version:Namespaced
    /// scope mapping to discovery
    #[arg(short, long = "gvk-scope")]
    gvk_scope: Vec<String>,

    /// Set metadata.namespace field if missing from namespaced resources
    #[arg(short, long)]
    namespace: Option<String>,

    /// Remove metadata.namespace field from cluster-scoped resources
    #[arg(long)]
    clean: bool,

    /// Require metadata.namespace field is not set for cluster-scoped resources
    #[arg(long)]
    strict: bool,

    /// Remove processed input files
    #[arg(long)]
    remove: bool,

    /// Comment each output file with the path of the corresponding input file
    #[arg(long)]
    comment: bool,

    /// Overwrite existing output files
    #[arg(long)]
    overwrite: bool,

    /// Create missing Namespace manifests
    #[arg(long)]
    create_missing_namespaces: bool,

    /// Use the API server for discovery
    #[arg(short, long)]
    discovery: bool,

    /// Path to the kubeconfig file used for discovery
    #[arg(short, long, env = "KUBECONFIG")]
    kubeconfig: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    miette::set_panic_hook();

    let cli = Cli::parse();
    organize::run(&cli).await
}
