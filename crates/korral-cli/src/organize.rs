//! Pipeline driver: walk inputs, classify, rewrite and write manifests
//!
//! Stage order matters: discovery is seeded with CRD-declared and manual
//! scopes before any lookup, the namespace universe is collected over the
//! untouched input set, and only then do the mutating stages run.

use std::collections::BTreeSet;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use console::style;
use miette::{IntoDiagnostic, Result};
use walkdir::WalkDir;

use korral_core::{
    CoreError, DefaultingOptions, Document, DocumentSet, GroupKind, OutputLayout, ResourceScopes,
    apply_namespace_defaults, filter_documents, find_namespaces, mirror_documents,
};
use korral_discovery::{LocalScopes, declared_crd_scopes, parse_scope_override};
use korral_kube::ApiServerScopes;

use crate::Cli;

/// YAML document separator each output file starts with
const MANIFEST_SEPARATOR: &str = "---\n";

/// Pseudo-path recorded for documents read from stdin
const STDIN_PATH: &str = "-";

pub async fn run(cli: &Cli) -> Result<()> {
    let mut scopes = build_scopes(cli).await?;

    let files = find_input_files(&cli.input)?;
    let mut set = load_documents(&files)?;

    // Seed discovery: CRD-declared scopes first, then manual overrides.
    // Last applied wins.
    for (gvk, namespaced) in declared_crd_scopes(&set).into_diagnostic()? {
        scopes.add_scope(gvk, namespaced);
    }
    for mapping in &cli.gvk_scope {
        let (gvk, namespaced) = parse_scope_override(mapping).into_diagnostic()?;
        scopes.add_scope(gvk, namespaced);
    }

    let filters: Vec<GroupKind> = cli.filter.iter().map(|f| GroupKind::parse(f)).collect();
    let layout = OutputLayout::new(&cli.output);

    // The universe is a precondition for the mirroring wildcard, so it is
    // collected before anything mutates the set
    let universe = find_namespaces(&set, scopes.as_ref(), &filters, cli.namespace.as_deref())
        .into_diagnostic()?;

    set = filter_documents(set, &filters).into_diagnostic()?;

    let options = DefaultingOptions {
        namespace: cli.namespace.clone(),
        clean: cli.clean,
        strict: cli.strict,
    };
    set = apply_namespace_defaults(set, scopes.as_ref(), &options).into_diagnostic()?;

    set = mirror_documents(set, &universe, scopes.as_ref(), &layout).into_diagnostic()?;

    let written = write_manifests(&set, scopes.as_ref(), &layout, cli)?;

    if cli.remove {
        remove_input_files(&set)?;
    }

    if cli.create_missing_namespaces {
        create_missing_namespace_manifests(&universe, &layout).into_diagnostic()?;
    }

    println!(
        "{} Wrote {} manifest(s) to {}",
        style("✓").green(),
        written,
        cli.output.display()
    );
    Ok(())
}

async fn build_scopes(cli: &Cli) -> Result<Box<dyn ResourceScopes>> {
    if cli.discovery {
        let scopes = ApiServerScopes::connect(cli.kubeconfig.as_deref())
            .await
            .into_diagnostic()?;
        Ok(Box::new(scopes))
    } else {
        Ok(Box::new(LocalScopes::new()))
    }
}

/// Enumerate YAML files across the given inputs; directories are walked
/// recursively in file-name order for deterministic processing.
fn find_input_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let metadata = fs::metadata(input).into_diagnostic()?;
        if metadata.is_dir() {
            for entry in WalkDir::new(input).sort_by_file_name() {
                let entry = entry.into_diagnostic()?;
                if entry.file_type().is_file() && is_yaml_file(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(input.clone());
        }
    }
    Ok(files)
}

fn is_yaml_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|extension| extension.to_str()),
        Some("yaml" | "yml")
    )
}

fn load_documents(files: &[PathBuf]) -> Result<DocumentSet> {
    let mut set = DocumentSet::new();

    if files.is_empty() {
        // No inputs given: read a manifest stream from stdin
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .into_diagnostic()?;
        set.insert(STDIN_PATH, Document::parse_all(&input).into_diagnostic()?);
        return Ok(set);
    }

    for file in files {
        let input = fs::read_to_string(file).into_diagnostic()?;
        let documents = Document::parse_all(&input)
            .map_err(|e| e.in_file(file.display().to_string()))
            .into_diagnostic()?;
        set.insert(file.clone(), documents);
    }
    Ok(set)
}

fn write_manifests(
    set: &DocumentSet,
    scopes: &dyn ResourceScopes,
    layout: &OutputLayout,
    cli: &Cli,
) -> Result<usize> {
    let mut written = 0;
    for (input, documents) in set.files() {
        for document in documents {
            let output = layout.document_path(document, scopes).into_diagnostic()?;
            write_manifest(input, &output, document, cli).into_diagnostic()?;
            written += 1;
        }
    }
    Ok(written)
}

fn write_manifest(
    input: &Path,
    output: &Path,
    document: &Document,
    cli: &Cli,
) -> korral_core::Result<()> {
    if !cli.overwrite && output.exists() {
        return Err(CoreError::OutputCollision {
            path: output.display().to_string(),
        });
    }

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut contents = String::from(MANIFEST_SEPARATOR);
    if cli.comment {
        contents.push_str(&format!("# Source: {}\n", input.display()));
    }
    contents.push_str(&document.to_yaml()?);
    fs::write(output, contents)?;
    Ok(())
}

fn remove_input_files(set: &DocumentSet) -> Result<()> {
    for (path, _) in set.files() {
        if path == Path::new(STDIN_PATH) {
            continue;
        }
        fs::remove_file(path).into_diagnostic()?;
    }
    Ok(())
}

/// Synthesize a minimal Namespace manifest for every namespace in the
/// universe that no output file declares yet.
fn create_missing_namespace_manifests(
    universe: &BTreeSet<String>,
    layout: &OutputLayout,
) -> korral_core::Result<()> {
    for namespace in universe {
        let path = layout.namespace_manifest_path(namespace);
        if path.exists() {
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let manifest = format!(
            "{MANIFEST_SEPARATOR}apiVersion: v1\nkind: Namespace\nmetadata:\n  name: {namespace}\n"
        );
        fs::write(path, manifest)?;
    }
    Ok(())
}
