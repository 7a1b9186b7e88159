//! Certificate bundle builder
//!
//! Downloads the tenant root CA, the tenant organization certificate and the
//! public Mozilla-included root list, and concatenates them byte-for-byte
//! into the bundle file. The concatenation is not PEM-aware: no parsing, no
//! deduplication, exactly what the sources returned, in that order.
//!
//! The three bodies are collected in memory and written in one pass, so a
//! failed download never leaves a truncated bundle behind.

use std::fs;
use std::path::Path;

use crate::config::{MOZILLA_ROOTS_URL, RunConfig};
use crate::error::{NscertError, Result};
use crate::net::Fetcher;
use crate::ui;

/// What the builder did for this run
#[derive(Debug, PartialEq, Eq)]
pub enum BundleOutcome {
    /// Existing bundle kept; no network call was made
    Skipped,
    /// Bundle (and the tenant-only bundle) written
    Written { bytes: usize },
}

/// Build the bundle at `config.bundle_path()`.
///
/// If the file already exists and `recreate` is not set, the operator is
/// asked for consent; with `assume_yes` the prompt is suppressed and the
/// existing bundle is kept. A secondary bundle holding only the two
/// tenant certificates is written alongside whenever the main bundle is.
pub fn build(config: &RunConfig, fetcher: &dyn Fetcher, assume_yes: bool) -> Result<BundleOutcome> {
    let bundle_path = config.bundle_path();

    if bundle_path.exists() && !config.recreate {
        let recreate = if assume_yes {
            false
        } else {
            ui::confirm(
                &format!(
                    "Bundle {} already exists. Recreate it?",
                    bundle_path.display()
                ),
                false,
            )?
        };
        if !recreate {
            ui::skip(&format!(
                "Keeping existing bundle at {}",
                bundle_path.display()
            ));
            return Ok(BundleOutcome::Skipped);
        }
    }

    let ca_cert = fetch_logged(fetcher, &config.ca_cert_url())?;
    let org_cert = fetch_logged(fetcher, &config.org_cert_url())?;
    let mozilla_roots = fetch_logged(fetcher, MOZILLA_ROOTS_URL)?;

    let mut tenant_only = Vec::with_capacity(ca_cert.len() + org_cert.len());
    tenant_only.extend_from_slice(&ca_cert);
    tenant_only.extend_from_slice(&org_cert);

    let mut full = Vec::with_capacity(tenant_only.len() + mozilla_roots.len());
    full.extend_from_slice(&tenant_only);
    full.extend_from_slice(&mozilla_roots);

    write_file(&bundle_path, &full)?;
    write_file(&config.tenant_bundle_path(), &tenant_only)?;

    ui::done(&format!(
        "Wrote bundle ({} bytes) to {}",
        full.len(),
        bundle_path.display()
    ));
    ui::done(&format!(
        "Wrote tenant-only bundle to {}",
        config.tenant_bundle_path().display()
    ));

    Ok(BundleOutcome::Written { bytes: full.len() })
}

fn fetch_logged(fetcher: &dyn Fetcher, url: &str) -> Result<Vec<u8>> {
    let spinner = ui::download_spinner(url);
    let result = fetcher.fetch(url);
    spinner.finish_and_clear();
    match &result {
        Ok(body) => ui::done(&format!("Fetched {url} ({} bytes)", body.len())),
        Err(_) => ui::warn(&format!("Download failed: {url}")),
    }
    result
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| NscertError::FileWriteFailed {
            path: parent.display().to_string(),
            reason: e.to_string(),
        })?;
    }
    fs::write(path, contents).map_err(|e| NscertError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
