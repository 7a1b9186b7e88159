//! Run configuration
//!
//! The shell scripts this tool replaces kept their parameters in mutable
//! script-globals. Here every run resolves a single immutable [`RunConfig`]
//! up front, from CLI flags / environment presets where given and from
//! interactive prompts otherwise, and passes it down to every stage.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{NscertError, Result};
use crate::ui;

/// Default bundle file name, shared across platforms
pub const DEFAULT_BUNDLE_NAME: &str = "netskope-cert-bundle.pem";

/// File name of the secondary, tenant-only bundle
pub const TENANT_BUNDLE_NAME: &str = "netskope-tenant-certs.pem";

/// Public list of browser-trusted root certificates (website trust bits only)
pub const MOZILLA_ROOTS_URL: &str =
    "https://ccadb-public.secure.force.com/mozilla/IncludedRootsPEMTxt?TrustBitsInclude=Websites";

/// Resolved parameters for one provisioning run; immutable once built
#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    /// Tenant hostname, e.g. "acme.goskope.com"
    pub tenant: String,

    /// Organization key issued by the tenant
    pub org_key: String,

    /// Bundle file name inside `bundle_dir`
    pub bundle_name: String,

    /// Directory the bundle is written to
    pub bundle_dir: PathBuf,

    /// Rebuild the bundle even if it already exists
    pub recreate: bool,

    /// Emit per-tool version diagnostics
    pub debug: bool,
}

/// Preset values as they arrive from the CLI, before prompting
#[derive(Debug, Clone, Default)]
pub struct Presets {
    pub tenant: Option<String>,
    pub org_key: Option<String>,
    pub bundle_name: Option<String>,
    pub bundle_dir: Option<PathBuf>,
    pub recreate: bool,
    pub debug: bool,
}

/// Platform default for the bundle directory
pub fn default_bundle_dir() -> Result<PathBuf> {
    if cfg!(windows) {
        Ok(PathBuf::from(r"C:\Netskope"))
    } else {
        let home = dirs::home_dir().ok_or(NscertError::HomeDirNotFound)?;
        Ok(home.join("netskope"))
    }
}

impl RunConfig {
    /// Resolve a full configuration from presets, prompting for whatever is
    /// missing. Tenant and org key have no defaults; the bundle name and
    /// directory fall back to fixed defaults instead of prompting.
    ///
    /// No format validation happens here: a bad tenant or key surfaces as a
    /// failed reachability check or a failed download.
    pub fn resolve(presets: Presets) -> Result<Self> {
        let tenant = match presets.tenant {
            Some(t) if !t.is_empty() => {
                ui::info(&format!("Using preset tenant: {t}"));
                t
            }
            _ => ui::prompt_value("Tenant hostname (e.g. example.goskope.com):")?,
        };

        let org_key = match presets.org_key {
            Some(k) if !k.is_empty() => {
                ui::info("Using preset organization key");
                k
            }
            _ => ui::prompt_value("Organization key:")?,
        };

        let bundle_name = match presets.bundle_name {
            Some(n) if !n.is_empty() => {
                ui::info(&format!("Using preset bundle name: {n}"));
                n
            }
            _ => DEFAULT_BUNDLE_NAME.to_string(),
        };

        let bundle_dir = match presets.bundle_dir {
            Some(d) if !d.as_os_str().is_empty() => {
                ui::info(&format!("Using preset bundle directory: {}", d.display()));
                d
            }
            _ => default_bundle_dir()?,
        };

        Ok(Self {
            tenant,
            org_key,
            bundle_name,
            bundle_dir,
            recreate: presets.recreate,
            debug: presets.debug,
        })
    }

    /// Full path of the primary bundle file
    pub fn bundle_path(&self) -> PathBuf {
        self.bundle_dir.join(&self.bundle_name)
    }

    /// Full path of the tenant-only bundle file
    pub fn tenant_bundle_path(&self) -> PathBuf {
        self.bundle_dir.join(TENANT_BUNDLE_NAME)
    }

    /// Reachability probe endpoint
    pub fn probe_url(&self) -> String {
        format!("https://{}/locallogin", self.tenant)
    }

    /// Tenant root CA certificate endpoint
    pub fn ca_cert_url(&self) -> String {
        format!(
            "https://addon-{}/config/ca/cert?orgkey={}",
            self.tenant, self.org_key
        )
    }

    /// Tenant organization certificate endpoint
    pub fn org_cert_url(&self) -> String {
        format!(
            "https://addon-{}/config/org/cert?orgkey={}",
            self.tenant, self.org_key
        )
    }
}

/// Build a RunConfig directly from complete presets, for stages that must
/// not prompt (tests, `--yes` runs with all flags given).
pub fn from_parts(
    tenant: String,
    org_key: String,
    bundle_name: String,
    bundle_dir: &Path,
    recreate: bool,
    debug: bool,
) -> RunConfig {
    RunConfig {
        tenant,
        org_key,
        bundle_name,
        bundle_dir: bundle_dir.to_path_buf(),
        recreate,
        debug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme_config() -> RunConfig {
        from_parts(
            "acme.goskope.com".to_string(),
            "XYZ".to_string(),
            DEFAULT_BUNDLE_NAME.to_string(),
            Path::new("/home/op/netskope"),
            false,
            false,
        )
    }

    #[test]
    fn test_resolve_with_full_presets() {
        let presets = Presets {
            tenant: Some("acme.goskope.com".to_string()),
            org_key: Some("XYZ".to_string()),
            bundle_name: Some("custom.pem".to_string()),
            bundle_dir: Some(PathBuf::from("/tmp/certs")),
            recreate: true,
            debug: true,
        };

        let config = RunConfig::resolve(presets).unwrap();
        assert_eq!(config.tenant, "acme.goskope.com");
        assert_eq!(config.org_key, "XYZ");
        assert_eq!(config.bundle_name, "custom.pem");
        assert_eq!(config.bundle_dir, PathBuf::from("/tmp/certs"));
        assert!(config.recreate);
        assert!(config.debug);
    }

    #[test]
    fn test_resolve_defaults_bundle_fields() {
        let presets = Presets {
            tenant: Some("acme.goskope.com".to_string()),
            org_key: Some("XYZ".to_string()),
            ..Presets::default()
        };

        let config = RunConfig::resolve(presets).unwrap();
        assert_eq!(config.bundle_name, DEFAULT_BUNDLE_NAME);
        assert!(config.bundle_dir.ends_with(if cfg!(windows) {
            "Netskope"
        } else {
            "netskope"
        }));
    }

    #[test]
    fn test_bundle_paths() {
        let config = acme_config();
        assert_eq!(
            config.bundle_path(),
            PathBuf::from("/home/op/netskope/netskope-cert-bundle.pem")
        );
        assert_eq!(
            config.tenant_bundle_path(),
            PathBuf::from("/home/op/netskope/netskope-tenant-certs.pem")
        );
    }

    #[test]
    fn test_urls() {
        let config = acme_config();
        assert_eq!(config.probe_url(), "https://acme.goskope.com/locallogin");
        assert_eq!(
            config.ca_cert_url(),
            "https://addon-acme.goskope.com/config/ca/cert?orgkey=XYZ"
        );
        assert_eq!(
            config.org_cert_url(),
            "https://addon-acme.goskope.com/config/org/cert?orgkey=XYZ"
        );
        assert!(MOZILLA_ROOTS_URL.contains("TrustBitsInclude=Websites"));
    }
}
