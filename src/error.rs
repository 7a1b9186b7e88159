//! Error types and handling for nscert
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only a subset of failures is fatal: an unreachable tenant and a failed
//! certificate download abort the run. A missing tool or a failing
//! tool-native configuration command is reported to the operator and the
//! run continues, so neither appears here.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for nscert operations
#[derive(Error, Diagnostic, Debug)]
pub enum NscertError {
    // Reachability errors
    #[error("Tenant '{tenant}' is not reachable (status {status})")]
    #[diagnostic(
        code(nscert::net::tenant_unreachable),
        help("Check the tenant hostname (e.g. example.goskope.com) and that this machine sits behind the Netskope proxy")
    )]
    TenantUnreachable { tenant: String, status: u16 },

    #[error("Failed to contact tenant '{tenant}': {reason}")]
    #[diagnostic(
        code(nscert::net::probe_failed),
        help("Check the tenant hostname and your network connection")
    )]
    ProbeFailed { tenant: String, reason: String },

    // Download errors
    #[error("Failed to download {url}: {reason}")]
    #[diagnostic(
        code(nscert::net::fetch_failed),
        help("The bundle was not written; re-run once the endpoint is reachable")
    )]
    FetchFailed { url: String, reason: String },

    #[error("Download of {url} returned status {status}")]
    #[diagnostic(
        code(nscert::net::fetch_status),
        help("Check that the organization key is correct for this tenant")
    )]
    FetchStatus { url: String, status: u16 },

    // File system errors
    #[error("Failed to write file {path}: {reason}")]
    #[diagnostic(code(nscert::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to read file {path}: {reason}")]
    #[diagnostic(code(nscert::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Could not determine the home directory")]
    #[diagnostic(
        code(nscert::fs::home_not_found),
        help("Set HOME (or the platform equivalent) and re-run")
    )]
    HomeDirNotFound,

    // Environment persistence errors
    #[error("Failed to persist {var} to {store}: {reason}")]
    #[diagnostic(code(nscert::env::persist_failed))]
    EnvPersistFailed {
        var: String,
        store: String,
        reason: String,
    },

    // Interaction errors
    #[error("Failed to read operator input: {reason}")]
    #[diagnostic(
        code(nscert::prompt::failed),
        help("Pass --tenant/--org-key (or --yes) to run non-interactively")
    )]
    PromptFailed { reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(nscert::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for NscertError {
    fn from(err: std::io::Error) -> Self {
        NscertError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for NscertError {
    fn from(err: inquire::InquireError) -> Self {
        NscertError::PromptFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, NscertError>;
