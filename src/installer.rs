//! Special-case installer check
//!
//! Docker Desktop is the one application configured by file copy instead of
//! an environment variable: if its per-user certificate directory exists,
//! the bundle is copied into it verbatim, overwriting any previous copy.
//! No other special cases exist.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NscertError, Result};
use crate::ui;

/// Docker Desktop's per-user certificate directory
pub fn docker_certs_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(NscertError::HomeDirNotFound)?;
    Ok(home.join(".docker").join("certs.d"))
}

/// Copy the bundle into `certs_dir` if that directory exists.
///
/// Returns the destination path when the copy happened, `None` when the
/// application is not installed.
pub fn install_into(certs_dir: &Path, bundle_path: &Path) -> Result<Option<PathBuf>> {
    if !certs_dir.is_dir() {
        ui::skip("Docker Desktop not installed (no certificate directory)");
        return Ok(None);
    }

    let file_name = bundle_path
        .file_name()
        .ok_or_else(|| NscertError::FileReadFailed {
            path: bundle_path.display().to_string(),
            reason: "bundle path has no file name".to_string(),
        })?;
    let dest = certs_dir.join(file_name);

    fs::copy(bundle_path, &dest).map_err(|e| NscertError::FileWriteFailed {
        path: dest.display().to_string(),
        reason: e.to_string(),
    })?;

    ui::done(&format!("Copied bundle into {}", dest.display()));
    Ok(Some(dest))
}

/// Run the check against the real Docker Desktop directory
pub fn check_and_install(bundle_path: &Path) -> Result<Option<PathBuf>> {
    install_into(&docker_certs_dir()?, bundle_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_absent_directory_is_skipped() {
        let temp = TempDir::new().unwrap();
        let bundle = temp.path().join("bundle.pem");
        fs::write(&bundle, b"PEM").unwrap();

        let result = install_into(&temp.path().join("certs.d"), &bundle).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_bundle_copied_verbatim() {
        let temp = TempDir::new().unwrap();
        let certs_dir = temp.path().join("certs.d");
        fs::create_dir(&certs_dir).unwrap();

        let bundle = temp.path().join("netskope-cert-bundle.pem");
        fs::write(&bundle, b"-----BEGIN CERTIFICATE-----\n").unwrap();

        let dest = install_into(&certs_dir, &bundle).unwrap().unwrap();
        assert_eq!(dest, certs_dir.join("netskope-cert-bundle.pem"));
        assert_eq!(fs::read(dest).unwrap(), fs::read(bundle).unwrap());
    }

    #[test]
    fn test_existing_copy_is_overwritten() {
        let temp = TempDir::new().unwrap();
        let certs_dir = temp.path().join("certs.d");
        fs::create_dir(&certs_dir).unwrap();
        fs::write(certs_dir.join("bundle.pem"), b"stale").unwrap();

        let bundle = temp.path().join("bundle.pem");
        fs::write(&bundle, b"fresh").unwrap();

        install_into(&certs_dir, &bundle).unwrap();
        assert_eq!(fs::read(certs_dir.join("bundle.pem")).unwrap(), b"fresh");
    }
}
