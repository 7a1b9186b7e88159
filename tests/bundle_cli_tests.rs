//! Bundle command integration tests
//!
//! Network-free: these exercise the skip path (bundle already present) and
//! the fail-closed path (tenant unresolvable). Successful downloads are
//! covered by unit tests against a scripted fetcher.

mod common;

use common::{TestWorkspace, nscert_cmd};
use predicates::prelude::*;

#[test]
fn test_existing_bundle_is_kept_with_yes() {
    let ws = TestWorkspace::new();
    ws.write_file("netskope-cert-bundle.pem", b"previous contents");

    nscert_cmd()
        .args([
            "--yes",
            "bundle",
            "--tenant",
            "tenant.invalid",
            "--org-key",
            "XYZ",
            "--bundle-dir",
        ])
        .arg(&ws.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Keeping existing bundle"));

    // Byte-for-byte untouched, and no tenant-only bundle appeared either.
    assert_eq!(ws.read_file("netskope-cert-bundle.pem"), b"previous contents");
    assert!(!ws.file_exists("netskope-tenant-certs.pem"));
}

#[test]
fn test_failed_download_aborts_without_partial_bundle() {
    let ws = TestWorkspace::new();

    nscert_cmd()
        .args([
            "--yes",
            "bundle",
            "--tenant",
            "tenant.invalid",
            "--org-key",
            "XYZ",
            "--bundle-dir",
        ])
        .arg(&ws.path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));

    assert!(!ws.file_exists("netskope-cert-bundle.pem"));
    assert!(!ws.file_exists("netskope-tenant-certs.pem"));
}

#[test]
fn test_recreate_with_unresolvable_tenant_keeps_old_bundle() {
    // Fail-closed: --recreate plus a failed fetch must not clobber the
    // existing bundle.
    let ws = TestWorkspace::new();
    ws.write_file("netskope-cert-bundle.pem", b"previous contents");

    nscert_cmd()
        .args([
            "--yes",
            "bundle",
            "--recreate",
            "--tenant",
            "tenant.invalid",
            "--org-key",
            "XYZ",
            "--bundle-dir",
        ])
        .arg(&ws.path)
        .assert()
        .failure();

    assert_eq!(ws.read_file("netskope-cert-bundle.pem"), b"previous contents");
}

#[test]
fn test_provision_aborts_before_bundle_when_unreachable() {
    let ws = TestWorkspace::new();

    nscert_cmd()
        .args([
            "--yes",
            "provision",
            "--tenant",
            "tenant.invalid",
            "--org-key",
            "XYZ",
            "--bundle-dir",
        ])
        .arg(&ws.path)
        .assert()
        .failure()
        .code(1);

    // The reachability check failed, so no file mutation happened.
    assert!(!ws.file_exists("netskope-cert-bundle.pem"));
}
