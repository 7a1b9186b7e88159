//! HTTP access for the provisioning run
//!
//! Every request here runs with certificate validation disabled. That is
//! deliberate: the run exists to obtain the trust material, so at probe and
//! download time there is nothing to validate against yet.
//!
//! All access goes through the [`Fetcher`] trait so the pipeline stages can
//! be exercised against scripted responses without a network.

use std::io::Read;
use std::sync::Arc;

use crate::error::{NscertError, Result};

/// HTTP statuses accepted by the reachability probe.
///
/// 307 is what a tenant fronted by the inspection proxy answers on
/// `/locallogin`; 200 and 302 are accepted as well so a tenant that
/// serves the login page directly still passes.
pub const REACHABLE_STATUSES: [u16; 3] = [200, 302, 307];

/// Blocking HTTP access used by the probe and the bundle builder
pub trait Fetcher {
    /// GET a resource and return its body
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;

    /// GET a resource and return only its status code, without following
    /// redirects
    fn status(&self, url: &str) -> Result<u16>;
}

/// `ureq`-backed fetcher with TLS certificate validation disabled
pub struct InsecureFetcher {
    agent: ureq::Agent,
    probe_agent: ureq::Agent,
}

impl InsecureFetcher {
    pub fn new() -> Result<Self> {
        let connector = native_tls::TlsConnector::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| NscertError::IoError {
                message: format!("failed to build TLS connector: {e}"),
            })?;
        let connector = Arc::new(connector);

        let agent = ureq::builder().tls_connector(connector.clone()).build();
        // The probe classifies the redirect status itself, so redirects
        // must not be followed there.
        let probe_agent = ureq::builder().tls_connector(connector).redirects(0).build();

        Ok(Self { agent, probe_agent })
    }
}

impl Fetcher for InsecureFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                return Err(NscertError::FetchStatus {
                    url: url.to_string(),
                    status,
                });
            }
            Err(e) => {
                return Err(NscertError::FetchFailed {
                    url: url.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| NscertError::FetchFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(body)
    }

    fn status(&self, url: &str) -> Result<u16> {
        match self.probe_agent.get(url).call() {
            Ok(response) => Ok(response.status()),
            Err(ureq::Error::Status(status, _)) => Ok(status),
            Err(e) => Err(NscertError::FetchFailed {
                url: url.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

/// Probe `https://<tenant>/locallogin` and fail the run unless the status
/// is one of [`REACHABLE_STATUSES`]. Nothing downstream runs on failure.
pub fn check_reachability(fetcher: &dyn Fetcher, tenant: &str) -> Result<u16> {
    let url = format!("https://{tenant}/locallogin");
    let status = fetcher.status(&url).map_err(|e| NscertError::ProbeFailed {
        tenant: tenant.to_string(),
        reason: e.to_string(),
    })?;

    if REACHABLE_STATUSES.contains(&status) {
        Ok(status)
    } else {
        Err(NscertError::TenantUnreachable {
            tenant: tenant.to_string(),
            status,
        })
    }
}
