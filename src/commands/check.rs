//! Reachability check command

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::net::{self, InsecureFetcher};
use crate::ui;

/// Probe the tenant endpoint and report the result
pub fn run(args: CheckArgs) -> Result<()> {
    let tenant = match args.tenant {
        Some(t) if !t.is_empty() => t,
        _ => ui::prompt_value("Tenant hostname (e.g. example.goskope.com):")?,
    };

    ui::info(&format!("Probing https://{tenant}/locallogin"));
    let fetcher = InsecureFetcher::new()?;
    let status = net::check_reachability(&fetcher, &tenant)?;
    ui::done(&format!("Tenant {tenant} is reachable (status {status})"));

    Ok(())
}
