//! Full provisioning pipeline
//!
//! Sequential, single pass: parameter resolution, reachability check,
//! bundle build, tool configuration, special-case installer check. The
//! reachability check is the only stage that aborts the run; everything
//! after the bundle build degrades per tool.

use crate::bundle;
use crate::cli::ProvisionArgs;
use crate::config::RunConfig;
use crate::env_store;
use crate::error::Result;
use crate::installer;
use crate::net::{self, InsecureFetcher};
use crate::tools::{self, configure::SystemHost, configure::ToolOutcome};
use crate::ui;

/// Run the whole pipeline
pub fn run(args: ProvisionArgs, debug: bool, yes: bool) -> Result<()> {
    let config = RunConfig::resolve(args.presets(debug))?;
    let fetcher = InsecureFetcher::new()?;

    ui::info(&format!("Checking tenant {}", config.tenant));
    let status = net::check_reachability(&fetcher, &config.tenant)?;
    ui::done(&format!("Tenant reachable (status {status})"));

    bundle::build(&config, &fetcher, yes)?;

    let bundle_path = config.bundle_path().display().to_string();
    let specs = tools::default_tools();
    let mut store = env_store::platform_store()?;
    let mut host = SystemHost;
    let outcomes = tools::configure::configure_all(
        &specs,
        &bundle_path,
        store.as_mut(),
        &mut host,
        config.debug,
    )?;

    installer::check_and_install(&config.bundle_path())?;

    let configured = outcomes
        .iter()
        .filter(|(_, o)| matches!(o, ToolOutcome::Configured { .. }))
        .count();
    let missing = outcomes.len() - configured;
    ui::done(&format!(
        "Provisioning complete: {configured} tool(s) configured, {missing} not installed"
    ));

    Ok(())
}
