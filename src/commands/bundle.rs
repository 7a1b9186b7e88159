//! Bundle build command

use crate::bundle;
use crate::cli::ProvisionArgs;
use crate::config::RunConfig;
use crate::error::Result;
use crate::net::InsecureFetcher;

/// Build (or rebuild) the certificate bundle without touching any tool
pub fn run(args: ProvisionArgs, debug: bool, yes: bool) -> Result<()> {
    let config = RunConfig::resolve(args.presets(debug))?;
    let fetcher = InsecureFetcher::new()?;
    bundle::build(&config, &fetcher, yes)?;
    Ok(())
}
