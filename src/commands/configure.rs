//! Tool configuration command

use crate::cli::ConfigureArgs;
use crate::config::{DEFAULT_BUNDLE_NAME, default_bundle_dir};
use crate::env_store;
use crate::error::{NscertError, Result};
use crate::tools::{self, configure::SystemHost};
use crate::ui;

/// Configure the tool registry against an existing bundle file
pub fn run(args: ConfigureArgs, debug: bool) -> Result<()> {
    let dir = match args.bundle_dir {
        Some(d) => d,
        None => default_bundle_dir()?,
    };
    let name = args
        .bundle_name
        .unwrap_or_else(|| DEFAULT_BUNDLE_NAME.to_string());
    let bundle_path = dir.join(&name);

    if !bundle_path.is_file() {
        return Err(NscertError::FileReadFailed {
            path: bundle_path.display().to_string(),
            reason: "bundle does not exist; run 'nscert bundle' first".to_string(),
        });
    }

    ui::info(&format!("Configuring tools against {}", bundle_path.display()));

    let specs = tools::default_tools();
    let mut store = env_store::platform_store()?;
    let mut host = SystemHost;
    tools::configure::configure_all(
        &specs,
        &bundle_path.display().to_string(),
        store.as_mut(),
        &mut host,
        debug,
    )?;

    Ok(())
}
