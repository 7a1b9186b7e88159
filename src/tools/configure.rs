//! Tool configuration engine
//!
//! Walks the registry in order. For each tool: detect it on PATH, optionally
//! log its version, bring its CA-bundle environment variable up to date, and
//! run its native configuration command. A missing tool is skipped, and a
//! failing native command is reported but never aborts the run.

use std::path::PathBuf;
use std::process::Output;

use crate::env_store::EnvStore;
use crate::error::Result;
use crate::ui;

use super::ToolSpec;

/// Subprocess and PATH access, separated out so the engine can run against
/// a scripted host in tests
pub trait Host {
    /// Locate an executable on the search path
    fn find(&self, bin: &str) -> Option<PathBuf>;

    /// Run a program to completion, capturing its output
    fn run(&mut self, program: &str, args: &[String]) -> std::io::Result<Output>;
}

/// Real PATH lookup and subprocess execution
pub struct SystemHost;

impl Host for SystemHost {
    fn find(&self, bin: &str) -> Option<PathBuf> {
        which::which(bin).ok()
    }

    fn run(&mut self, program: &str, args: &[String]) -> std::io::Result<Output> {
        std::process::Command::new(program).args(args).output()
    }
}

/// What the env-var step did for one tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvAction {
    /// Tool declares no environment variable
    None,
    /// Current value already equals the bundle path, nothing written
    AlreadySet,
    /// New value persisted to the store
    Persisted,
}

/// What the native-command step did for one tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAction {
    /// Tool declares no native configuration command
    None,
    Succeeded,
    /// Non-zero exit or failure to launch; tool-local, never fatal
    Failed,
}

/// Per-tool result of one configurator pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// Executable not found on PATH; nothing else was attempted
    Missing,
    Configured { env: EnvAction, post: PostAction },
}

/// Configure a single tool against the bundle path
pub fn configure_tool(
    spec: &ToolSpec,
    bundle_path: &str,
    store: &mut dyn EnvStore,
    host: &mut dyn Host,
    debug: bool,
) -> Result<ToolOutcome> {
    let Some(bin_path) = host.find(&spec.bin) else {
        ui::skip(&format!("{} not found on PATH", spec.name));
        return Ok(ToolOutcome::Missing);
    };

    ui::info(&format!("{} found at {}", spec.name, bin_path.display()));

    if debug && !spec.version_args.is_empty() {
        match host.run(&spec.bin, &spec.version_args) {
            Ok(output) => {
                let text = String::from_utf8_lossy(&output.stdout);
                ui::debug(
                    &format!("{} {}", spec.bin, spec.version_args.join(" ")),
                    text.trim(),
                );
            }
            Err(e) => ui::warn(&format!("Could not query {} version: {e}", spec.name)),
        }
    }

    let env = match &spec.env_var {
        None => EnvAction::None,
        Some(var) => {
            if store.current(var).as_deref() == Some(bundle_path) {
                ui::skip(&format!("{} already configured ({var})", spec.name));
                EnvAction::AlreadySet
            } else {
                store.persist(var, bundle_path)?;
                ui::done(&format!(
                    "{}: persisted {var} to {} (takes effect in your next shell session)",
                    spec.name,
                    store.location()
                ));
                EnvAction::Persisted
            }
        }
    };

    // The native command always runs when declared, whether or not the
    // env-var step changed anything.
    let post = if spec.post_command.is_empty() {
        PostAction::None
    } else {
        let args = spec.post_command_for(bundle_path);
        match host.run(&spec.bin, &args) {
            Ok(output) if output.status.success() => {
                ui::done(&format!("{}: ran {} {}", spec.name, spec.bin, args.join(" ")));
                PostAction::Succeeded
            }
            Ok(output) => {
                ui::warn(&format!(
                    "{} configuration command exited with {}: {}",
                    spec.name,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ));
                PostAction::Failed
            }
            Err(e) => {
                ui::warn(&format!("{} configuration command failed to run: {e}", spec.name));
                PostAction::Failed
            }
        }
    };

    Ok(ToolOutcome::Configured { env, post })
}

/// Run the configurator across the whole registry, in order
pub fn configure_all(
    specs: &[ToolSpec],
    bundle_path: &str,
    store: &mut dyn EnvStore,
    host: &mut dyn Host,
    debug: bool,
) -> Result<Vec<(String, ToolOutcome)>> {
    let progress = ui::tool_progress(specs.len() as u64);
    let mut outcomes = Vec::with_capacity(specs.len());

    for spec in specs {
        progress.set_message(spec.name.clone());
        let outcome = configure_tool(spec, bundle_path, store, host, debug)?;
        outcomes.push((spec.id.clone(), outcome));
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(outcomes)
}
