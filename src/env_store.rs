//! Persistent environment-variable configuration
//!
//! The configurator never mutates its own process environment for later
//! stages; it writes configuration that takes effect in the operator's next
//! shell session. The [`EnvStore`] trait is the seam that lets the
//! configurator be tested without touching the real environment.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{NscertError, Result};

/// Read-compare-write access to the operator's environment configuration
pub trait EnvStore {
    /// Current value of `var` as the running process sees it
    fn current(&self, var: &str) -> Option<String>;

    /// Persist `var=value` at user scope; effective from the next session
    fn persist(&mut self, var: &str, value: &str) -> Result<()>;

    /// Human-readable location of the store, for log lines
    fn location(&self) -> String;
}

/// Unix store: appends `export VAR="value"` to the shell startup file
pub struct ShellProfileStore {
    profile: PathBuf,
}

impl ShellProfileStore {
    pub fn new(profile: PathBuf) -> Self {
        Self { profile }
    }

    /// Pick the startup file of the operator's login shell from `$SHELL`,
    /// falling back to `~/.profile` for anything unrecognized.
    pub fn for_current_shell() -> Result<Self> {
        let home = dirs::home_dir().ok_or(NscertError::HomeDirNotFound)?;
        let shell = std::env::var("SHELL").unwrap_or_default();
        let profile = if shell.ends_with("zsh") {
            home.join(".zshrc")
        } else if shell.ends_with("bash") {
            home.join(".bashrc")
        } else {
            home.join(".profile")
        };
        Ok(Self { profile })
    }

    fn export_line(var: &str, value: &str) -> String {
        format!("export {var}=\"{value}\"")
    }

    fn has_line(&self, line: &str) -> bool {
        match fs::read_to_string(&self.profile) {
            Ok(contents) => contents.lines().any(|l| l.trim() == line),
            Err(_) => false,
        }
    }
}

impl EnvStore for ShellProfileStore {
    fn current(&self, var: &str) -> Option<String> {
        std::env::var(var).ok()
    }

    fn persist(&mut self, var: &str, value: &str) -> Result<()> {
        let line = Self::export_line(var, value);

        // The same variable can appear in more than one registry entry
        // (SSL_CERT_FILE, REQUESTS_CA_BUNDLE); never append a duplicate.
        if self.has_line(&line) {
            return Ok(());
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.profile)
            .map_err(|e| NscertError::EnvPersistFailed {
                var: var.to_string(),
                store: self.profile.display().to_string(),
                reason: e.to_string(),
            })?;
        writeln!(file, "{line}").map_err(|e| NscertError::EnvPersistFailed {
            var: var.to_string(),
            store: self.profile.display().to_string(),
            reason: e.to_string(),
        })
    }

    fn location(&self) -> String {
        self.profile.display().to_string()
    }
}

/// Windows store: user-scoped persistent variables via `setx`
#[cfg(windows)]
pub struct RegistryStore;

#[cfg(windows)]
impl EnvStore for RegistryStore {
    fn current(&self, var: &str) -> Option<String> {
        std::env::var(var).ok()
    }

    fn persist(&mut self, var: &str, value: &str) -> Result<()> {
        let status = std::process::Command::new("setx")
            .args([var, value])
            .status()
            .map_err(|e| NscertError::EnvPersistFailed {
                var: var.to_string(),
                store: "user environment".to_string(),
                reason: e.to_string(),
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(NscertError::EnvPersistFailed {
                var: var.to_string(),
                store: "user environment".to_string(),
                reason: format!("setx exited with {status}"),
            })
        }
    }

    fn location(&self) -> String {
        "user environment (setx)".to_string()
    }
}

/// Store appropriate for the current platform
pub fn platform_store() -> Result<Box<dyn EnvStore>> {
    #[cfg(windows)]
    {
        Ok(Box::new(RegistryStore))
    }
    #[cfg(not(windows))]
    {
        Ok(Box::new(ShellProfileStore::for_current_shell()?))
    }
}

/// In-memory store for tests
#[cfg(test)]
pub struct MemoryStore {
    values: std::collections::HashMap<String, String>,
    /// Every (var, value) passed to `persist`, in order
    pub writes: Vec<(String, String)>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self {
            values: std::collections::HashMap::new(),
            writes: Vec::new(),
        }
    }

    pub fn with_value(mut self, var: &str, value: &str) -> Self {
        self.values.insert(var.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
impl EnvStore for MemoryStore {
    fn current(&self, var: &str) -> Option<String> {
        self.values.get(var).cloned()
    }

    fn persist(&mut self, var: &str, value: &str) -> Result<()> {
        self.writes.push((var.to_string(), value.to_string()));
        self.values.insert(var.to_string(), value.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
