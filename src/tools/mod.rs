//! Tool configuration module
//!
//! This module handles:
//! - Tool definitions ([`ToolSpec`]) describing how each external tool is
//!   detected and pointed at the certificate bundle
//! - The fixed registry of supported tools (via the registry module)
//! - The configuration engine that walks the registry (via the configure
//!   module)

use serde::Serialize;

pub mod configure;
pub mod registry;

/// One external tool and how to point it at the certificate bundle.
///
/// Entries are static: defined once in the registry and iterated in fixed
/// order. Configuration side effects land in the operator's environment
/// store or the tool's own config store, never in this type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolSpec {
    /// Tool identifier (e.g. "git", "aws")
    pub id: String,

    /// Display name for log lines
    pub name: String,

    /// Executable name looked up on PATH for detection
    pub bin: String,

    /// Environment variable the tool reads its CA bundle path from, if any
    pub env_var: Option<String>,

    /// Arguments for the tool's version command, used only for --debug
    pub version_args: Vec<String>,

    /// Tool-native configuration command, run with `{bundle}` substituted.
    /// Arguments to `bin`, not a shell line.
    pub post_command: Vec<String>,
}

impl ToolSpec {
    /// Create a new tool spec
    pub fn new(id: impl Into<String>, name: impl Into<String>, bin: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bin: bin.into(),
            env_var: None,
            version_args: vec!["--version".to_string()],
            post_command: Vec::new(),
        }
    }

    /// Set the CA-bundle environment variable
    pub fn with_env_var(mut self, var: impl Into<String>) -> Self {
        self.env_var = Some(var.into());
        self
    }

    /// Set the tool-native configuration command template
    pub fn with_post_command<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.post_command = args.into_iter().map(Into::into).collect();
        self
    }

    /// Substitute the bundle path into the post-command template
    pub fn post_command_for(&self, bundle_path: &str) -> Vec<String> {
        self.post_command
            .iter()
            .map(|arg| arg.replace("{bundle}", bundle_path))
            .collect()
    }
}

/// Get the default tool registry, in configuration order
pub fn default_tools() -> Vec<ToolSpec> {
    registry::default_tools()
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_tool_spec_new() {
        let spec = ToolSpec::new("curl", "curl", "curl");
        assert_eq!(spec.id, "curl");
        assert_eq!(spec.bin, "curl");
        assert_eq!(spec.env_var, None);
        assert!(spec.post_command.is_empty());
        assert_eq!(spec.version_args, vec!["--version"]);
    }

    #[test]
    fn test_tool_spec_builders() {
        let spec = ToolSpec::new("git", "Git", "git")
            .with_env_var("GIT_SSL_CAINFO")
            .with_post_command(["config", "--global", "http.sslCAInfo", "{bundle}"]);

        assert_eq!(spec.env_var.as_deref(), Some("GIT_SSL_CAINFO"));
        assert_eq!(spec.post_command.len(), 4);
    }

    #[test]
    fn test_post_command_substitution() {
        let spec = ToolSpec::new("npm", "npm", "npm").with_post_command([
            "config",
            "set",
            "cafile",
            "{bundle}",
        ]);

        let args = spec.post_command_for("/home/op/netskope/netskope-cert-bundle.pem");
        assert_eq!(
            args,
            vec![
                "config",
                "set",
                "cafile",
                "/home/op/netskope/netskope-cert-bundle.pem"
            ]
        );
    }

    #[test]
    fn test_default_tools_count_and_order() {
        let tools = default_tools();
        assert_eq!(tools.len(), 13);

        let ids: Vec<_> = tools.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "git", "curl", "wget", "requests", "aws", "gcloud", "az", "npm", "pip", "node",
                "ruby", "yarn", "cargo",
            ]
        );
    }
}
