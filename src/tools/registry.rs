//! The fixed tool registry
//!
//! Variable names and command templates are a compatibility contract with
//! the tools themselves; they must not be reworded. Order is the
//! configuration order and is part of the observable behavior.

use super::ToolSpec;

/// All supported tools, in configuration order
pub fn default_tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec::new("git", "Git", "git")
            .with_env_var("GIT_SSL_CAINFO")
            .with_post_command(["config", "--global", "http.sslCAInfo", "{bundle}"]),
        ToolSpec::new("curl", "curl", "curl").with_env_var("CURL_CA_BUNDLE"),
        ToolSpec::new("wget", "wget", "wget").with_env_var("SSL_CERT_FILE"),
        ToolSpec::new("requests", "Python Requests", "python3").with_env_var("REQUESTS_CA_BUNDLE"),
        ToolSpec::new("aws", "AWS CLI", "aws").with_env_var("AWS_CA_BUNDLE"),
        ToolSpec::new("gcloud", "Google Cloud SDK", "gcloud").with_post_command([
            "config",
            "set",
            "core/custom_ca_certs_file",
            "{bundle}",
        ]),
        ToolSpec::new("az", "Azure CLI", "az").with_env_var("REQUESTS_CA_BUNDLE"),
        ToolSpec::new("npm", "npm", "npm").with_post_command([
            "config",
            "set",
            "cafile",
            "{bundle}",
        ]),
        ToolSpec::new("pip", "pip", "pip3").with_post_command([
            "config",
            "set",
            "global.cert",
            "{bundle}",
        ]),
        ToolSpec::new("node", "Node.js", "node").with_env_var("NODE_EXTRA_CA_CERTS"),
        ToolSpec::new("ruby", "Ruby", "ruby").with_env_var("SSL_CERT_FILE"),
        ToolSpec::new("yarn", "Yarn", "yarn").with_post_command([
            "config",
            "set",
            "cafile",
            "{bundle}",
        ]),
        ToolSpec::new("cargo", "Cargo", "cargo").with_env_var("CARGO_HTTP_CAINFO"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_env_vars_verbatim() {
        let tools = default_tools();
        let env_of = |id: &str| {
            tools
                .iter()
                .find(|t| t.id == id)
                .and_then(|t| t.env_var.clone())
        };

        assert_eq!(env_of("git").as_deref(), Some("GIT_SSL_CAINFO"));
        assert_eq!(env_of("curl").as_deref(), Some("CURL_CA_BUNDLE"));
        assert_eq!(env_of("wget").as_deref(), Some("SSL_CERT_FILE"));
        assert_eq!(env_of("requests").as_deref(), Some("REQUESTS_CA_BUNDLE"));
        assert_eq!(env_of("aws").as_deref(), Some("AWS_CA_BUNDLE"));
        assert_eq!(env_of("az").as_deref(), Some("REQUESTS_CA_BUNDLE"));
        assert_eq!(env_of("node").as_deref(), Some("NODE_EXTRA_CA_CERTS"));
        assert_eq!(env_of("ruby").as_deref(), Some("SSL_CERT_FILE"));
        assert_eq!(env_of("cargo").as_deref(), Some("CARGO_HTTP_CAINFO"));

        // These configure through their native config command instead.
        assert_eq!(env_of("gcloud"), None);
        assert_eq!(env_of("npm"), None);
        assert_eq!(env_of("pip"), None);
        assert_eq!(env_of("yarn"), None);
    }

    #[test]
    fn test_registry_post_commands_verbatim() {
        let tools = default_tools();
        let post_of = |id: &str| {
            tools
                .iter()
                .find(|t| t.id == id)
                .map(|t| t.post_command.join(" "))
        };

        assert_eq!(
            post_of("git").as_deref(),
            Some("config --global http.sslCAInfo {bundle}")
        );
        assert_eq!(
            post_of("gcloud").as_deref(),
            Some("config set core/custom_ca_certs_file {bundle}")
        );
        assert_eq!(post_of("npm").as_deref(), Some("config set cafile {bundle}"));
        assert_eq!(
            post_of("pip").as_deref(),
            Some("config set global.cert {bundle}")
        );
        assert_eq!(
            post_of("yarn").as_deref(),
            Some("config set cafile {bundle}")
        );
        assert_eq!(post_of("curl").as_deref(), Some(""));
    }

    #[test]
    fn test_registry_detection_bins() {
        let tools = default_tools();
        let bin_of = |id: &str| tools.iter().find(|t| t.id == id).map(|t| t.bin.clone());

        assert_eq!(bin_of("requests").as_deref(), Some("python3"));
        assert_eq!(bin_of("pip").as_deref(), Some("pip3"));
        assert_eq!(bin_of("az").as_deref(), Some("az"));
    }
}
