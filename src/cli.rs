//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Presets;

/// nscert - Netskope certificate bundle provisioning
///
/// Build a locally trusted certificate bundle for the Netskope inspection
/// proxy and point every CLI tool and language runtime at it.
#[derive(Parser, Debug)]
#[command(
    name = "nscert",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Provision a Netskope certificate bundle and configure CLI tools to trust it",
    long_about = "nscert downloads the tenant CA certificates and the public Mozilla root list, \
                  concatenates them into one bundle file, and configures git, curl, cloud CLIs, \
                  package managers and language runtimes to validate TLS against that bundle.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  nscert provision --tenant acme.goskope.com --org-key XYZ\n    \
                  nscert check --tenant acme.goskope.com\n    \
                  nscert bundle --recreate\n    \
                  nscert configure\n    \
                  nscert tools"
)]
pub struct Cli {
    /// Answer prompts with their defaults (non-interactive)
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Log each detected tool's version output
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline: check, bundle, configure, installer check
    Provision(ProvisionArgs),

    /// Probe tenant reachability only
    Check(CheckArgs),

    /// Build (or rebuild) the certificate bundle only
    Bundle(ProvisionArgs),

    /// Configure tools against an existing bundle
    Configure(ConfigureArgs),

    /// List the tool registry with detection status
    Tools(ToolsArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Preset parameters shared by provision and bundle
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Fully preset, non-interactive:\n    nscert provision --tenant acme.goskope.com --org-key XYZ --yes\n\n\
                  Force a bundle rebuild:\n    nscert provision --tenant acme.goskope.com --org-key XYZ --recreate\n\n\
                  Custom bundle location:\n    nscert provision --bundle-dir /etc/ssl/netskope --bundle-name ca.pem")]
pub struct ProvisionArgs {
    /// Tenant hostname (e.g. acme.goskope.com)
    #[arg(long, env = "NSCERT_TENANT")]
    pub tenant: Option<String>,

    /// Organization key issued by the tenant
    #[arg(long, env = "NSCERT_ORG_KEY")]
    pub org_key: Option<String>,

    /// Bundle file name
    #[arg(long, env = "NSCERT_BUNDLE_NAME")]
    pub bundle_name: Option<String>,

    /// Directory the bundle is written to
    #[arg(long, env = "NSCERT_BUNDLE_DIR")]
    pub bundle_dir: Option<PathBuf>,

    /// Rebuild the bundle even if it already exists
    #[arg(long)]
    pub recreate: bool,
}

impl ProvisionArgs {
    /// Convert CLI/env presets into the configuration layer's preset block
    pub fn presets(self, debug: bool) -> Presets {
        Presets {
            tenant: self.tenant,
            org_key: self.org_key,
            bundle_name: self.bundle_name,
            bundle_dir: self.bundle_dir,
            recreate: self.recreate,
            debug,
        }
    }
}

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  nscert check --tenant acme.goskope.com")]
pub struct CheckArgs {
    /// Tenant hostname (e.g. acme.goskope.com)
    #[arg(long, env = "NSCERT_TENANT")]
    pub tenant: Option<String>,
}

/// Arguments for the configure command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Configure against the default bundle path:\n    nscert configure\n\n\
                  Configure against a custom bundle:\n    nscert configure --bundle-dir /etc/ssl/netskope --bundle-name ca.pem")]
pub struct ConfigureArgs {
    /// Bundle file name
    #[arg(long, env = "NSCERT_BUNDLE_NAME")]
    pub bundle_name: Option<String>,

    /// Directory the bundle lives in
    #[arg(long, env = "NSCERT_BUNDLE_DIR")]
    pub bundle_dir: Option<PathBuf>,
}

/// Arguments for the tools command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Human-readable listing:\n    nscert tools\n\n\
                  Machine-readable listing:\n    nscert tools --json")]
pub struct ToolsArgs {
    /// Emit the registry as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    nscert completions --shell bash > ~/.bash_completion.d/nscert\n\n\
                  Generate zsh completions:\n    nscert completions --shell zsh > ~/.zfunc/_nscert")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
