//! Tool registry listing command

use console::Style;

use crate::cli::ToolsArgs;
use crate::error::{NscertError, Result};
use crate::tools::{self, configure::Host, configure::SystemHost};

/// List the registry with per-tool detection status
pub fn run(args: ToolsArgs) -> Result<()> {
    let specs = tools::default_tools();
    let host = SystemHost;

    if args.json {
        let listing: Vec<serde_json::Value> = specs
            .iter()
            .map(|spec| {
                serde_json::json!({
                    "id": spec.id,
                    "name": spec.name,
                    "bin": spec.bin,
                    "env_var": spec.env_var,
                    "post_command": spec.post_command,
                    "detected": host.find(&spec.bin).is_some(),
                })
            })
            .collect();
        let rendered = serde_json::to_string_pretty(&listing).map_err(|e| {
            NscertError::IoError {
                message: e.to_string(),
            }
        })?;
        println!("{rendered}");
        return Ok(());
    }

    for spec in &specs {
        let status = match host.find(&spec.bin) {
            Some(path) => Style::new()
                .green()
                .apply_to(format!("found at {}", path.display()))
                .to_string(),
            None => Style::new().dim().apply_to("not found").to_string(),
        };
        println!(
            "  {:<18} {}",
            Style::new().bold().yellow().apply_to(&spec.name),
            status
        );
        if let Some(var) = &spec.env_var {
            println!("    {} {var}", Style::new().bold().apply_to("env:"));
        }
        if !spec.post_command.is_empty() {
            println!(
                "    {} {} {}",
                Style::new().bold().apply_to("cmd:"),
                spec.bin,
                spec.post_command.join(" ")
            );
        }
    }

    Ok(())
}
