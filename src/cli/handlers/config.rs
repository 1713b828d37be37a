use std::path::Path;

use crate::cli::commands::ConfigArgs;
use crate::io::config_io::{config_path, resolve_config};

/// Print the effective configuration, or just where it lives
pub fn cmd_config(
    args: ConfigArgs,
    explicit: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.path {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => config_path()?,
        };
        println!("{}", path.display());
        return Ok(());
    }

    let (config, _) = resolve_config(explicit)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", toml::to_string_pretty(&config)?);
    }
    Ok(())
}
