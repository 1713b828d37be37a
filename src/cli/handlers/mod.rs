mod config;
pub use config::cmd_config;

use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::resolve_config;
use crate::model::Config;
use crate::ops::aggregate::load_all;
use crate::ops::search::filter_tasks;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let config_path = cli.config.as_deref();

    match cli.command {
        None => crate::tui::run(config_path, &cli.dirs),
        Some(cmd) => match cmd {
            Commands::List(args) => cmd_list(args, config_path, &cli.dirs, json),
            Commands::Config(args) => cmd_config(args, config_path, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Directories from `-d` when given, otherwise from the config
fn effective_dirs(config: &Config, overrides: &[String]) -> Vec<String> {
    if overrides.is_empty() {
        config.taskmanager.directories()
    } else {
        overrides.to_vec()
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_list(
    args: ListArgs,
    config_path: Option<&Path>,
    dir_overrides: &[String],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (config, _) = resolve_config(config_path)?;
    let dirs = effective_dirs(&config, dir_overrides);
    let agg = load_all(&dirs)?;

    for warning in &agg.warnings {
        eprintln!("warning: {}", warning);
    }

    let tasks = match args.query.as_deref() {
        Some(q) => filter_tasks(&agg.tasks, q),
        None => agg.tasks,
    };

    if json {
        let results: Vec<TaskJson> = tasks
            .iter()
            .map(|t| task_to_json(t, &config.display))
            .collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if tasks.is_empty() {
        println!("No tasks found.");
    } else {
        let show_dir = dirs.len() > 1;
        for task in &tasks {
            println!("{}", format_task_line(task, &config.display, show_dir));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_configured_dirs() {
        let config = Config::initial();
        assert_eq!(effective_dirs(&config, &[]), vec!["~/.tasks".to_string()]);
        let overrides = vec!["/a".to_string(), "/b".to_string()];
        assert_eq!(effective_dirs(&config, &overrides), overrides);
    }
}
