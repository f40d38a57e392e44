//! Command-line interface.
//!
//! With no subcommand the TUI is launched; the subcommands print the catalog
//! to stdout for scripting.

use crate::catalog::{Catalog, LanguageRecord};
use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io::Write;
use std::path::PathBuf;

/// Browse a small catalog of programming languages, grouped by execution model
#[derive(Parser, Debug)]
#[command(name = "langshelf", version, long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    /// Config file for the TUI instead of ~/.config/langshelf/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Theme for the TUI: dark, light, or nocolor
    #[arg(long, value_name = "THEME")]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print every language, grouped
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print one language by id (e.g. "swift")
    Show {
        id: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
}

impl Commands {
    /// Execute a non-interactive command, writing to `out`
    pub fn execute(&self, catalog: &Catalog, out: &mut impl Write) -> Result<()> {
        match self {
            Commands::List { json } => cmd_list(catalog, *json, out),
            Commands::Show { id, json } => cmd_show(catalog, id, *json, out),
            Commands::Completions { shell } => cmd_completions(*shell, out),
        }
    }
}

fn cmd_list(catalog: &Catalog, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(catalog).context("Failed to serialize catalog")?;
        writeln!(out, "{}", text)?;
        return Ok(());
    }

    for (i, group) in catalog.groups().iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", group.title)?;
        for language in &group.languages {
            writeln!(out, "  {:<12} {}", language.id, language.name)?;
        }
    }
    Ok(())
}

fn cmd_show(catalog: &Catalog, id: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let Some(record) = catalog.record(id) else {
        let known: Vec<&str> = catalog.records().map(|r| r.id).collect();
        bail!("Unknown language id {:?} (known: {})", id, known.join(", "));
    };

    if json {
        let text = serde_json::to_string_pretty(record).context("Failed to serialize language")?;
        writeln!(out, "{}", text)?;
    } else {
        write_record(record, out)?;
    }
    Ok(())
}

fn write_record(record: &LanguageRecord, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", record.name)?;
    writeln!(out, "{}", record.description)?;
    if let Some(artwork) = crate::assets::lookup(record.image) {
        writeln!(out)?;
        for line in artwork.lines() {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

fn cmd_completions(shell: Option<Shell>, out: &mut impl Write) -> Result<()> {
    let Some(shell) = shell.or_else(Shell::from_env) else {
        bail!("Could not automatically detect shell");
    };

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    fn run(command: Commands) -> Result<String> {
        let mut out = Vec::new();
        command.execute(catalog(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::parse_from(["langshelf", "show", "swift", "--json"]);
        assert_eq!(
            cli.command,
            Some(Commands::Show {
                id: "swift".to_string(),
                json: true
            })
        );

        let cli = Cli::parse_from(["langshelf", "--theme", "light"]);
        assert_eq!(cli.theme.as_deref(), Some("light"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_tui_options_are_not_accepted_by_subcommands() {
        assert!(Cli::try_parse_from(["langshelf", "list", "--theme", "light"]).is_err());
        assert!(Cli::try_parse_from(["langshelf", "show", "rust", "--config", "x.toml"]).is_err());
    }

    #[test]
    fn test_list_text() {
        let text = run(Commands::List { json: false }).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Compiled");
        assert!(lines[1].contains("Rust"));
        assert!(lines[3].contains("Swift"));
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Interpreted");
        assert!(lines[8].contains("Ruby"));
    }

    #[test]
    fn test_list_json_round_trips_titles() {
        let text = run(Commands::List { json: true }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let titles: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Compiled", "Interpreted"]);
    }

    #[test]
    fn test_show_swift() {
        let text = run(Commands::Show {
            id: "swift".to_string(),
            json: false,
        })
        .unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Swift"));
        assert_eq!(lines.next(), Some("Compiled"));

        let json = run(Commands::Show {
            id: "swift".to_string(),
            json: true,
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["image"], "swift");
    }

    #[test]
    fn test_show_unknown_id_fails() {
        let err = run(Commands::Show {
            id: "cobol".to_string(),
            json: false,
        })
        .unwrap_err();
        assert!(err.to_string().contains("cobol"));
        assert!(err.to_string().contains("swift"));
    }

    #[test]
    fn test_completions_for_bash() {
        let text = run(Commands::Completions {
            shell: Some(Shell::Bash),
        })
        .unwrap();
        assert!(text.contains("langshelf"));
    }
}
