mod commands;
mod core;

use clap::{Parser, Subcommand};
use crate::core::error::{RelError, print_error};
use std::path::PathBuf;

/// Load, validate, and inspect release-automation configuration
#[derive(Parser)]
#[command(name = "relcheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct RelcheckCli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Validate the release configuration in a directory
  Check {
    /// Directory to search (default: current directory)
    dir: Option<PathBuf>,
    /// Output the report in JSON format (useful for CI/automation)
    #[arg(long)]
    json: bool,
  },

  /// Print the resolved release configuration
  Show {
    /// Directory to search (default: current directory)
    dir: Option<PathBuf>,
    /// Output the configuration in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Scaffold a starter release.toml
  Init {
    /// Upstream repository URL to write into the scaffold
    #[arg(long)]
    repository_url: Option<String>,
    /// Overwrite an existing configuration without prompting
    #[arg(long)]
    force: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = RelcheckCli::parse();

  let result = match cli.command {
    Commands::Check { dir, json } => commands::run_check(dir, json),
    Commands::Show { dir, json } => commands::run_show(dir, json),
    Commands::Init { repository_url, force } => commands::run_init(repository_url, force),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: RelError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
