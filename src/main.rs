//! cclight binary entry point.
//!
//! With no subcommand the full demo runs end to end: the colorized
//! sample, the external parser's syntax tree, the multiline verification
//! fixtures, and a summary. Subcommands expose each piece on its own.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use cclight::parser::TreeSitterCli;
use cclight::theme::{resolve_theme, Theme};
use cclight::Config;

#[derive(Parser)]
#[command(
    name = "cclight",
    version = cclight::version_string(),
    about = "CCL syntax highlighting demo - colorizes CCL samples and checks tree-sitter parses"
)]
pub struct Cli {
    /// Disable colored output (NO_COLOR is also honored)
    #[arg(long, global = true)]
    no_color: bool,

    /// Override the external parser command, e.g. "tree-sitter parse"
    #[arg(long, global = true, value_name = "CMD")]
    parser_cmd: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print only the colorized sample document
    Highlight,
    /// Highlighted sample plus the external parser's syntax tree
    Demo,
    /// Run the multiline parsing fixtures against the external parser
    Verify {
        /// Emit fixture results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let theme = resolve_theme(cli.no_color, &config.theme);
    let parser = build_parser(&cli, &config)?;

    match cli.command {
        Some(Commands::Highlight) => {
            commands::demo::handle_highlight(&theme);
            Ok(())
        }
        Some(Commands::Demo) => commands::demo::handle(&parser, &theme),
        Some(Commands::Verify { json }) => {
            let all_ok = commands::verify::handle(&parser, &theme, json)?;
            if !all_ok {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Path => commands::config::handle_path(),
        },
        Some(Commands::Completions { shell }) => {
            commands::completions::handle(shell);
            Ok(())
        }
        None => run_full_demo(&parser, &theme),
    }
}

/// Resolve the parser command: flag beats config file beats default.
///
/// The flag value is split on whitespace; quoting is not supported.
fn build_parser(cli: &Cli, config: &Config) -> Result<TreeSitterCli> {
    let words: Vec<String> = match &cli.parser_cmd {
        Some(cmd) => cmd.split_whitespace().map(str::to_string).collect(),
        None => config.parser_cmd.clone(),
    };
    Ok(TreeSitterCli::from_command(&words)?)
}

/// The original script, end to end.
fn run_full_demo(parser: &TreeSitterCli, theme: &Theme) -> Result<()> {
    let banner = "=".repeat(60);
    println!("{}", theme.comment_text(&banner));
    println!("{}", theme.key_text("CCL Syntax Highlighting Demo"));
    println!("{}\n", theme.comment_text(&banner));

    commands::demo::handle(parser, theme)?;
    commands::verify::handle(parser, theme, false)?;

    println!("{}", theme.comment_text("=== Summary ==="));
    println!(
        "{} Multiline values parse correctly",
        theme.value_text("\u{2713}")
    );
    println!(
        "{} Comments are properly recognized",
        theme.value_text("\u{2713}")
    );
    println!(
        "{} Basic key-value pairs work",
        theme.value_text("\u{2713}")
    );
    println!("{} List syntax is supported", theme.value_text("\u{2713}"));

    Ok(())
}
