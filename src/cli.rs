// src/cli.rs
use anyhow::{Context, Result, bail};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf, time::Duration};

use crate::commands;
use crate::core::models::{Action, Config, DEFAULT_TIMEOUT_SECS, RunStatus};
use crate::core::patterns::PatternSet;
use crate::infra::t;
use crate::reporting::console;

/// Finds the value of `--lang <VALUE>` or `--lang=<VALUE>` in raw arguments.
/// The last occurrence wins, as it does for clap.
pub fn requested_language<I>(args: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut lang = None;
    while let Some(arg) = args.next() {
        if arg == "--lang" {
            if let Some(value) = args.next() {
                lang = Some(value);
            }
        } else if let Some(value) = arg.strip_prefix("--lang=") {
            lang = Some(value.to_string());
        }
    }
    lang
}

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
fn pre_parse_language() -> String {
    requested_language(env::args())
        // Fallback to system language detection
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string())
}

/// Adds the arguments shared by `test` and `gen`.
fn fixture_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("cmd")
            .help(t!("arg_cmd").to_string())
            .value_name("CMD")
            .required(true)
            .action(ArgAction::Set),
    )
    .arg(
        Arg::new("path")
            .help(t!("arg_path").to_string())
            .value_name("PATH")
            .required(true)
            .value_parser(clap::value_parser!(PathBuf))
            .action(ArgAction::Set),
    )
    .arg(
        Arg::new("pattern")
            .long("pattern")
            .help(t!("arg_pattern").to_string())
            .value_name("IN:OUT")
            .value_parser(PatternSet::parse_override)
            .action(ArgAction::Set),
    )
    .arg(
        Arg::new("timeout")
            .long("timeout")
            .help(t!("arg_timeout", default = DEFAULT_TIMEOUT_SECS).to_string())
            .value_name("SECONDS")
            .value_parser(clap::value_parser!(u64).range(1..))
            .action(ArgAction::Set),
    )
}

fn build_cli() -> Command {
    Command::new("fixture-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about").to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang").to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(fixture_args(
            Command::new(Action::Test.name()).about(t!("cmd_test_about").to_string()),
        ))
        .subcommand(fixture_args(
            Command::new(Action::Gen.name()).about(t!("cmd_gen_about").to_string()),
        ))
}

/// Builds the immutable run configuration from a subcommand's matches.
fn build_config(matches: &ArgMatches) -> Result<Config> {
    let cmd = matches
        .get_one::<String>("cmd")
        .cloned()
        .context("missing <CMD>")?;
    let path = matches
        .get_one::<PathBuf>("path")
        .cloned()
        .context("missing <PATH>")?;
    let patterns = matches
        .get_one::<PatternSet>("pattern")
        .cloned()
        .unwrap_or_default();
    let timeout = matches
        .get_one::<u64>("timeout")
        .copied()
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(Config::new(
        path,
        cmd,
        patterns,
        Duration::from_secs(timeout),
    ))
}

/// Parses the command line, prints the run banner and dispatches to the
/// selected action.
///
/// # Returns
/// The run status of the action; errors are reserved for problems that
/// abort the whole run, such as an unreadable fixture directory.
pub async fn run() -> Result<RunStatus> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    crate::init_locale(&language);

    let matches = build_cli().get_matches();

    let (action, sub_matches) = match matches.subcommand() {
        Some(("test", sub_matches)) => (Action::Test, sub_matches),
        Some(("gen", sub_matches)) => (Action::Gen, sub_matches),
        // `subcommand_required` makes clap exit before we get here.
        _ => bail!("{}", t!("error.unknown_action")),
    };
    let config = build_config(sub_matches)?;

    console::print_banner(action, &config);

    match action {
        Action::Test => commands::test::execute(&config).await,
        Action::Gen => commands::generate::execute(&config).await,
    }
}
