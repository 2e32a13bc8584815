//! `folio`: drive the portfolio site from the terminal.

mod cli;
mod commands;
mod logging;

use anyhow::Result;
use commands::{OutputFormat, ProjectsArgs};
use folio_site::render::GITHUB_UNAVAILABLE;
use folio_site::SiteConfig;
use std::path::PathBuf;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let matches = cli::command().get_matches();
    logging::init(matches.get_flag("log-json"));

    match run(&matches).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(matches: &clap::ArgMatches) -> Result<ExitCode> {
    let config_path = matches
        .get_one::<PathBuf>("config")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("folio.toml"));
    let config = SiteConfig::load(&config_path)?;
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    match matches.subcommand() {
        Some(("projects", args)) => {
            let root = args
                .get_one::<PathBuf>("root")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("."));
            let source = args
                .get_one::<String>("source")
                .map_or(config.projects_source.as_str(), String::as_str);
            let format = args
                .get_one::<String>("format")
                .map_or(OutputFormat::Text, |f| OutputFormat::parse(f));
            let output = commands::projects(ProjectsArgs {
                root: &root,
                source,
                query: args.get_one::<String>("query").map(String::as_str),
                clicks: args
                    .get_many::<String>("click")
                    .map(|values| values.map(String::as_str).collect())
                    .unwrap_or_default(),
                format,
            })
            .await;
            print!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Some(("home", args)) => {
            let root = args
                .get_one::<PathBuf>("root")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("."));
            let source = args
                .get_one::<String>("source")
                .map_or(config.projects_source.as_str(), String::as_str);
            print!("{}", commands::home(&config, &root, source).await);
            Ok(ExitCode::SUCCESS)
        }
        Some(("github", args)) => {
            let login = args
                .get_one::<String>("user")
                .map_or(config.github_username.as_str(), String::as_str);
            let as_json = args.get_flag("json");
            match commands::github(&config, login, as_json).await {
                Ok(output) => {
                    println!("{output}");
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    tracing::error!(login, error = %err, "GitHub request failed");
                    if as_json {
                        println!("{{\"error\":\"GitHub stats unavailable\"}}");
                    } else {
                        println!("{GITHUB_UNAVAILABLE}");
                    }
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Some(("nav", args)) => {
            let current = args
                .get_one::<String>("current")
                .map_or("/", String::as_str);
            print!(
                "{}",
                commands::nav(&config, current, args.get_flag("home"), args.get_flag("html"))
            );
            Ok(ExitCode::SUCCESS)
        }
        Some(("theme", args)) => {
            let output = match args.subcommand() {
                Some(("set", set)) => {
                    let name = set
                        .get_one::<String>("scheme")
                        .map_or("auto", String::as_str);
                    commands::theme_set(&config, name)?
                }
                Some(("get", get)) => commands::theme_get(&config, get.get_flag("html"))?,
                _ => commands::theme_get(&config, false)?,
            };
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            cli::command().print_help()?;
            Ok(ExitCode::FAILURE)
        }
    }
}
