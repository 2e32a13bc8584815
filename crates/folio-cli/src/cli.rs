use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

pub(crate) fn command() -> Command {
    Command::new("folio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Portfolio site: projects filtering, GitHub stats, navigation and theme")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .default_value("folio.toml")
                .value_parser(value_parser!(PathBuf))
                .help("Path to the site configuration file"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand(
            Command::new("projects")
                .about("Filter the project list and show the year chart")
                .arg(
                    Arg::new("root")
                        .long("root")
                        .default_value(".")
                        .value_parser(value_parser!(PathBuf))
                        .help("Directory that relative sources are read from"),
                )
                .arg(
                    Arg::new("source")
                        .long("source")
                        .help("projects.json path or URL (defaults to the configured source)"),
                )
                .arg(
                    Arg::new("query")
                        .long("query")
                        .short('q')
                        .help("Search text"),
                )
                .arg(
                    Arg::new("click")
                        .long("click")
                        .action(ArgAction::Append)
                        .help("Click a year slice; repeat to click several times in order"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("text")
                        .value_parser(["text", "json", "html"])
                        .help("Output format"),
                ),
        )
        .subcommand(
            Command::new("home")
                .about("List the featured projects shown on the home page")
                .arg(
                    Arg::new("root")
                        .long("root")
                        .default_value(".")
                        .value_parser(value_parser!(PathBuf))
                        .help("Directory that relative sources are read from"),
                )
                .arg(
                    Arg::new("source")
                        .long("source")
                        .help("projects.json path or URL (defaults to the configured source)"),
                ),
        )
        .subcommand(
            Command::new("github")
                .about("Fetch and summarize GitHub profile statistics")
                .arg(
                    Arg::new("user")
                        .long("user")
                        .help("GitHub login (defaults to the configured user)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("nav")
                .about("Print navigation links for a page")
                .arg(
                    Arg::new("current")
                        .long("current")
                        .default_value("/")
                        .help("Path of the page being viewed"),
                )
                .arg(
                    Arg::new("home")
                        .long("home")
                        .action(ArgAction::SetTrue)
                        .help("The page is the site root"),
                )
                .arg(
                    Arg::new("html")
                        .long("html")
                        .action(ArgAction::SetTrue)
                        .help("Output the <nav> element"),
                ),
        )
        .subcommand(
            Command::new("theme")
                .about("Read or change the saved color scheme")
                .subcommand_required(true)
                .subcommand(
                    Command::new("get")
                        .about("Print the saved color scheme")
                        .arg(
                            Arg::new("html")
                                .long("html")
                                .action(ArgAction::SetTrue)
                                .help("Output the theme switcher markup"),
                        ),
                )
                .subcommand(
                    Command::new("set")
                        .about("Save a color scheme")
                        .arg(
                            Arg::new("scheme")
                                .required(true)
                                .value_parser(["auto", "light", "dark"])
                                .help("auto, light or dark"),
                        ),
                ),
        )
}
