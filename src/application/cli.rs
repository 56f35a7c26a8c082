use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use owo_colors::OwoColorize;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::text::Span;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Language;
use crate::domain::services::AssistantSession;
use crate::domain::services::PortfolioView;
use crate::infrastructure::backends::gemini::Gemini;

fn hotkeys_text() -> String {
    let text = r#"
HOTKEYS:
- q - Quit while the assistant panel is closed.
- c / Tab - Open the assistant panel. Esc or Tab closes it again.
- 1 / 2 / 3 - Switch the portfolio to English, Chinese, French.
- l - Cycle through the languages. CTRL+L does the same while typing.
- Up/Down, PageUp/PageDown, mouse wheel - Scroll the page.
- Enter - Send the typed question to the assistant.
- CTRL+C - Quit from anywhere.
        "#;

    return text.trim().to_string();
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

fn active_language() -> Language {
    return Language::parse(&Config::get(ConfigKey::Language)).unwrap_or_default();
}

async fn ask(matches: &ArgMatches) -> Result<()> {
    let question = matches.get_one::<String>("question").unwrap();

    let backend = Gemini::default();
    let mut session = AssistantSession::new();

    match session.submit(&backend, question, active_language()).await {
        Some(turn) => println!("{}", turn.text),
        None => bail!("A question is required."),
    }

    return Ok(());
}

// Carries the styling the page renderer leaves in its spans over to stdout.
fn span_style(span: &Span<'_>) -> owo_colors::Style {
    let mut style = owo_colors::Style::new();
    if let Some(Color::Rgb(red, green, blue)) = span.style.fg {
        style = style.truecolor(red, green, blue);
    } else if span.style.fg == Some(Color::DarkGray) {
        style = style.bright_black();
    }
    if span.style.add_modifier.contains(Modifier::BOLD) {
        style = style.bold();
    }
    if span.style.add_modifier.contains(Modifier::ITALIC) {
        style = style.italic();
    }

    return style;
}

fn print_resume() {
    let width = crossterm::terminal::size()
        .map(|(width, _)| return width)
        .unwrap_or(80);

    for line in PortfolioView::lines(active_language(), width) {
        let text = line
            .spans
            .iter()
            .map(|span| {
                return span.content.as_ref().style(span_style(span)).to_string();
            })
            .collect::<Vec<String>>()
            .join("");
        println!("{text}");
    }
}

fn subcommand_chat() -> Command {
    return Command::new("chat").about("Browse the portfolio with the assistant panel. This is the default.");
}

fn subcommand_ask() -> Command {
    return Command::new("ask")
        .about("Ask the assistant a single question and print the reply.")
        .arg(
            Arg::new("question")
                .help("The question to ask.")
                .num_args(1)
                .required(true),
        );
}

fn subcommand_resume() -> Command {
    return Command::new("resume")
        .about("Print the resume for the selected language to stdout.");
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

pub fn build() -> Command {
    let hotkeys = hotkeys_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("HOTKEYS:") {
                return line.underline().bold().to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("folio")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(hotkeys)
        .arg_required_else_help(false)
        .subcommand(subcommand_ask())
        .subcommand(subcommand_chat())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_resume())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("FOLIO_CONFIG_FILE")
                .num_args(1)
                .help(format!(
                    "Path to configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Language.to_string())
                .short('l')
                .long(ConfigKey::Language.to_string())
                .env("FOLIO_LANGUAGE")
                .num_args(1)
                .help(format!(
                    "The language the portfolio and assistant grounding start in. [default: {}]",
                    Config::default(ConfigKey::Language)
                ))
                .value_parser(PossibleValuesParser::new(Language::VARIANTS))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Model.to_string())
                .short('m')
                .long(ConfigKey::Model.to_string())
                .env("FOLIO_MODEL")
                .num_args(1)
                .help(format!(
                    "The Gemini model resource to consume. [default: {}]",
                    Config::default(ConfigKey::Model)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::GeminiURL.to_string())
                .long(ConfigKey::GeminiURL.to_string())
                .env("FOLIO_GEMINI_URL")
                .num_args(1)
                .help(format!(
                    "Gemini API URL. Can be swapped to a compatible proxy. [default: {}]",
                    Config::default(ConfigKey::GeminiURL)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::GeminiToken.to_string())
                .long(ConfigKey::GeminiToken.to_string())
                .env("FOLIO_GEMINI_TOKEN")
                .num_args(1)
                .help("Gemini API key used to authenticate requests.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::HealthCheckTimeout.to_string())
                .long(ConfigKey::HealthCheckTimeout.to_string())
                .env("FOLIO_HEALTH_CHECK_TIMEOUT")
                .num_args(1)
                .help(format!(
                    "Time to wait in milliseconds before timing out the startup health check. [default: {}]",
                    Config::default(ConfigKey::HealthCheckTimeout)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::RequestTimeout.to_string())
                .long(ConfigKey::RequestTimeout.to_string())
                .env("FOLIO_REQUEST_TIMEOUT")
                .num_args(1)
                .help(format!(
                    "Time to wait in milliseconds before giving up on a completion. [default: {}]",
                    Config::default(ConfigKey::RequestTimeout)
                ))
                .global(true),
        );
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("ask", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            ask(subcmd_matches).await?;
            return Ok(false);
        }
        Some(("chat", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("resume", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            print_resume();
            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
