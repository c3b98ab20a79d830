#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

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
use owo_colors::Stream;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::BackendBox;
use crate::domain::models::GenerationPrompt;
use crate::domain::models::Language;
use crate::domain::models::MODELS;
use crate::domain::models::VALIDATION_MESSAGE;
use crate::domain::services::actions::help_text;
use crate::domain::services::GenerationService;
use crate::infrastructure::backends::huggingface::HuggingFace;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

/// Runs a single generation without the terminal UI. Validation and fallback
/// behave exactly as they do in the console.
pub async fn generate_once(
    backend: &BackendBox,
    prompt_text: &str,
    language: Language,
    model: &str,
) -> Result<String> {
    let input = prompt_text.trim();
    if input.is_empty() {
        bail!(VALIDATION_MESSAGE);
    }

    let prompt = GenerationPrompt::new(input, language, model);

    return Ok(GenerationService::resolve(backend, &prompt).await);
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
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

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for Codemind")
        .hide(true)
        .subcommand(Command::new("languages").about("List all supported code languages."))
        .subcommand(Command::new("models").about("List all selectable models."))
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running Codemind with environment variable RUST_LOG=codemind")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn subcommand_generate() -> Command {
    return Command::new("generate")
        .about("Generate code for a single prompt and print it to stdout.")
        .arg(
            Arg::new("prompt")
                .help("Describe the code you want.")
                .required(true)
                .num_args(1),
        )
        .arg(arg_language())
        .arg(arg_model());
}

fn arg_language() -> Arg {
    return Arg::new(ConfigKey::Language.to_string())
        .short('l')
        .long(ConfigKey::Language.to_string())
        .env("CODEMIND_LANGUAGE")
        .num_args(1)
        .help(format!(
            "The initial code language. [default: {}]",
            Config::default(ConfigKey::Language)
        ))
        .value_parser(PossibleValuesParser::new(Language::VARIANTS));
}

fn arg_model() -> Arg {
    return Arg::new(ConfigKey::Model.to_string())
        .short('m')
        .long(ConfigKey::Model.to_string())
        .env("CODEMIND_MODEL")
        .num_args(1)
        .help(format!(
            "The initial model. [default: {}]",
            Config::default(ConfigKey::Model)
        ))
        .value_parser(PossibleValuesParser::new(MODELS));
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("HOTKEYS:") {
                return format!("CONSOLE {line}")
                    .if_supports_color(Stream::Stdout, |text| return text.bold())
                    .to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}\nCommit: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    );

    return Command::new("codemind")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(subcommand_generate())
        .arg(arg_language())
        .arg(arg_model())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("CODEMIND_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::ApiKey.to_string())
                .long(ConfigKey::ApiKey.to_string())
                .env("HUGGINGFACE_API_KEY")
                .hide_env_values(true)
                .num_args(1)
                .help("Hugging Face API token sent as a bearer credential with every request.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::InferenceURL.to_string())
                .long(ConfigKey::InferenceURL.to_string())
                .env("CODEMIND_INFERENCE_URL")
                .num_args(1)
                .help(format!("Base URL of the Hugging Face inference API. Can be swapped to a compatible proxy. [default: {}]", Config::default(ConfigKey::InferenceURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::DownloadDir.to_string())
                .long(ConfigKey::DownloadDir.to_string())
                .env("CODEMIND_DOWNLOAD_DIR")
                .num_args(1)
                .help(format!("Directory downloads are saved to. [default: {}]", Config::default(ConfigKey::DownloadDir)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::PreferencesFile.to_string())
                .long(ConfigKey::PreferencesFile.to_string())
                .env("CODEMIND_PREFERENCES_FILE")
                .num_args(1)
                .help(format!("File the light/dark theme choice is remembered in. [default: {}]", Config::default(ConfigKey::PreferencesFile)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::SpeechCommand.to_string())
                .long(ConfigKey::SpeechCommand.to_string())
                .env("CODEMIND_SPEECH_COMMAND")
                .num_args(1)
                .help("Command run to capture one spoken prompt. Its standard output is used as the transcript.")
                .global(true),
        );
}

async fn run_generate(matches: &ArgMatches, generate_matches: &ArgMatches) -> Result<()> {
    Config::load(build(), vec![matches, generate_matches]).await?;

    let prompt_text = generate_matches
        .get_one::<String>("prompt")
        .map(|e| return e.to_string())
        .unwrap_or_default();

    let language = Language::parse(&Config::get(ConfigKey::Language)).unwrap_or_default();
    let backend: BackendBox = Box::<HuggingFace>::default();
    let output = generate_once(
        &backend,
        &prompt_text,
        language,
        &Config::get(ConfigKey::Model),
    )
    .await?;
    println!("{output}");

    return Ok(());
}

/// Parses arguments and runs any one-shot subcommand. Returns true when the
/// console should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("languages", _)) => {
                    println!("{}", Language::VARIANTS.join("\n"));
                }
                Some(("models", _)) => {
                    println!("{}", MODELS.join("\n"));
                }
                Some(("log-path", _)) => {
                    let log_path = Config::log_dir().join("debug.log");
                    println!("{}", log_path.to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    println!("{}", ConfigKey::VARIANTS.join("\n"));
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(false);
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
        Some(("generate", generate_matches)) => {
            run_generate(&matches, generate_matches).await?;
            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
