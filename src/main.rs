#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

mod application;
mod configuration;
mod domain;
mod infrastructure;

use std::env;
use std::process;
use std::sync::Arc;

use anyhow::Error;
use domain::models::Action;
use domain::models::BackendBox;
use domain::models::Event;
use domain::models::Language;
use domain::services::clipboard::ClipboardService;
use infrastructure::backends::huggingface::HuggingFace;
use infrastructure::speech::SpeechManager;
use owo_colors::OwoColorize;
use owo_colors::Stream;
use tokio::sync::mpsc;
use tokio::task;

use crate::application::cli;
use crate::application::ui;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::services::actions::ActionsService;
use crate::domain::services::AppState;
use crate::domain::services::Downloads;
use crate::domain::services::PreferencesStore;

fn handle_error(err: Error) {
    let message = format!(
        "Oh no! Codemind has failed with the following app version and error.\n\nVersion: {}\nCommit: {}\nError: {}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE"),
        err
    );
    eprintln!(
        "{}",
        message.if_supports_color(Stream::Stderr, |text| return text.red())
    );

    let backtrace = err.backtrace();
    if backtrace.to_string() == "disabled backtrace" {
        let args = env::args().collect::<Vec<String>>().join(" ");
        eprintln!("\nRunning the following can help explain further what the issue is:");
        eprintln!("\nRUST_BACKTRACE=1 {args}");
        eprintln!("\nA debug log can also be written with RUST_LOG=codemind, see `codemind debug log-path`.");
    } else {
        eprintln!("\n{}", backtrace);
    }

    process::exit(1);
}

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        ui::destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let file_appender = tracing_appender::rolling::never(Config::log_dir(), "debug.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    if env::var("RUST_LOG")
        .unwrap_or_else(|_| return "".to_string())
        .contains("codemind")
    {
        tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(writer)
            .init();
    }

    match cli::parse().await {
        Ok(true) => {}
        Ok(false) => {
            process::exit(0);
        }
        Err(err) => {
            handle_error(err);
            return;
        }
    }

    let preferences = PreferencesStore::default();
    let theme = preferences.load_or_default().await.theme;
    let language = Language::parse(&Config::get(ConfigKey::Language)).unwrap_or_default();
    let mut app_state = AppState::new(language, &Config::get(ConfigKey::Model), theme);

    let backend: BackendBox = Box::<HuggingFace>::default();
    let clipboard = ClipboardService::start();
    let speech = SpeechManager::probe(&Config::get(ConfigKey::SpeechCommand));
    tracing::info!(
        clipboard = clipboard.is_available(),
        speech = speech.is_available(),
        "Starting console"
    );

    let actions = ActionsService {
        backend: Arc::new(backend),
        clipboard,
        downloads: Downloads::default(),
        preferences,
        speech: Arc::new(speech),
    };

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let mut background_futures = task::JoinSet::new();
    background_futures.spawn(async move {
        return actions.start(event_tx, &mut action_rx).await;
    });

    let ui_future = ui::start(&mut app_state, action_tx, event_rx);

    let res = tokio::select!(
        res = background_futures.join_next() => match res {
            Some(Ok(res)) => res,
            Some(Err(err)) => Err(err.into()),
            None => Ok(()),
        },
        res = ui_future => res,
    );

    if let Err(err) = res {
        ui::destruct_terminal_for_panic();
        handle_error(err);
    }

    process::exit(0);
}
