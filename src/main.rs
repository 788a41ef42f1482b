//! VoiceChef CLI entry point

use std::process::ExitCode;

use clap::Parser;

use voice_chef::cli::{
    app::{load_merged_config, run_assist, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{AssistOptions, Cli, Commands},
    config_cmd::handle_config_command,
    doctor_cmd::handle_doctor_command,
    presenter::Presenter,
};
use voice_chef::domain::config::AppConfig;
use voice_chef::domain::language::Language;
use voice_chef::domain::query::InputMode;
use voice_chef::domain::recording::Duration;
use voice_chef::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Doctor { port }) => {
            let store = XdgConfigStore::new();
            return if handle_doctor_command(port, &store, &presenter).await {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_ERROR)
            };
        }
        None => {}
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        api_key: None, // API key comes from env/file only
        language: cli.language.map(|l| Language::from(l).to_string()),
        mode: cli.mode.map(|m| InputMode::from(m).to_string()),
        speak: if cli.speak {
            Some(true)
        } else if cli.no_speak {
            Some(false)
        } else {
            None
        },
        duration: cli.duration.clone(),
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    // Parse duration
    let duration = match config.duration.as_ref() {
        Some(s) => match s.parse::<Duration>() {
            Ok(d) => d,
            Err(e) => {
                presenter.error(&format!("Invalid duration: {}", e));
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
        None => Duration::default_listen(),
    };
    if duration.exceeds_cap() {
        presenter.error(&format!(
            "Listen window is capped at {}",
            Duration::max_capture()
        ));
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    let options = AssistOptions {
        text: cli.text,
        use_mic: cli.mic,
        duration,
        language: config.language_or_default(),
        mode: config.mode_or_default(),
        speak: config.speak_or_default(),
    };

    run_assist(options).await
}
