//! Wordle Game - CLI
//!
//! Terminal Wordle with a TUI and a line-based mode, plus one-shot word
//! checking and offline scoring.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{check_word, run_simple, score_guess},
    config::{
        DEFAULT_ENTRIES_URL, DEFAULT_MAX_GUESSES, DEFAULT_VALIDATE_URL,
        DEFAULT_WORD_OF_THE_DAY_URL, DictionarySource, GameConfig, LookupApi,
    },
    dictionary::{self, Dictionary},
    output::{print_check_result, print_score_result},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Terminal Wordle backed by a live dictionary",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play from the built-in word lists instead of the remote services
    #[arg(long, global = true, env = "WORDLE_OFFLINE")]
    offline: bool,

    /// Offline only: pick a random answer instead of today's
    #[arg(long, global = true, env = "WORDLE_RANDOM")]
    random: bool,

    /// Offline only: word list file replacing the built-in lists
    #[arg(short = 'w', long, global = true, env = "WORDLE_WORD_LIST")]
    word_list: Option<PathBuf>,

    /// Number of guesses (rows)
    #[arg(short, long, global = true, env = "WORDLE_GUESSES", default_value_t = DEFAULT_MAX_GUESSES)]
    guesses: usize,

    /// Which remote API decides whether a guess is a word
    #[arg(long, global = true, env = "WORDLE_LOOKUP", value_enum, default_value_t = Lookup::Entries)]
    lookup: Lookup,

    /// Word-of-the-day endpoint
    #[arg(long, global = true, env = "WORDLE_WORD_URL", default_value = DEFAULT_WORD_OF_THE_DAY_URL)]
    word_url: String,

    /// Lookup endpoint (defaults to the selected API's public endpoint)
    #[arg(long, global = true, env = "WORDLE_LOOKUP_URL")]
    lookup_url: Option<String>,

    /// Timeout for each dictionary request, in seconds
    #[arg(long, global = true, env = "WORDLE_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Delay before Backspace on an empty cell steps back, in milliseconds
    #[arg(long, global = true, env = "WORDLE_DEBOUNCE_MS", default_value_t = 40)]
    debounce_ms: u64,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Lookup {
    /// GET {url}/{word}; 404 means "not a word"
    Entries,
    /// POST {"word": ...}; answers {"valid": bool}
    Validate,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Check whether a word is accepted as a guess
    Check {
        /// The word to look up
        word: String,
    },

    /// Score a guess against an answer without any network access
    Score {
        /// The guessed word
        guess: String,

        /// The word it is scored against
        answer: String,
    },
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let source = if self.offline {
            DictionarySource::Offline {
                random: self.random,
                word_list: self.word_list.clone(),
            }
        } else {
            let lookup = match self.lookup {
                Lookup::Entries => LookupApi::Entries {
                    base_url: self
                        .lookup_url
                        .clone()
                        .unwrap_or_else(|| DEFAULT_ENTRIES_URL.to_string()),
                },
                Lookup::Validate => LookupApi::ValidateWord {
                    url: self
                        .lookup_url
                        .clone()
                        .unwrap_or_else(|| DEFAULT_VALIDATE_URL.to_string()),
                },
            };
            DictionarySource::Remote {
                word_of_the_day_url: self.word_url.clone(),
                lookup,
            }
        };

        let config = GameConfig {
            max_guesses: self.guesses,
            delete_debounce: Duration::from_millis(self.debounce_ms),
            request_timeout: Duration::from_secs(self.timeout_secs),
            source,
        };
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }
}

/// Install the global subscriber; the TUI owns the terminal so it logs to a file
fn init_tracing(to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if to_file {
        let log_file =
            std::fs::File::create("wordle_game.log").context("failed to create log file")?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(log_file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_tracing(matches!(command, Commands::Play))?;

    match command {
        Commands::Score { guess, answer } => {
            let result = score_guess(&guess, &answer).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Play => {
            let config = cli.game_config()?;
            let dictionary = dictionary::from_config(&config)?;
            run_play_command(dictionary, &config).await
        }
        Commands::Simple => {
            let config = cli.game_config()?;
            let dictionary = dictionary::from_config(&config)?;
            run_simple(dictionary, &config)
                .await
                .map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check { word } => {
            let config = cli.game_config()?;
            let dictionary = dictionary::from_config(&config)?;
            let result = check_word(dictionary.as_ref(), &word)
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
    }
}

async fn run_play_command(dictionary: Arc<dyn Dictionary>, config: &GameConfig) -> Result<()> {
    use wordle_game::interactive::run_tui;

    info!(source = dictionary.name(), "Starting TUI");
    run_tui(dictionary, config).await
}
