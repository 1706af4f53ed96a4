//! Simple interactive CLI mode
//!
//! Line-based game without TUI: each line typed is fed to the session as
//! keystrokes, then submitted.

use crate::config::GameConfig;
use crate::dictionary::Dictionary;
use crate::game::{GuessVerdict, InputEvent, Session, SessionEvent, Signal, SignalSink};
use crate::grid::CellRef;
use crate::output::formatters::verdict_label;
use crate::output::{print_board, print_outcome};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the session cannot start or there's an I/O error
/// reading user input.
pub async fn run_simple(dictionary: Arc<dyn Dictionary>, config: &GameConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let spinner = loading_spinner(dictionary.name())?;
    let (sink, mut signals) = SignalSink::channel();
    let started = Session::start(dictionary, config, sink).await;
    spinner.finish_and_clear();
    let (mut session, mut events) = started.map_err(|e| e.to_string())?;

    let width = session.grid().width();
    let rows = session.grid().row_count();
    println!("Guess the {width}-letter word in {rows} tries.");
    println!("  - {}", "green: right letter, right spot".green());
    println!("  - {}", "yellow: in the word, wrong spot".yellow());
    println!("  - {}", "gray: not in the word".bright_black());
    println!("Commands: 'quit' to exit\n");
    signals_to_console(&mut signals);

    while let Some(row) = session.grid().active_index() {
        print_board(session.grid());

        let input = get_user_input(&format!("Guess {}/{rows}", row + 1))?;
        match input.to_lowercase().as_str() {
            "quit" | "exit" => return Ok(()),
            "" => {}
            text if text.chars().count() > width => {
                println!("Enter at most {width} letters\n");
            }
            text => submit_line(&mut session, &mut events, row, text).await,
        }
        signals_to_console(&mut signals);
    }

    print_board(session.grid());
    if let Some(outcome) = session.outcome() {
        print_outcome(outcome, session.share_text().as_deref());
    }
    Ok(())
}

/// Replace the contents of `row` with `text`, submit, and wait for the verdict
async fn submit_line(
    session: &mut Session,
    events: &mut mpsc::UnboundedReceiver<SessionEvent>,
    row: usize,
    text: &str,
) {
    let width = session.grid().width();
    for cell in (0..width).rev() {
        let filled = session
            .grid()
            .row(row)
            .and_then(|r| r.cell(cell))
            .is_some_and(|c| !c.is_empty());
        if filled {
            session.handle(InputEvent::Delete {
                at: CellRef::new(row, cell),
            });
        }
    }

    session.handle(InputEvent::FocusReclaim);
    for ch in text.chars() {
        if let Some(at) = session.focus() {
            session.handle(InputEvent::Character { at, ch });
        }
    }

    session.handle(InputEvent::Submit { row });
    session.settle(events).await;
}

fn signals_to_console(signals: &mut mpsc::UnboundedReceiver<Signal>) {
    while let Ok(signal) = signals.try_recv() {
        match signal {
            Signal::RowShake { verdict, .. } => println!("✗ {}\n", verdict_label(verdict)),
            Signal::LookupFailed { .. } => {
                println!(
                    "⚠ {}\n",
                    verdict_label(GuessVerdict::RejectedNetworkError)
                );
            }
            Signal::RowLocked { feedback, .. } => println!("   {}", feedback.to_emoji()),
            _ => {}
        }
    }
}

fn loading_spinner(source: &str) -> Result<ProgressBar, String> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .map_err(|e| e.to_string())?,
    );
    pb.set_message(format!("Fetching word of the day from {source}..."));
    pb.enable_steady_tick(Duration::from_millis(80));
    Ok(pb)
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
