use anyhow::Context;
use clap::Parser;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use romaji_snake::cli::Cli;
use romaji_snake::core::config::GameConfig;
use romaji_snake::core::tick::TickDriver;
use romaji_snake::input::{apply_input, InputResult, InputSource, TerminalInput};
use romaji_snake::snake::types::GameSession;
use romaji_snake::ui::draw_game;
use romaji_snake::utils::logging;
use std::io;
use std::time::Instant;
use tracing::info;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !cli.no_log {
        match logging::init(cli.log_file.as_deref()) {
            Ok(path) => info!(log = %path.display(), "logging started"),
            Err(e) => eprintln!("Logging disabled: {}", e),
        }
    }

    let config = cli.resolve_config().context("invalid configuration")?;
    info!(?config, "configuration resolved");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, config);

    // Cleanup terminal, even if the game loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Ok(score) = &result {
        println!("Final score: {}. Sayonara!", score);
    }
    result.map(|_| ())
}

/// Play until the player quits. Returns the last session's score.
fn run(terminal: &mut Term, config: GameConfig) -> anyhow::Result<u32> {
    let mut rng = rand::thread_rng();
    let mut input = TerminalInput::new(config.controls);
    let mut session = GameSession::new(config, &mut rng);
    let mut driver = TickDriver::new();
    let mut last_update = Instant::now();

    loop {
        terminal.draw(|frame| draw_game(frame, &session, &input))?;

        // Polls briefly, which paces the loop.
        if let Some(event) = input.next_input(&session)? {
            match apply_input(&mut session, &mut driver, event, &mut rng) {
                InputResult::AnswerAccepted => input.field.clear(),
                InputResult::Restarted => {
                    input.field.clear();
                    last_update = Instant::now();
                }
                InputResult::Quit => break,
                InputResult::Continue => {}
            }
        }

        let now = Instant::now();
        driver.update(&mut session, now - last_update, &mut rng);
        last_update = now;
    }

    info!(score = session.score, "player quit");
    Ok(session.score)
}
