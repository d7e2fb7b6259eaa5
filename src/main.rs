use color_eyre::{Result, eyre::WrapErr};
use crossterm::{
    event::{KeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::OpenOptions;
use std::io::stdout;

use invaders::app::App;
use invaders::config::ShellConfig;
use invaders::terminal::restore_terminal;

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = ShellConfig::from_env()?;
    init_logging(&config)?;
    log::info!(
        "Starting invaders (tick period {:?}, log file {})",
        config.tick_period,
        config.log_file.display()
    );

    let supports_keyboard_enhancement = matches!(
        crossterm::terminal::supports_keyboard_enhancement(),
        Ok(true)
    );
    log::debug!("Keyboard enhancement supported: {supports_keyboard_enhancement}");

    // Setup terminal manually for full control
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Enable keyboard enhancement AFTER entering alternate screen
    if supports_keyboard_enhancement {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = App::new(&config).run(&mut terminal);

    // Cleanup
    restore_terminal(terminal.backend_mut(), supports_keyboard_enhancement);

    if let Err(err) = &result {
        log::error!("Exiting with error: {err:?}");
    }
    result
}

/// Routes `log` output to the configured file; stdout belongs to the TUI
fn init_logging(config: &ShellConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.log_file)
        .wrap_err_with(|| format!("failed to open log file {}", config.log_file.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .wrap_err("failed to initialise logger")?;
    Ok(())
}
