// sortty: step-by-step sorting visualizer for the terminal

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use sortty::config::{Args, DrawConfig};
use sortty::driver::SortDriver;
use sortty::logging;
use sortty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let settings = match args.validate() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    if let Some(path) = &args.log_file {
        logging::init(path)?;
    }
    info!(?settings, "starting");

    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let config = DrawConfig::default();
    let mut driver = SortDriver::new(settings.list, config.padding, rng)?;
    driver.select_algorithm(settings.algorithm)?;
    driver.set_direction(settings.direction)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(driver, config, settings.tick);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(%err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    info!("exiting");
    Ok(())
}
