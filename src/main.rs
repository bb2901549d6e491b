use anyhow::{Context, Result};
use console::{Term, style};
use log::{info, warn};
use photo_organizer::component::PhotoOrganizer;
use photo_organizer::config::Config;
use photo_organizer::init;
use photo_organizer::menu::show_main_menu;
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    init::init();
    let mut config = Config::new()?;

    // Piped input: organize stdin once and print the result
    if !io::stdin().is_terminal() {
        return run_batch(&config);
    }

    let term = Term::stdout();

    loop {
        match show_main_menu(&term, &mut config) {
            Ok(true) => {}
            Ok(false) => {
                term.clear_screen()?;
                println!("\n{}", style("再見！").green().bold());
                info!("Program exited normally");
                break;
            }
            Err(e) => {
                warn!("Program error: {e}");
                eprintln!("{} {}", style("錯誤:").red().bold(), e);
                break;
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_batch(config: &Config) -> Result<ExitCode> {
    let mut collection = String::new();
    io::stdin()
        .read_to_string(&mut collection)
        .context("Failed to read photo list from stdin")?;

    let organizer = PhotoOrganizer::new(&config.settings);

    match organizer.organize(&collection) {
        Ok(output) => {
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            warn!("Rejected photo list: {e}");
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
