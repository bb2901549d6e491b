use crate::component::PhotoRenamer;
use crate::config::Config;
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use log::warn;

pub fn run_photo_renamer(term: &Term, config: &Config) -> Result<()> {
    let renamer = PhotoRenamer::new(config.clone());

    if let Err(e) = renamer.run() {
        warn!("Photo renaming failed: {e}");
        eprintln!("{} {}", style("錯誤:").red().bold(), e);
    }

    pause(term)?;
    Ok(())
}
