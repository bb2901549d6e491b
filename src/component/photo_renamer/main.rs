//! 照片重新命名主模組
//!
//! 互動式輸入照片資訊，預覽並輸出重新命名結果

use super::organizer::{PhotoOrganizer, RenamePlan};
use crate::config::Config;
use anyhow::Result;
use console::style;
use dialoguer::Input;
use log::info;

/// 照片重新命名器
pub struct PhotoRenamer {
    config: Config,
    organizer: PhotoOrganizer,
}

impl PhotoRenamer {
    pub fn new(config: Config) -> Self {
        let organizer = PhotoOrganizer::new(&config.settings);
        Self { config, organizer }
    }

    pub fn run(&self) -> Result<()> {
        println!(
            "{}",
            style("=== 照片依城市與拍攝時間重新命名 ===").cyan().bold()
        );
        println!(
            "{}",
            style(format!(
                "格式: name.jpg, City, yyyy-mm-dd hh:mm:ss（{} 模式，最多 {} 張）",
                self.config.settings.grammar_mode, self.config.settings.max_photos
            ))
            .dim()
        );
        println!("{}", style("輸入空白行結束").dim());

        let lines = self.prompt_lines()?;
        let collection = lines.join("\n");

        let plan = self.organizer.plan(&collection)?;
        info!("Organized {} photos", plan.len());

        self.display_preview(&plan);
        self.display_output(&plan);

        Ok(())
    }

    fn prompt_lines(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();

        loop {
            let line: String = Input::new()
                .with_prompt(format!("第 {} 張", lines.len() + 1))
                .allow_empty(true)
                .interact_text()?;

            if line.is_empty() {
                break;
            }
            lines.push(line);
        }

        Ok(lines)
    }

    fn display_preview(&self, plan: &RenamePlan) {
        println!();
        println!("{}", style("預覽重新命名結果（依城市與拍攝時間）：").cyan());
        println!();

        for (line, photo) in plan.pairs() {
            println!(
                "  {} ({}):",
                style(format!("[{}]", photo.original_index + 1)).dim(),
                style(photo.taken_at).cyan()
            );
            println!("    {} {}", style("舊:").dim(), line);
            println!("    {} {}", style("新:").dim(), photo.new_name);
            println!();
        }
    }

    fn display_output(&self, plan: &RenamePlan) {
        println!("{}", style("=== 重新命名結果 ===").cyan().bold());
        println!("{}", style(plan.to_output()).green());
    }
}
