use crate::config::save::save_settings;
use crate::config::{Config, GrammarMode};
use crate::menu::handlers::run_photo_renamer;
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

pub fn show_main_menu(term: &Term, config: &mut Config) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style("=== 照片整理系統 ===").cyan().bold());
    println!("{}", style("按 ESC 離開").dim());

    let options = vec!["依城市與拍攝時間重新命名", "設定", "離開"];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("請選擇功能")
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_photo_renamer(term, config)?;
            Ok(true)
        }
        Some(1) => {
            show_settings_menu(term, config)?;
            Ok(true)
        }
        Some(2) | None => Ok(false), // ESC pressed - exit
        _ => unreachable!(),
    }
}

/// 設定選單
fn show_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    loop {
        term.clear_screen()?;

        println!("{}", style("=== 設定 ===").cyan().bold());
        println!("{}", style("按 ESC 返回").dim());

        let options = vec!["格式驗證模式", "照片數量上限", "返回"];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("請選擇設定項目")
            .items(&options)
            .default(0)
            .interact_on_opt(term)?;

        match selection {
            Some(0) => show_grammar_mode_menu(term, config)?,
            Some(1) => show_max_photos_menu(term, config)?,
            Some(2) | None => break, // ESC or back
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// 格式驗證模式選單
fn show_grammar_mode_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style("=== 格式驗證模式 ===").cyan().bold());
    println!(
        "\n{} {}",
        style("目前設定:").dim(),
        config.settings.grammar_mode
    );
    println!();

    let modes = [GrammarMode::Lenient, GrammarMode::Strict];

    let items = vec![
        "寬鬆（分隔字元不限，接受 24 時、60 分秒）",
        "嚴格（日期時間必須真實存在）",
    ];

    let default_index = modes
        .iter()
        .position(|&m| m == config.settings.grammar_mode)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("請選擇模式")
        .items(&items)
        .default(default_index)
        .interact_on_opt(term)?;

    // ESC pressed - return without saving
    let Some(selection) = selection else {
        return Ok(());
    };

    let selected_mode = modes[selection];

    if selected_mode != config.settings.grammar_mode {
        config.settings.grammar_mode = selected_mode;
        save_settings(&config.settings)?;
        println!("\n{} {}", style("已儲存:").green(), selected_mode);
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}

/// 照片數量上限設定
fn show_max_photos_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style("=== 照片數量上限 ===").cyan().bold());

    let max_photos: usize = Input::new()
        .with_prompt("請輸入照片數量上限")
        .default(config.settings.max_photos)
        .validate_with(|value: &usize| -> Result<(), &str> {
            if *value == 0 {
                Err("必須大於 0")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    if max_photos != config.settings.max_photos {
        config.settings.max_photos = max_photos;
        save_settings(&config.settings)?;
        println!("\n{} {}", style("已儲存:").green(), max_photos);
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}
