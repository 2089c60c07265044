use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::pump::{CatalogStore, PLACEHOLDER};
use crate::report;
use crate::sizing::{compute_sizing, SizingInput};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Sizing,
    Catalog,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_SIZING));
    println!("{}", tr.t(keys::MAIN_MENU_CATALOG));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Sizing),
            "2" => return Ok(MenuChoice::Catalog),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 사이징 메뉴를 처리한다. 보정된 입력은 다음 실행의 기본값으로 남긴다.
pub fn handle_sizing(
    tr: &Translator,
    cfg: &mut Config,
    store: &CatalogStore,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SIZING_HEADING));
    println!("{}", tr.t(keys::KEEP_CURRENT_HINT));
    let mut input = prompt_sizing_input(tr, &cfg.defaults)?;

    let catalog = store.snapshot();
    let result = compute_sizing(&mut input, &catalog, &cfg.params());
    println!();
    print!("{}", report::summary(&result, tr));
    println!();
    print!("{}", report::candidate_table(&result.ranking, cfg.top_n(), tr));

    cfg.defaults = result.input;
    Ok(())
}

fn prompt_sizing_input(tr: &Translator, current: &SizingInput) -> Result<SizingInput, AppError> {
    let mut input = current.clone();

    println!("{}", tr.t(keys::SIZING_DEMAND_SECTION));
    input.demand.people = read_f64_or(tr, keys::PROMPT_PEOPLE, input.demand.people)?;
    input.demand.cattle = read_f64_or(tr, keys::PROMPT_CATTLE, input.demand.cattle)?;
    input.demand.pigs = read_f64_or(tr, keys::PROMPT_PIGS, input.demand.pigs)?;
    input.demand.gardens = read_f64_or(tr, keys::PROMPT_GARDENS, input.demand.gardens)?;
    input.demand.pasture = read_f64_or(tr, keys::PROMPT_PASTURE, input.demand.pasture)?;

    println!("{}", tr.t(keys::SIZING_SITE_SECTION));
    input.site.well_depth_m = read_f64_or(tr, keys::PROMPT_WELL_DEPTH, input.site.well_depth_m)?;
    input.site.tank_height_m =
        read_f64_or(tr, keys::PROMPT_TANK_HEIGHT, input.site.tank_height_m)?;
    input.site.pipe_distance_m =
        read_f64_or(tr, keys::PROMPT_PIPE_DISTANCE, input.site.pipe_distance_m)?;

    println!("{}", tr.t(keys::SIZING_PUMPING_SECTION));
    input.pumping.hours_per_day =
        read_f64_or(tr, keys::PROMPT_PUMPING_HOURS, input.pumping.hours_per_day)?;
    input.pumping.power_enabled =
        read_bool_or(tr, keys::PROMPT_POWER_ENABLED, input.pumping.power_enabled)?;
    if input.pumping.power_enabled {
        input.pumping.efficiency =
            read_f64_or(tr, keys::PROMPT_EFFICIENCY, input.pumping.efficiency)?;
    }

    println!("{}", tr.t(keys::SIZING_SELECTION_SECTION));
    input.margins.flow = read_f64_or(tr, keys::PROMPT_FLOW_MARGIN, input.margins.flow)?;
    input.margins.head = read_f64_or(tr, keys::PROMPT_HEAD_MARGIN, input.margins.head)?;
    input.type_filter = read_text_or(tr, keys::PROMPT_TYPE_FILTER, &input.type_filter)?;
    input.voltage_filter = read_text_or(tr, keys::PROMPT_VOLTAGE_FILTER, &input.voltage_filter)?;
    Ok(input)
}

/// 카탈로그 메뉴를 처리한다.
pub fn handle_catalog(
    tr: &Translator,
    cfg: &mut Config,
    store: &mut CatalogStore,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CATALOG_HEADING));
    println!("{}", tr.t(keys::CATALOG_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            if store.is_empty() {
                println!("{}", tr.t(keys::CATALOG_IS_EMPTY));
            } else {
                print!("{}", report::catalog_table(store.pumps(), tr));
            }
        }
        "2" => {
            let path = read_line(tr.t(keys::PROMPT_FILE_PATH))?;
            let path = path.trim();
            match store.import_file(path) {
                Ok(load) => {
                    println!(
                        "{}",
                        tr.tf(
                            keys::CATALOG_IMPORTED,
                            &[("accepted", &load.accepted), ("dropped", &load.dropped())],
                        )
                    );
                    if load.is_empty() {
                        println!("{}", tr.t(keys::CATALOG_EMPTY_WARNING));
                    }
                    cfg.catalog_path = Some(path.to_string());
                }
                Err(e) => {
                    println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
                    println!("{}", tr.t(keys::CATALOG_UNCHANGED));
                }
            }
        }
        "3" => {
            let path = read_line(tr.t(keys::PROMPT_FILE_PATH))?;
            println!("{}", export_catalog(store, path.trim(), tr));
        }
        "4" => {
            store.reset();
            cfg.catalog_path = None;
            println!("{}", tr.t(keys::CATALOG_RESET));
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION)),
    }
    Ok(())
}

/// 내보내기 결과 메시지. 실패해도 세션은 이어진다.
fn export_catalog(store: &CatalogStore, path: &str, tr: &Translator) -> String {
    match store.export_file(path) {
        Ok(()) => tr.tf(keys::CATALOG_EXPORTED, &[("path", &path)]),
        Err(e) => format!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {} ({})",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language,
        tr.language_code()
    );
    println!("{}", tr.t(keys::KEEP_CURRENT_HINT));
    let lang = read_text_or(tr, keys::SETTINGS_PROMPT_LANGUAGE, &cfg.language)?;
    if !lang.is_empty() {
        cfg.language = lang;
    }
    let top_n = read_f64_or(tr, keys::SETTINGS_PROMPT_TOP_N, cfg.top_n as f64)?;
    if top_n.is_finite() && top_n >= 1.0 {
        cfg.top_n = top_n as usize;
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn labeled(tr: &Translator, key: &str, current: impl std::fmt::Display) -> String {
    format!("{} [{current}]: ", tr.t(key))
}

/// 빈 입력이면 현재 값을 유지한다.
fn read_f64_or(tr: &Translator, key: &str, current: f64) -> Result<f64, AppError> {
    let prompt = labeled(tr, key, current);
    loop {
        let s = read_line(&prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_bool_or(tr: &Translator, key: &str, current: bool) -> Result<bool, AppError> {
    let shown = if current { "y" } else { "n" };
    let prompt = labeled(tr, key, shown);
    loop {
        let s = read_line(&prompt)?;
        match s.trim().to_lowercase().as_str() {
            "" => return Ok(current),
            "y" | "yes" | "s" | "sim" | "1" => return Ok(true),
            "n" | "no" | "nao" | "não" | "0" => return Ok(false),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 빈 입력이면 유지, `-`이면 비운다.
fn read_text_or(tr: &Translator, key: &str, current: &str) -> Result<String, AppError> {
    let shown = if current.is_empty() { PLACEHOLDER } else { current };
    let s = read_line(&labeled(tr, key, shown))?;
    Ok(match s.trim() {
        "" => current.to_string(),
        PLACEHOLDER => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn export_reports_success_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pumps.json");
        let path = path.to_str().unwrap();
        let msg = export_catalog(&CatalogStore::default(), path, &Translator::new("en"));
        assert_eq!(msg, format!("Catalog exported to {path}."));
    }

    #[test]
    fn export_failure_is_a_message_not_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("pumps.json");
        let msg = export_catalog(
            &CatalogStore::default(),
            path.to_str().unwrap(),
            &Translator::new("en"),
        );
        assert!(msg.starts_with("Error: "), "{msg}");
    }
}
