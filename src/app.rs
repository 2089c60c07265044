use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::i18n::{keys, Translator};
use crate::pump::{CatalogError, CatalogStore};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 카탈로그 가져오기/내보내기 오류
    #[error("카탈로그 오류: {0}")]
    Catalog(#[from] CatalogError),
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(
    config: &mut Config,
    config_path: &Path,
    store: &mut CatalogStore,
    tr: &Translator,
) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Sizing => {
                ui_cli::handle_sizing(tr, config, store)?;
                config.save(config_path)?;
            }
            MenuChoice::Catalog => {
                ui_cli::handle_catalog(tr, config, store)?;
                config.save(config_path)?;
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save(config_path)?;
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
