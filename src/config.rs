use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::selection::ScoreWeights;
use crate::sizing::{ConsumptionRates, SizingInput, SizingLimits, SizingParams};

/// 기본 설정 파일 이름.
pub const CONFIG_FILE: &str = "config.toml";

/// 추천 표에 보여줄 기본 후보 수.
pub const DEFAULT_TOP_N: usize = 5;

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(ko/en/pt-br) 또는 auto
    pub language: String,
    /// 시작 시 불러올 카탈로그 JSON 경로. 없으면 내장 예제 카탈로그.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<String>,
    /// 추천 표 후보 수
    pub top_n: usize,
    /// 마지막으로 사용한 사이징 입력
    pub defaults: SizingInput,
    pub consumption: ConsumptionRates,
    pub limits: SizingLimits,
    pub weights: ScoreWeights,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            catalog_path: None,
            top_n: DEFAULT_TOP_N,
            defaults: SizingInput::default(),
            consumption: ConsumptionRates::default(),
            limits: SizingLimits::default(),
            weights: ScoreWeights::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("[{section}] 범위가 잘못되었습니다: min = {min}, max = {max}")]
    InvalidBounds {
        section: &'static str,
        min: f64,
        max: f64,
    },
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 보정 한계값의 min/max가 뒤집혔거나 숫자가 아니면 거부한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let efficiency = self.limits.efficiency;
        if !efficiency.is_valid() {
            return Err(ConfigError::InvalidBounds {
                section: "limits.efficiency",
                min: efficiency.min,
                max: efficiency.max,
            });
        }
        let margins = self.limits.margins;
        if !margins.is_valid() {
            return Err(ConfigError::InvalidBounds {
                section: "limits.margins",
                min: margins.min,
                max: margins.max,
            });
        }
        Ok(())
    }

    /// 계산 모듈에 넘길 설정 묶음.
    pub fn params(&self) -> SizingParams {
        SizingParams {
            rates: self.consumption,
            limits: self.limits,
            weights: self.weights,
        }
    }

    pub fn top_n(&self) -> usize {
        self.top_n.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let cfg = load_or_default(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn round_trip_through_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut cfg = Config::default();
        cfg.language = "en".into();
        cfg.defaults.demand.people = 10.0;
        cfg.defaults.voltage_filter = "24".into();
        cfg.weights.price = 0.01;
        cfg.save(&path).unwrap();

        let loaded = load_or_default(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "top_n = 8\n[limits.efficiency]\nmax = 0.95\n").unwrap();
        let cfg = load_or_default(&path).unwrap();
        assert_eq!(cfg.top_n, 8);
        assert_eq!(cfg.limits.efficiency.max, 0.95);
        assert_eq!(cfg.limits.efficiency.min, 0.1);
        assert_eq!(cfg.consumption.people, 84.0);
    }

    #[test]
    fn clamped_sizing_input_persists_as_defaults() {
        use crate::sizing::compute_sizing;

        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut cfg = Config::default();
        let mut input = cfg.defaults.clone();
        input.margins.head = 0.2;
        input.pumping.power_enabled = false;
        input.type_filter = "AC".into();
        let result = compute_sizing(&mut input, &[], &cfg.params());
        cfg.defaults = result.input;
        cfg.save(&path).unwrap();

        let loaded = load_or_default(&path).unwrap();
        assert_eq!(loaded.defaults.margins.head, 1.0);
        assert!(!loaded.defaults.pumping.power_enabled);
        assert_eq!(loaded.defaults.type_filter, "AC");
    }

    #[test]
    fn single_field_margin_section_loads() {
        let cfg: Config = toml::from_str("[limits.margins]\nmax = 4.0\n").unwrap();
        assert_eq!(cfg.limits.margins.min, 1.0);
        assert_eq!(cfg.limits.margins.max, 4.0);
    }

    #[test]
    fn inverted_margin_bounds_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[limits.margins]\nmin = 5.0\nmax = 2.0\n").unwrap();
        let err = load_or_default(&path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidBounds {
                section: "limits.margins",
                ..
            }
        ));
    }

    #[test]
    fn nan_efficiency_bound_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[limits.efficiency]\nmin = nan\n").unwrap();
        assert!(load_or_default(&path).is_err());
    }

    #[test]
    fn bad_bounds_parsed_directly_do_not_break_sizing() {
        use crate::pump::sample_catalog;
        use crate::sizing::compute_sizing;

        let cfg: Config = toml::from_str("[limits.margins]\nmin = 5.0\nmax = 2.0\n").unwrap();
        let mut input = SizingInput::default();
        input.demand.people = 10.0;
        input.site.well_depth_m = 20.0;
        input.margins.flow = 0.5;
        let result = compute_sizing(&mut input, &sample_catalog(), &cfg.params());
        assert_eq!(input.margins.flow, 1.0);
        assert!(result.operating_point().is_actionable());
    }
}
