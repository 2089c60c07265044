//! 펌프 카탈로그 저장소. 항상 통째로 교체하며, 평가 쪽에는 읽기 전용 스냅샷을 넘긴다.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use super::normalize::normalize_catalog;
use super::record::PumpRecord;

/// 카탈로그 적용/가져오기/내보내기 오류.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON 구문 오류: {0}")]
    Json(#[from] serde_json::Error),
    #[error("카탈로그 JSON은 펌프 배열이어야 합니다.")]
    NotAnArray,
}

/// 카탈로그 교체 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogLoad {
    /// 입력 배열의 항목 수
    pub received: usize,
    /// 정규화 후 남은 펌프 수
    pub accepted: usize,
}

impl CatalogLoad {
    pub fn dropped(&self) -> usize {
        self.received - self.accepted
    }

    /// 유효한 펌프가 하나도 없으면 사용자에게 알려야 한다.
    pub fn is_empty(&self) -> bool {
        self.accepted == 0
    }
}

/// 단일 작성자 카탈로그 저장소.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    pumps: Arc<[PumpRecord]>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(sample_catalog())
    }
}

impl CatalogStore {
    pub fn new(pumps: Vec<PumpRecord>) -> Self {
        Self {
            pumps: pumps.into(),
        }
    }

    /// 현재 카탈로그의 읽기 전용 스냅샷.
    pub fn snapshot(&self) -> Arc<[PumpRecord]> {
        Arc::clone(&self.pumps)
    }

    pub fn pumps(&self) -> &[PumpRecord] {
        &self.pumps
    }

    pub fn len(&self) -> usize {
        self.pumps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pumps.is_empty()
    }

    /// JSON 텍스트로 카탈로그를 교체한다. 실패하면 기존 카탈로그를 그대로 둔다.
    pub fn replace_from_json(&mut self, text: &str) -> Result<CatalogLoad, CatalogError> {
        let raw: Value = serde_json::from_str(text)?;
        self.replace_from_value(&raw)
    }

    /// 이미 파싱된 JSON 값으로 카탈로그를 교체한다.
    pub fn replace_from_value(&mut self, raw: &Value) -> Result<CatalogLoad, CatalogError> {
        let items = raw.as_array().ok_or(CatalogError::NotAnArray)?;
        let pumps = normalize_catalog(raw);
        let load = CatalogLoad {
            received: items.len(),
            accepted: pumps.len(),
        };
        self.pumps = pumps.into();
        if load.is_empty() {
            warn!(received = load.received, "catalog replaced but no valid pump found");
        } else {
            info!(
                accepted = load.accepted,
                dropped = load.dropped(),
                "catalog replaced"
            );
        }
        Ok(load)
    }

    /// JSON 파일에서 카탈로그를 가져온다.
    pub fn import_file(&mut self, path: impl AsRef<Path>) -> Result<CatalogLoad, CatalogError> {
        let path = path.as_ref();
        info!("importing catalog from {:?}", path);
        let content = fs::read_to_string(path)?;
        self.replace_from_json(&content)
    }

    /// 내장 예제 카탈로그로 되돌린다.
    pub fn reset(&mut self) {
        self.pumps = sample_catalog().into();
        info!(pumps = self.pumps.len(), "catalog reset to built-in sample");
    }

    /// 정규 형태의 보기 좋은 JSON으로 내보낸다.
    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&*self.pumps)?)
    }

    /// 정규 형태로 파일에 저장한다.
    pub fn export_file(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let path = path.as_ref();
        fs::write(path, self.to_json_pretty()?)?;
        info!(pumps = self.pumps.len(), "catalog exported to {:?}", path);
        Ok(())
    }
}

/// 내장 예제 카탈로그.
pub fn sample_catalog() -> Vec<PumpRecord> {
    vec![
        PumpRecord::rated("Solar DC 200W", "Solar DC", "24V", Some(200.0), 1000.0, 30.0),
        PumpRecord::rated("Solar DC 300W", "Solar DC", "24V", Some(300.0), 1500.0, 35.0),
        PumpRecord::rated("Solar DC 500W", "Solar DC", "48V", Some(500.0), 2500.0, 45.0),
        PumpRecord::rated("AC 1/2CV", "AC", "220V", Some(370.0), 3000.0, 28.0),
        PumpRecord::rated("AC 1CV", "AC", "220V", Some(750.0), 4500.0, 40.0),
    ]
}
