//! 펌프 카탈로그 관련 모듈을 모아둔다.
//! 레코드 정의, 필드명 정규화, 성능곡선 평가, 카탈로그 저장소로 구성한다.

pub mod catalog;
pub mod curve;
pub mod normalize;
pub mod record;

pub use catalog::{sample_catalog, CatalogError, CatalogLoad, CatalogStore};
pub use curve::{evaluate, head_at, CurveMode, HeadEvaluation};
pub use normalize::{normalize, normalize_catalog};
pub use record::{CurvePoint, PumpRecord, PLACEHOLDER};
