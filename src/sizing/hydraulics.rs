use serde::{Deserialize, Serialize};

use super::demand::non_negative;
use crate::units::{convert_length, LengthUnit};

/// 관로 길이에 곱해 마찰손실 수두를 추정하는 기본 비율.
pub const DEFAULT_HEAD_LOSS_FRACTION: f64 = 0.10;

/// 현장 형상 입력.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteGeometry {
    /// 우물 깊이(흡입 수두) [m]
    pub well_depth_m: f64,
    /// 저수조 높이(토출 수두) [m]
    pub tank_height_m: f64,
    /// 관로 길이 [m]
    pub pipe_distance_m: f64,
}

/// AMT 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydraulicsResult {
    /// 실제 적용한 손실 비율
    pub head_loss_fraction: f64,
    pub head_loss_m: f64,
    pub amt_m: f64,
    pub pipe_distance_km: f64,
}

/// 전양정(AMT) = 흡입 깊이 + 토출 높이 + 관로 손실.
///
/// 손실은 유량과 무관하게 관로 길이의 고정 비율로 본다.
pub fn total_head(geometry: &mut SiteGeometry, head_loss_fraction: f64) -> HydraulicsResult {
    geometry.well_depth_m = non_negative(geometry.well_depth_m);
    geometry.tank_height_m = non_negative(geometry.tank_height_m);
    geometry.pipe_distance_m = non_negative(geometry.pipe_distance_m);

    let fraction = non_negative(head_loss_fraction);
    let head_loss = fraction * geometry.pipe_distance_m;
    HydraulicsResult {
        head_loss_fraction: fraction,
        head_loss_m: head_loss,
        amt_m: geometry.well_depth_m + geometry.tank_height_m + head_loss,
        pipe_distance_km: convert_length(
            geometry.pipe_distance_m,
            LengthUnit::Meter,
            LengthUnit::Kilometer,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amt_adds_ten_percent_pipe_loss() {
        let mut geo = SiteGeometry {
            well_depth_m: 20.0,
            tank_height_m: 5.0,
            pipe_distance_m: 100.0,
        };
        let res = total_head(&mut geo, DEFAULT_HEAD_LOSS_FRACTION);
        assert!((res.head_loss_m - 10.0).abs() < 1e-12);
        assert!((res.amt_m - 35.0).abs() < 1e-12);
        assert!((res.pipe_distance_km - 0.1).abs() < 1e-12);
    }

    #[test]
    fn negative_geometry_is_clamped() {
        let mut geo = SiteGeometry {
            well_depth_m: -4.0,
            tank_height_m: 3.0,
            pipe_distance_m: -50.0,
        };
        let res = total_head(&mut geo, DEFAULT_HEAD_LOSS_FRACTION);
        assert_eq!(geo.well_depth_m, 0.0);
        assert_eq!(geo.pipe_distance_m, 0.0);
        assert!((res.amt_m - 3.0).abs() < 1e-12);
    }
}
