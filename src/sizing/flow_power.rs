use serde::{Deserialize, Serialize};

use super::SizingWarning;
use crate::units::{convert_flow, FlowUnit};

/// 물 밀도 [kg/m³]
pub const RHO_WATER: f64 = 1000.0;
/// 중력가속도 [m/s²]
pub const G: f64 = 9.81;

pub const DEFAULT_PUMPING_HOURS: f64 = 5.5;
pub const DEFAULT_MIN_PUMPING_HOURS: f64 = 0.5;
pub const DEFAULT_EFFICIENCY: f64 = 0.6;

/// 펌프 효율 허용 범위.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EfficiencyBounds {
    pub min: f64,
    pub max: f64,
}

impl EfficiencyBounds {
    /// 여유율 기반 계산에서 쓰는 좁은 범위.
    pub const STRICT: EfficiencyBounds = EfficiencyBounds {
        min: 0.05,
        max: 0.95,
    };

    /// 두 경계가 유한하고 `0 < min <= max <= 1` 이어야 한다.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && 0.0 < self.min
            && self.min <= self.max
            && self.max <= 1.0
    }

    /// 잘못된 경계는 기본 범위로 대신한다.
    pub fn clamp(&self, efficiency: f64) -> f64 {
        let bounds = if self.is_valid() { *self } else { Self::default() };
        let efficiency = if efficiency.is_finite() {
            efficiency
        } else {
            DEFAULT_EFFICIENCY
        };
        efficiency.clamp(bounds.min, bounds.max)
    }
}

impl Default for EfficiencyBounds {
    fn default() -> Self {
        Self { min: 0.1, max: 1.0 }
    }
}

/// 양수 운전 조건 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PumpingInput {
    /// 하루 양수 시간 [h]
    pub hours_per_day: f64,
    /// 펌프 효율 (0~1)
    pub efficiency: f64,
    /// 전력 추정 사용 여부
    pub power_enabled: bool,
}

impl Default for PumpingInput {
    fn default() -> Self {
        Self {
            hours_per_day: DEFAULT_PUMPING_HOURS,
            efficiency: DEFAULT_EFFICIENCY,
            power_enabled: true,
        }
    }
}

/// 필요 유량 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowResult {
    pub flow_lh: f64,
    pub flow_lmin: f64,
    pub flow_m3h: f64,
    pub volume_m3_per_day: f64,
    /// 실제 계산에 사용한 양수 시간
    pub hours_per_day: f64,
}

/// 전력 추정 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerResult {
    pub hydraulic_w: f64,
    pub electrical_w: f64,
}

/// 일일 수요를 양수 시간으로 나눠 필요 유량을 구한다.
///
/// 양수 시간이 최소값보다 작으면 최소값으로 보정해 입력에 되쓴다.
pub fn required_flow(
    demand_l_per_day: f64,
    pumping: &mut PumpingInput,
    min_hours: f64,
    warnings: &mut Vec<SizingWarning>,
) -> FlowResult {
    if !pumping.hours_per_day.is_finite() {
        pumping.hours_per_day = DEFAULT_PUMPING_HOURS;
    }
    if pumping.hours_per_day < min_hours {
        warnings.push(SizingWarning::PumpingHoursClamped {
            requested: pumping.hours_per_day,
            applied: min_hours,
        });
        pumping.hours_per_day = min_hours;
    }
    let hours = pumping.hours_per_day;
    let flow_lh = if hours > 0.0 {
        demand_l_per_day / hours
    } else {
        0.0
    };
    FlowResult {
        flow_lh,
        flow_lmin: convert_flow(flow_lh, FlowUnit::LitersPerHour, FlowUnit::LitersPerMinute),
        flow_m3h: convert_flow(flow_lh, FlowUnit::LitersPerHour, FlowUnit::CubicMeterPerHour),
        volume_m3_per_day: demand_l_per_day / 1000.0,
        hours_per_day: hours,
    }
}

/// P_hid = ρ·g·Q·AMT, P_ele = P_hid / η.
///
/// 비활성화되었거나 수요 또는 AMT가 0이면 0을 보고한다.
pub fn estimate_power(
    flow_lh: f64,
    amt_m: f64,
    demand_l_per_day: f64,
    pumping: &mut PumpingInput,
    bounds: &EfficiencyBounds,
    warnings: &mut Vec<SizingWarning>,
) -> PowerResult {
    if !pumping.power_enabled || demand_l_per_day <= 0.0 || amt_m <= 0.0 {
        return PowerResult {
            hydraulic_w: 0.0,
            electrical_w: 0.0,
        };
    }
    let efficiency = bounds.clamp(pumping.efficiency);
    if efficiency != pumping.efficiency {
        warnings.push(SizingWarning::EfficiencyClamped {
            requested: pumping.efficiency,
            applied: efficiency,
        });
        pumping.efficiency = efficiency;
    }
    let q_m3s = convert_flow(flow_lh, FlowUnit::LitersPerHour, FlowUnit::CubicMeterPerSecond);
    let hydraulic = RHO_WATER * G * q_m3s * amt_m;
    PowerResult {
        hydraulic_w: hydraulic,
        electrical_w: hydraulic / efficiency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_from_demand_and_hours() {
        let mut pumping = PumpingInput::default();
        let mut warnings = Vec::new();
        let res = required_flow(840.0, &mut pumping, DEFAULT_MIN_PUMPING_HOURS, &mut warnings);
        assert!((res.flow_lh - 152.727_272_727).abs() < 1e-6);
        assert!((res.flow_lmin - 2.545_454_545).abs() < 1e-6);
        assert!((res.volume_m3_per_day - 0.84).abs() < 1e-12);
        assert!(warnings.is_empty());
    }

    #[test]
    fn short_pumping_window_is_clamped_and_written_back() {
        let mut pumping = PumpingInput {
            hours_per_day: 0.1,
            ..Default::default()
        };
        let mut warnings = Vec::new();
        let res = required_flow(100.0, &mut pumping, DEFAULT_MIN_PUMPING_HOURS, &mut warnings);
        assert_eq!(pumping.hours_per_day, 0.5);
        assert!((res.flow_lh - 200.0).abs() < 1e-12);
        assert!(matches!(
            warnings.as_slice(),
            [SizingWarning::PumpingHoursClamped { .. }]
        ));
    }

    #[test]
    fn power_uses_clamped_efficiency() {
        let mut pumping = PumpingInput {
            efficiency: 0.02,
            ..Default::default()
        };
        let mut warnings = Vec::new();
        let res = estimate_power(
            3600.0,
            10.0,
            1000.0,
            &mut pumping,
            &EfficiencyBounds::default(),
            &mut warnings,
        );
        // Q = 0.001 m³/s
        assert!((res.hydraulic_w - 98.1).abs() < 1e-9);
        assert!((res.electrical_w - 981.0).abs() < 1e-6);
        assert_eq!(pumping.efficiency, 0.1);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn strict_bounds_cap_efficiency() {
        assert_eq!(EfficiencyBounds::STRICT.clamp(1.0), 0.95);
        assert_eq!(EfficiencyBounds::STRICT.clamp(0.01), 0.05);
    }

    #[test]
    fn invalid_bounds_fall_back_to_defaults() {
        let inverted = EfficiencyBounds { min: 0.9, max: 0.2 };
        assert!(!inverted.is_valid());
        assert_eq!(inverted.clamp(0.05), 0.1);
        let nan = EfficiencyBounds {
            min: f64::NAN,
            max: 0.8,
        };
        assert_eq!(nan.clamp(0.6), 0.6);
        assert!(EfficiencyBounds::STRICT.is_valid());
    }

    #[test]
    fn power_is_zero_when_disabled_or_no_head() {
        let mut warnings = Vec::new();
        let mut off = PumpingInput {
            power_enabled: false,
            ..Default::default()
        };
        let bounds = EfficiencyBounds::default();
        let res = estimate_power(500.0, 30.0, 1000.0, &mut off, &bounds, &mut warnings);
        assert_eq!(res.electrical_w, 0.0);

        let mut on = PumpingInput::default();
        let res = estimate_power(500.0, 0.0, 1000.0, &mut on, &bounds, &mut warnings);
        assert_eq!(res.hydraulic_w, 0.0);
    }
}
