use serde::{Deserialize, Serialize};

use crate::units::{convert_volume, VolumeUnit};

/// 소비 항목별 1단위당 일일 물 사용량[L/일].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumptionRates {
    /// 사람 1인
    pub people: f64,
    /// 소 1두
    pub cattle: f64,
    /// 돼지 1두
    pub pigs: f64,
    /// 텃밭 1곳
    pub gardens: f64,
    /// 목초지 1 ha
    pub pasture: f64,
}

impl Default for ConsumptionRates {
    fn default() -> Self {
        Self {
            people: 84.0,
            cattle: 45.0,
            pigs: 12.5,
            gardens: 7.0,
            pasture: 50_000.0,
        }
    }
}

/// 항목별 수량 입력.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemandInput {
    pub people: f64,
    pub cattle: f64,
    pub pigs: f64,
    pub gardens: f64,
    pub pasture: f64,
}

impl DemandInput {
    /// 음수나 숫자가 아닌 수량을 0으로 맞춘다. 보정된 값이 그대로 입력값이 된다.
    pub fn clamp_non_negative(&mut self) {
        for qty in [
            &mut self.people,
            &mut self.cattle,
            &mut self.pigs,
            &mut self.gardens,
            &mut self.pasture,
        ] {
            *qty = non_negative(*qty);
        }
    }
}

/// 일일 수요 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemandResult {
    pub liters_per_day: f64,
    pub cubic_meters_per_day: f64,
}

/// 항목별 수량 × 단위 사용량의 합으로 일일 수요를 구한다.
pub fn daily_demand(input: &mut DemandInput, rates: &ConsumptionRates) -> DemandResult {
    input.clamp_non_negative();
    let total = input.people * rates.people
        + input.cattle * rates.cattle
        + input.pigs * rates.pigs
        + input.gardens * rates.gardens
        + input.pasture * rates.pasture;
    DemandResult {
        liters_per_day: total,
        cubic_meters_per_day: convert_volume(total, VolumeUnit::Liter, VolumeUnit::CubicMeter),
    }
}

pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
