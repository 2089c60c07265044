//! 수요 → 전양정 → 유량/전력 → 목표 운전점 → 펌프 순위로 이어지는 사이징 계산.
//!
//! 입력이 바뀔 때마다 `compute_sizing`을 한 번 호출해 전체를 다시 계산한다.
//! 범위를 벗어난 입력은 보정되어 `SizingInput`에 되쓰인다.

pub mod demand;
pub mod flow_power;
pub mod hydraulics;
pub mod operating_point;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::pump::PumpRecord;
use crate::selection::{rank, RankingFilters, RankingOutcome, ScoreWeights};

pub use demand::{daily_demand, ConsumptionRates, DemandInput, DemandResult};
pub use flow_power::{
    estimate_power, required_flow, EfficiencyBounds, FlowResult, PowerResult, PumpingInput,
};
pub use hydraulics::{total_head, HydraulicsResult, SiteGeometry};
pub use operating_point::{resolve, MarginBounds, Margins, OperatingPoint};

/// 계산 중 입력 보정 등 사용자에게 알려야 할 사항.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizingWarning {
    PumpingHoursClamped { requested: f64, applied: f64 },
    EfficiencyClamped { requested: f64, applied: f64 },
    FlowMarginClamped { requested: f64, applied: f64 },
    HeadMarginClamped { requested: f64, applied: f64 },
    /// 전양정이 0. 우물 깊이/저수조 높이/관로 길이를 확인해야 한다.
    ZeroAmt,
    /// 사용할 수 있는 펌프가 카탈로그에 없다.
    EmptyCatalog,
}

/// 입력 보정 한계값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingLimits {
    pub min_pumping_hours: f64,
    pub head_loss_fraction: f64,
    pub efficiency: EfficiencyBounds,
    pub margins: MarginBounds,
}

impl Default for SizingLimits {
    fn default() -> Self {
        Self {
            min_pumping_hours: flow_power::DEFAULT_MIN_PUMPING_HOURS,
            head_loss_fraction: hydraulics::DEFAULT_HEAD_LOSS_FRACTION,
            efficiency: EfficiencyBounds::default(),
            margins: MarginBounds::default(),
        }
    }
}

/// 한 번의 사이징 계산에 필요한 모든 입력.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingInput {
    pub demand: DemandInput,
    pub site: SiteGeometry,
    pub pumping: PumpingInput,
    pub margins: Margins,
    /// 펌프 종류 필터(정확히 일치). 빈 문자열이면 필터 없음.
    pub type_filter: String,
    /// 전압 필터(부분 문자열, 대소문자 무시). 빈 문자열이면 필터 없음.
    pub voltage_filter: String,
}

/// 사이징 계산 설정 묶음.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizingParams {
    pub rates: ConsumptionRates,
    pub limits: SizingLimits,
    pub weights: ScoreWeights,
}

/// 전체 사이징 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingResult {
    /// 보정이 반영된 실제 입력
    pub input: SizingInput,
    pub demand: DemandResult,
    pub hydraulics: HydraulicsResult,
    pub flow: FlowResult,
    pub power: PowerResult,
    pub ranking: RankingOutcome,
    pub warnings: Vec<SizingWarning>,
}

impl SizingResult {
    pub fn operating_point(&self) -> &OperatingPoint {
        &self.ranking.operating_point
    }
}

/// 입력과 카탈로그 스냅샷으로 전체 계산을 한 번 수행한다.
pub fn compute_sizing(
    input: &mut SizingInput,
    catalog: &[PumpRecord],
    params: &SizingParams,
) -> SizingResult {
    let mut warnings = Vec::new();

    let demand = daily_demand(&mut input.demand, &params.rates);
    let hydraulics = total_head(&mut input.site, params.limits.head_loss_fraction);
    let flow = required_flow(
        demand.liters_per_day,
        &mut input.pumping,
        params.limits.min_pumping_hours,
        &mut warnings,
    );
    let power = estimate_power(
        flow.flow_lh,
        hydraulics.amt_m,
        demand.liters_per_day,
        &mut input.pumping,
        &params.limits.efficiency,
        &mut warnings,
    );
    let operating_point = resolve(
        &mut input.margins,
        flow.flow_lh,
        hydraulics.amt_m,
        &params.limits.margins,
        &mut warnings,
    );

    if hydraulics.amt_m == 0.0 {
        warnings.push(SizingWarning::ZeroAmt);
    }
    if catalog.is_empty() {
        warnings.push(SizingWarning::EmptyCatalog);
    }
    for w in &warnings {
        warn!(warning = ?w, "sizing input adjusted or incomplete");
    }

    let filters = RankingFilters::new(&input.type_filter, &input.voltage_filter);
    let ranking = rank(catalog, &operating_point, &filters, &params.weights);

    SizingResult {
        input: input.clone(),
        demand,
        hydraulics,
        flow,
        power,
        ranking,
        warnings,
    }
}
