//! 카탈로그 후보 펌프를 목표 운전점에 대해 평가하고 순위를 매긴다.
//!
//! # 점수 모델
//!
//! ```text
//! score = (meets ? 0 : unmet_penalty)
//!       + w_power  · power_W        (정격 전력 없음 → missing_power_w)
//!       + w_price  · price          (가격 없음 → 0)
//!       − w_margin · head_margin_m
//! ```
//!
//! 낮을수록 좋다. 정렬 키는 `(미충족 여부, score, 카탈로그 순서)`이므로
//! 가중치와 무관하게 충족 후보가 항상 미충족 후보보다 앞선다.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pump::{evaluate, CurveMode, PumpRecord};
use crate::sizing::OperatingPoint;

/// 점수 가중치 설정.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// 목표 미충족 시 더하는 벌점
    pub unmet_penalty: f64,
    /// 정격 전력 [W] 가중치
    pub power: f64,
    /// 가격 가중치. 전력보다 훨씬 작아 근소한 차이만 가른다.
    pub price: f64,
    /// 양정 여유 [m] 가중치 (빼는 항)
    pub head_margin: f64,
    /// 정격 전력을 모르는 펌프에 쓰는 전력 값 [W]
    pub missing_power_w: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            unmet_penalty: 1e9,
            power: 1.0,
            price: 1e-3,
            head_margin: 1e-2,
            missing_power_w: 1e6,
        }
    }
}

/// 종류/전압 필터. 빈 문자열은 필터 없음으로 본다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingFilters {
    pump_type: Option<String>,
    voltage: Option<String>,
}

impl RankingFilters {
    pub fn new(pump_type: &str, voltage: &str) -> Self {
        let pump_type = pump_type.trim();
        let voltage = voltage.trim().to_lowercase();
        Self {
            pump_type: (!pump_type.is_empty()).then(|| pump_type.to_string()),
            voltage: (!voltage.is_empty()).then_some(voltage),
        }
    }

    pub fn pump_type(&self) -> Option<&str> {
        self.pump_type.as_deref()
    }

    pub fn voltage(&self) -> Option<&str> {
        self.voltage.as_deref()
    }

    /// 종류는 정확히 일치, 전압은 대소문자 무시 부분 문자열로 비교한다.
    pub fn accepts(&self, pump: &PumpRecord) -> bool {
        let type_ok = self
            .pump_type
            .as_deref()
            .map_or(true, |t| pump.pump_type == t);
        let voltage_ok = self
            .voltage
            .as_deref()
            .map_or(true, |v| pump.voltage.to_lowercase().contains(v));
        type_ok && voltage_ok
    }
}

/// 한 번의 순위 계산에서 만들어지는 후보 평가 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub pump: PumpRecord,
    /// 카탈로그 스냅샷에서의 위치(동점 처리용)
    pub catalog_index: usize,
    pub head_at_target_flow: f64,
    pub curve_mode: CurveMode,
    pub meets: bool,
    /// 양정 여유 [m]. 음수면 부족분.
    pub head_margin: f64,
    pub score: f64,
}

/// 순위 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingOutcome {
    pub operating_point: OperatingPoint,
    pub scored: Vec<ScoredCandidate>,
    best: Option<usize>,
}

impl RankingOutcome {
    /// 목표를 충족하는 최선 후보. 없으면 None이며 호출자는 "해당 없음"을 명시해야 한다.
    pub fn best(&self) -> Option<&ScoredCandidate> {
        self.best.map(|i| &self.scored[i])
    }

    /// 화면 표시용 상위 n개.
    pub fn top(&self, n: usize) -> &[ScoredCandidate] {
        &self.scored[..n.min(self.scored.len())]
    }

    pub fn meeting_count(&self) -> usize {
        self.scored.iter().filter(|c| c.meets).count()
    }
}

/// 후보 하나의 점수를 계산한다.
pub fn score(pump: &PumpRecord, meets: bool, head_margin: f64, weights: &ScoreWeights) -> f64 {
    let penalty = if meets { 0.0 } else { weights.unmet_penalty };
    let power = pump.power_w.unwrap_or(weights.missing_power_w);
    let price = pump.price.unwrap_or(0.0);
    penalty + weights.power * power + weights.price * price - weights.head_margin * head_margin
}

/// 카탈로그를 필터링하고 목표 유량에서의 양정으로 후보를 평가해 정렬한다.
pub fn rank(
    catalog: &[PumpRecord],
    operating_point: &OperatingPoint,
    filters: &RankingFilters,
    weights: &ScoreWeights,
) -> RankingOutcome {
    let actionable = operating_point.is_actionable();
    let mut scored: Vec<ScoredCandidate> = catalog
        .iter()
        .enumerate()
        .filter(|(_, pump)| filters.accepts(pump))
        .map(|(idx, pump)| {
            let eval = evaluate(pump, operating_point.target_flow_lh);
            let head_margin = eval.head_m - operating_point.target_head_m;
            let meets = actionable && eval.head_m >= operating_point.target_head_m;
            ScoredCandidate {
                pump: pump.clone(),
                catalog_index: idx,
                head_at_target_flow: eval.head_m,
                curve_mode: eval.mode,
                meets,
                head_margin,
                score: score(pump, meets, head_margin, weights),
            }
        })
        .collect();

    scored.sort_by(compare_candidates);

    let best = if actionable {
        scored
            .iter()
            .position(|c| c.meets && c.score.is_finite())
    } else {
        None
    };

    debug!(
        candidates = scored.len(),
        filtered_out = catalog.len() - scored.len(),
        target_flow_lh = operating_point.target_flow_lh,
        target_head_m = operating_point.target_head_m,
        best = best.map(|i| scored[i].pump.name.as_str()),
        "ranking pass complete"
    );

    RankingOutcome {
        operating_point: *operating_point,
        scored,
        best,
    }
}

fn compare_candidates(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.meets
        .cmp(&a.meets)
        .then_with(|| a.score.total_cmp(&b.score))
        .then_with(|| a.catalog_index.cmp(&b.catalog_index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pump::{sample_catalog, CurvePoint};

    fn op(flow: f64, head: f64) -> OperatingPoint {
        OperatingPoint::new(flow, head)
    }

    #[test]
    fn lower_power_wins_among_meeting_pumps() {
        let catalog = sample_catalog();
        let out = rank(
            &catalog,
            &op(183.27, 20.0),
            &RankingFilters::default(),
            &ScoreWeights::default(),
        );
        let best = out.best().expect("best");
        assert_eq!(best.pump.name, "Solar DC 200W");
        assert!(best.meets);
    }

    #[test]
    fn type_filter_is_exact_and_voltage_is_substring() {
        let catalog = sample_catalog();
        let filters = RankingFilters::new(" AC ", "");
        let out = rank(&catalog, &op(100.0, 10.0), &filters, &ScoreWeights::default());
        assert!(out.scored.iter().all(|c| c.pump.pump_type == "AC"));
        assert_eq!(out.scored.len(), 2);

        let filters = RankingFilters::new("Solar", "");
        let out = rank(&catalog, &op(100.0, 10.0), &filters, &ScoreWeights::default());
        assert!(out.scored.is_empty());
        assert!(out.best().is_none());

        let filters = RankingFilters::new("", "48v");
        let out = rank(&catalog, &op(100.0, 10.0), &filters, &ScoreWeights::default());
        assert_eq!(out.scored.len(), 1);
        assert_eq!(out.scored[0].pump.name, "Solar DC 500W");
    }

    #[test]
    fn zero_target_has_no_best() {
        let catalog = sample_catalog();
        for point in [op(0.0, 30.0), op(200.0, 0.0)] {
            let out = rank(
                &catalog,
                &point,
                &RankingFilters::default(),
                &ScoreWeights::default(),
            );
            assert!(out.best().is_none());
            assert!(out.scored.iter().all(|c| !c.meets));
        }
    }

    #[test]
    fn unrated_power_ranks_behind_rated() {
        let catalog = vec![
            PumpRecord::rated("unrated", "DC", "24V", None, 2000.0, 60.0),
            PumpRecord::rated("rated", "DC", "24V", Some(900.0), 2000.0, 40.0),
        ];
        let out = rank(
            &catalog,
            &op(500.0, 20.0),
            &RankingFilters::default(),
            &ScoreWeights::default(),
        );
        assert_eq!(out.scored[0].pump.name, "rated");
    }

    #[test]
    fn price_breaks_power_ties_and_margin_breaks_price_ties() {
        let catalog = vec![
            PumpRecord::rated("pricey", "DC", "24V", Some(300.0), 1500.0, 35.0).with_price(2000.0),
            PumpRecord::rated("cheap", "DC", "24V", Some(300.0), 1500.0, 35.0).with_price(1000.0),
            PumpRecord::rated("cheap-strong", "DC", "24V", Some(300.0), 1500.0, 45.0)
                .with_price(1000.0),
        ];
        let out = rank(
            &catalog,
            &op(300.0, 20.0),
            &RankingFilters::default(),
            &ScoreWeights::default(),
        );
        let names: Vec<&str> = out.scored.iter().map(|c| c.pump.name.as_str()).collect();
        assert_eq!(names, ["cheap-strong", "cheap", "pricey"]);
    }

    #[test]
    fn identical_pumps_keep_catalog_order() {
        let pump = PumpRecord::rated("same", "DC", "24V", Some(300.0), 1500.0, 35.0);
        let catalog = vec![pump.clone(), pump.clone(), pump];
        let out = rank(
            &catalog,
            &op(300.0, 20.0),
            &RankingFilters::default(),
            &ScoreWeights::default(),
        );
        let order: Vec<usize> = out.scored.iter().map(|c| c.catalog_index).collect();
        assert_eq!(order, [0, 1, 2]);
    }

    #[test]
    fn meeting_pumps_precede_even_with_extreme_weights() {
        let weights = ScoreWeights {
            unmet_penalty: 0.0,
            head_margin: 0.0,
            ..Default::default()
        };
        let catalog = vec![
            PumpRecord::rated("weak-cheap", "DC", "24V", Some(10.0), 500.0, 5.0),
            PumpRecord::rated("strong", "DC", "24V", Some(5000.0), 5000.0, 80.0),
        ];
        let out = rank(&catalog, &op(400.0, 30.0), &RankingFilters::default(), &weights);
        assert_eq!(out.scored[0].pump.name, "strong");
        assert!(!out.scored[1].meets);
    }

    #[test]
    fn curve_pump_is_compared_at_target_flow() {
        let curve = PumpRecord::rated("curve", "DC", "24V", Some(400.0), 800.0, 70.0)
            .with_curve(vec![CurvePoint::new(0.0, 70.0), CurvePoint::new(800.0, 62.0)]);
        let out = rank(
            &[curve],
            &op(400.0, 60.0),
            &RankingFilters::default(),
            &ScoreWeights::default(),
        );
        let c = &out.scored[0];
        assert!((c.head_at_target_flow - 66.0).abs() < 1e-9);
        assert!((c.head_margin - 6.0).abs() < 1e-9);
        assert_eq!(c.curve_mode, CurveMode::Interpolated);
        assert!(c.meets);
    }

    #[test]
    fn top_is_bounded() {
        let catalog = sample_catalog();
        let out = rank(
            &catalog,
            &op(100.0, 10.0),
            &RankingFilters::default(),
            &ScoreWeights::default(),
        );
        assert_eq!(out.top(3).len(), 3);
        assert_eq!(out.top(50).len(), 5);
    }
}
