use serde::{Deserialize, Serialize};

use super::SizingWarning;

pub const DEFAULT_FLOW_MARGIN: f64 = 1.2;
pub const DEFAULT_HEAD_MARGIN: f64 = 1.1;

/// 여유율 허용 범위. 1.0 미만은 요구량보다 작은 펌프를 허용하므로 받지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for MarginBounds {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 10.0,
        }
    }
}

impl MarginBounds {
    /// 두 경계가 유한하고 `1.0 <= min <= max` 이어야 한다.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && 1.0 <= self.min && self.min <= self.max
    }

    /// 잘못된 경계는 기본 범위로 대신한다.
    pub fn clamp(&self, margin: f64) -> f64 {
        let bounds = if self.is_valid() { *self } else { Self::default() };
        if margin.is_finite() {
            margin.clamp(bounds.min, bounds.max)
        } else {
            bounds.min
        }
    }
}

/// 유량/양정 여유율 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub flow: f64,
    pub head: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            flow: DEFAULT_FLOW_MARGIN,
            head: DEFAULT_HEAD_MARGIN,
        }
    }
}

/// 펌프가 만족해야 하는 운전점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperatingPoint {
    /// 목표 유량 [L/h]
    pub target_flow_lh: f64,
    /// 목표 양정 [m]
    pub target_head_m: f64,
}

impl OperatingPoint {
    pub fn new(target_flow_lh: f64, target_head_m: f64) -> Self {
        Self {
            target_flow_lh,
            target_head_m,
        }
    }

    /// 목표 유량과 양정이 모두 양수일 때만 추천이 의미가 있다.
    pub fn is_actionable(&self) -> bool {
        self.target_flow_lh.is_finite()
            && self.target_head_m.is_finite()
            && self.target_flow_lh > 0.0
            && self.target_head_m > 0.0
    }
}

/// 여유율을 범위 안으로 보정한 뒤 목표 운전점을 만든다.
///
/// 보정된 여유율은 `margins`에 되쓴다.
pub fn resolve(
    margins: &mut Margins,
    required_flow_lh: f64,
    amt_m: f64,
    bounds: &MarginBounds,
    warnings: &mut Vec<SizingWarning>,
) -> OperatingPoint {
    let flow = bounds.clamp(margins.flow);
    if flow != margins.flow {
        warnings.push(SizingWarning::FlowMarginClamped {
            requested: margins.flow,
            applied: flow,
        });
        margins.flow = flow;
    }
    let head = bounds.clamp(margins.head);
    if head != margins.head {
        warnings.push(SizingWarning::HeadMarginClamped {
            requested: margins.head,
            applied: head,
        });
        margins.head = head;
    }
    OperatingPoint::new(required_flow_lh * flow, amt_m * head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_margins() {
        let mut margins = Margins::default();
        let mut warnings = Vec::new();
        let op = resolve(
            &mut margins,
            840.0 / 5.5,
            35.0,
            &MarginBounds::default(),
            &mut warnings,
        );
        assert!((op.target_flow_lh - 183.272_727_27).abs() < 1e-6);
        assert!((op.target_head_m - 38.5).abs() < 1e-9);
        assert!(op.is_actionable());
        assert!(warnings.is_empty());
    }

    #[test]
    fn margins_below_one_are_raised() {
        let mut margins = Margins {
            flow: 0.8,
            head: 25.0,
        };
        let mut warnings = Vec::new();
        let op = resolve(&mut margins, 100.0, 10.0, &MarginBounds::default(), &mut warnings);
        assert_eq!(margins.flow, 1.0);
        assert_eq!(margins.head, 10.0);
        assert_eq!(op, OperatingPoint::new(100.0, 100.0));
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn inverted_bounds_fall_back_to_defaults() {
        let bounds = MarginBounds { min: 5.0, max: 2.0 };
        assert!(!bounds.is_valid());
        assert_eq!(bounds.clamp(0.5), 1.0);
        assert_eq!(bounds.clamp(20.0), 10.0);
        let nan = MarginBounds { min: f64::NAN, max: 2.0 };
        assert_eq!(nan.clamp(1.5), 1.5);
    }

    #[test]
    fn zero_requirement_is_not_actionable() {
        let mut margins = Margins::default();
        let mut warnings = Vec::new();
        let op = resolve(&mut margins, 0.0, 35.0, &MarginBounds::default(), &mut warnings);
        assert_eq!(op.target_flow_lh, 0.0);
        assert!(!op.is_actionable());
    }
}
