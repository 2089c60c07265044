//! 펌프가 주어진 유량에서 낼 수 있는 양정을 계산한다.
//! 측정 곡선이 있으면 구간 선형 보간, 없으면 (0, Hmax)–(Qmax, 0) 직선 근사를 쓴다.

use super::record::{CurvePoint, PumpRecord};

/// 양정 값을 만든 모델 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveMode {
    /// 측정 곡선 내부 보간
    Interpolated,
    /// 곡선 범위 밖이라 가장자리 점으로 클램프됨
    Clamped,
    /// 최대 유량/양정 직선 근사
    LinearFallback,
    /// 평가 불가(최대 유량 또는 양정이 0 이하)
    Degenerate,
}

/// 곡선 평가 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadEvaluation {
    pub head_m: f64,
    pub mode: CurveMode,
}

/// 주어진 유량[L/h]에서의 양정[m]을 반환한다. 실패하지 않으며 음수를 내지 않는다.
pub fn head_at(pump: &PumpRecord, flow_lh: f64) -> f64 {
    evaluate(pump, flow_lh).head_m
}

/// `head_at`과 같지만 사용한 모델도 함께 돌려준다.
pub fn evaluate(pump: &PumpRecord, flow_lh: f64) -> HeadEvaluation {
    let flow = if flow_lh.is_finite() { flow_lh.max(0.0) } else { 0.0 };
    match pump.usable_curve() {
        Some(points) => interpolate(points, flow),
        None => linear_fallback(pump.max_flow, pump.max_head, flow),
    }
}

fn interpolate(points: &[CurvePoint], flow: f64) -> HeadEvaluation {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.flow.total_cmp(&b.flow));

    let first = sorted[0];
    let last = sorted[sorted.len() - 1];
    if flow <= first.flow {
        return clamped(first.head);
    }
    if flow >= last.flow {
        return clamped(last.head);
    }
    for win in sorted.windows(2) {
        let a = win[0];
        let b = win[1];
        if flow >= a.flow && flow <= b.flow {
            // 폭이 0인 구간은 그보다 앞선 구간이 먼저 잡으므로 여기서 span > 0 이다.
            let t = (flow - a.flow) / (b.flow - a.flow);
            let head = a.head + t * (b.head - a.head);
            return HeadEvaluation {
                head_m: head.max(0.0),
                mode: CurveMode::Interpolated,
            };
        }
    }
    clamped(last.head)
}

fn clamped(head: f64) -> HeadEvaluation {
    HeadEvaluation {
        head_m: head.max(0.0),
        mode: CurveMode::Clamped,
    }
}

fn linear_fallback(max_flow: f64, max_head: f64, flow: f64) -> HeadEvaluation {
    if !(max_flow > 0.0 && max_head > 0.0) {
        return HeadEvaluation {
            head_m: 0.0,
            mode: CurveMode::Degenerate,
        };
    }
    HeadEvaluation {
        head_m: (max_head * (1.0 - flow / max_flow)).max(0.0),
        mode: CurveMode::LinearFallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve_pump(points: &[(f64, f64)]) -> PumpRecord {
        PumpRecord::rated("curve", "Solar DC", "24V", Some(300.0), 0.0, 0.0).with_curve(
            points
                .iter()
                .map(|&(flow, head)| CurvePoint::new(flow, head))
                .collect(),
        )
    }

    #[test]
    fn interpolates_inside_segment() {
        let pump = curve_pump(&[(0.0, 70.0), (800.0, 62.0)]);
        assert!((head_at(&pump, 400.0) - 66.0).abs() < 1e-12);
        assert_eq!(evaluate(&pump, 400.0).mode, CurveMode::Interpolated);
    }

    #[test]
    fn clamps_outside_envelope() {
        let pump = curve_pump(&[(200.0, 50.0), (600.0, 40.0), (1000.0, 20.0)]);
        assert_eq!(head_at(&pump, 0.0), 50.0);
        assert_eq!(head_at(&pump, 200.0), 50.0);
        assert_eq!(head_at(&pump, 1000.0), 20.0);
        assert_eq!(head_at(&pump, 5000.0), 20.0);
        assert_eq!(evaluate(&pump, 5000.0).mode, CurveMode::Clamped);
    }

    #[test]
    fn unsorted_curve_is_sorted_before_use() {
        let pump = curve_pump(&[(1000.0, 20.0), (200.0, 50.0), (600.0, 40.0)]);
        assert!((head_at(&pump, 800.0) - 30.0).abs() < 1e-12);
    }

    #[test]
    fn curve_takes_precedence_over_rating() {
        let mut pump = curve_pump(&[(0.0, 10.0), (100.0, 5.0)]);
        pump.max_flow = 1000.0;
        pump.max_head = 80.0;
        assert!((head_at(&pump, 50.0) - 7.5).abs() < 1e-12);
    }

    #[test]
    fn duplicate_flow_takes_the_segment_ending_there() {
        let pump = curve_pump(&[(0.0, 30.0), (500.0, 25.0), (500.0, 20.0), (900.0, 5.0)]);
        assert_eq!(head_at(&pump, 500.0), 25.0);
        assert!((head_at(&pump, 700.0) - 12.5).abs() < 1e-12);

        let leading = curve_pump(&[(0.0, 30.0), (0.0, 28.0), (600.0, 10.0)]);
        assert_eq!(head_at(&leading, 0.0), 30.0);
        assert!((head_at(&leading, 300.0) - 19.0).abs() < 1e-12);
    }

    #[test]
    fn linear_fallback_matches_reference_points() {
        let pump = PumpRecord::rated("p", "AC", "220V", None, 1000.0, 30.0);
        assert_eq!(head_at(&pump, 0.0), 30.0);
        assert_eq!(head_at(&pump, 1000.0), 0.0);
        assert!((head_at(&pump, 500.0) - 15.0).abs() < 1e-12);
        assert_eq!(head_at(&pump, 1500.0), 0.0);
    }

    #[test]
    fn degenerate_pump_yields_zero() {
        for (qmax, hmax) in [(0.0, 30.0), (1000.0, 0.0), (-5.0, 10.0)] {
            let pump = PumpRecord::rated("d", "AC", "220V", None, qmax, hmax);
            for flow in [0.0, 10.0, 1e6] {
                assert_eq!(head_at(&pump, flow), 0.0);
            }
            assert_eq!(evaluate(&pump, 1.0).mode, CurveMode::Degenerate);
        }
    }

    #[test]
    fn negative_or_nan_flow_is_treated_as_zero() {
        let pump = PumpRecord::rated("p", "AC", "220V", None, 1000.0, 30.0);
        assert_eq!(head_at(&pump, -10.0), 30.0);
        assert_eq!(head_at(&pump, f64::NAN), 30.0);
    }
}
