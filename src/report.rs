//! 사이징 결과를 사람이 읽는 텍스트로 만든다.

use std::fmt::Write as _;

use crate::i18n::{keys, Translator};
use crate::pump::{CurveMode, PumpRecord, PLACEHOLDER};
use crate::selection::RankingOutcome;
use crate::sizing::{SizingResult, SizingWarning};

/// 요약에 항상 포함하는 상위 후보 수.
pub const SUMMARY_TOP_OPTIONS: usize = 3;

fn num(v: f64) -> String {
    format!("{v:.2}")
}

fn power_text(pump: &PumpRecord) -> String {
    pump.power_w.map_or_else(|| PLACEHOLDER.to_string(), num)
}

/// 프로젝트 요약 텍스트.
pub fn summary(result: &SizingResult, tr: &Translator) -> String {
    let mut out = String::new();
    let demand = &result.demand;
    let site = &result.input.site;
    let hyd = &result.hydraulics;
    let flow = &result.flow;
    let op = result.operating_point();

    let mut line = |text: String| {
        out.push_str(&text);
        out.push('\n');
    };

    line(tr.t(keys::REPORT_TITLE).to_string());
    line(tr.tf(
        keys::REPORT_DEMAND,
        &[
            ("lpd", &num(demand.liters_per_day)),
            ("m3d", &num(demand.cubic_meters_per_day)),
        ],
    ));
    line(tr.tf(keys::REPORT_WELL_DEPTH, &[("m", &num(site.well_depth_m))]));
    line(tr.tf(keys::REPORT_TANK_HEIGHT, &[("m", &num(site.tank_height_m))]));
    line(tr.tf(
        keys::REPORT_PIPE_DISTANCE,
        &[
            ("m", &num(site.pipe_distance_m)),
            ("km", &num(hyd.pipe_distance_km)),
        ],
    ));
    line(tr.tf(
        keys::REPORT_HEAD_LOSS,
        &[
            ("pct", &format!("{:.0}", hyd.head_loss_fraction * 100.0)),
            ("m", &num(hyd.head_loss_m)),
        ],
    ));
    line(tr.tf(keys::REPORT_AMT, &[("m", &num(hyd.amt_m))]));
    line(tr.tf(keys::REPORT_HOURS, &[("h", &num(flow.hours_per_day))]));
    line(tr.tf(
        keys::REPORT_FLOW,
        &[("lh", &num(flow.flow_lh)), ("lmin", &num(flow.flow_lmin))],
    ));
    line(tr.tf(
        keys::REPORT_FLOW_M3,
        &[
            ("m3h", &format!("{:.3}", flow.flow_m3h)),
            ("m3d", &num(flow.volume_m3_per_day)),
        ],
    ));
    if result.input.pumping.power_enabled {
        line(tr.tf(
            keys::REPORT_POWER,
            &[
                ("hyd", &num(result.power.hydraulic_w)),
                ("ele", &num(result.power.electrical_w)),
                ("eff", &num(result.input.pumping.efficiency)),
            ],
        ));
    } else {
        line(tr.t(keys::REPORT_POWER_DISABLED).to_string());
    }
    line(tr.tf(
        keys::REPORT_TARGET,
        &[
            ("flow", &num(op.target_flow_lh)),
            ("head", &num(op.target_head_m)),
            ("fm", &num(result.input.margins.flow)),
            ("hm", &num(result.input.margins.head)),
        ],
    ));

    line(String::new());
    line(tr.t(keys::REPORT_RECOMMENDED_HEADING).to_string());
    match result.ranking.best() {
        Some(best) => line(tr.tf(
            keys::REPORT_RECOMMENDED,
            &[
                ("name", &best.pump.name),
                ("type", &best.pump.pump_type),
                ("voltage", &best.pump.voltage),
                ("power", &power_text(&best.pump)),
                ("head", &num(best.head_at_target_flow)),
            ],
        )),
        None if !op.is_actionable() => line(tr.t(keys::REPORT_NOT_ENOUGH_DATA).to_string()),
        None => line(tr.t(keys::REPORT_NONE).to_string()),
    }

    let top = result.ranking.top(SUMMARY_TOP_OPTIONS);
    if !top.is_empty() {
        line(String::new());
        line(tr.tf(keys::REPORT_TOP_HEADING, &[("n", &top.len())]));
        for (i, c) in top.iter().enumerate() {
            line(tr.tf(
                keys::REPORT_OPTION,
                &[
                    ("rank", &(i + 1)),
                    ("name", &c.pump.name),
                    ("type", &c.pump.pump_type),
                    ("voltage", &c.pump.voltage),
                    ("qmax", &num(c.pump.max_flow)),
                    ("hmax", &num(c.pump.max_head)),
                ],
            ));
        }
    }

    if !result.warnings.is_empty() {
        line(String::new());
        line(tr.t(keys::WARNINGS_HEADING).to_string());
        for w in &result.warnings {
            line(format!("- {}", warning_text(w, tr)));
        }
    }
    out
}

/// 경고 하나를 현재 언어로 옮긴다.
pub fn warning_text(warning: &SizingWarning, tr: &Translator) -> String {
    let clamped = |key: &str, requested: f64, applied: f64| {
        tr.tf(
            key,
            &[("requested", &num(requested)), ("applied", &num(applied))],
        )
    };
    match *warning {
        SizingWarning::PumpingHoursClamped { requested, applied } => {
            clamped(keys::WARN_HOURS_CLAMPED, requested, applied)
        }
        SizingWarning::EfficiencyClamped { requested, applied } => {
            clamped(keys::WARN_EFFICIENCY_CLAMPED, requested, applied)
        }
        SizingWarning::FlowMarginClamped { requested, applied } => {
            clamped(keys::WARN_FLOW_MARGIN_CLAMPED, requested, applied)
        }
        SizingWarning::HeadMarginClamped { requested, applied } => {
            clamped(keys::WARN_HEAD_MARGIN_CLAMPED, requested, applied)
        }
        SizingWarning::ZeroAmt => tr.t(keys::WARN_ZERO_AMT).to_string(),
        SizingWarning::EmptyCatalog => tr.t(keys::WARN_EMPTY_CATALOG).to_string(),
    }
}

fn curve_tag(mode: CurveMode) -> &'static str {
    match mode {
        CurveMode::Interpolated => "curve",
        CurveMode::Clamped => "curve*",
        CurveMode::LinearFallback => "linear",
        CurveMode::Degenerate => "-",
    }
}

/// 상위 n개 후보 표.
pub fn candidate_table(outcome: &RankingOutcome, n: usize, tr: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::TABLE_HEADER));
    for (i, c) in outcome.top(n).iter().enumerate() {
        let status = if c.meets {
            tr.t(keys::TABLE_MEETS)
        } else {
            tr.t(keys::TABLE_FAILS)
        };
        let _ = writeln!(
            out,
            "{:<3} {:<24} {:<11} {:<8} {:>8}  {:>7.2}  {:>8.2}  {} ({})",
            i + 1,
            c.pump.name,
            c.pump.pump_type,
            c.pump.voltage,
            power_text(&c.pump),
            c.head_at_target_flow,
            c.head_margin,
            status,
            curve_tag(c.curve_mode),
        );
    }
    out
}

/// 카탈로그 목록 표.
pub fn catalog_table(pumps: &[PumpRecord], tr: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::CATALOG_LIST_HEADER));
    for (i, p) in pumps.iter().enumerate() {
        let curve = p
            .usable_curve()
            .map_or_else(|| PLACEHOLDER.to_string(), |pts| pts.len().to_string());
        let _ = writeln!(
            out,
            "{:<3} {:<24} {:<11} {:<8} {:>8}  {:>9.1}  {:>7.1}  {}",
            i + 1,
            p.name,
            p.pump_type,
            p.voltage,
            power_text(p),
            p.max_flow,
            p.max_head,
            curve,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pump::sample_catalog;
    use crate::sizing::{compute_sizing, SizingInput, SizingParams};

    fn scenario() -> SizingInput {
        let mut input = SizingInput::default();
        input.demand.people = 10.0;
        input.site.well_depth_m = 20.0;
        input.site.tank_height_m = 5.0;
        input.site.pipe_distance_m = 100.0;
        input
    }

    #[test]
    fn summary_names_the_recommended_pump() {
        let mut input = scenario();
        let result = compute_sizing(&mut input, &sample_catalog(), &SizingParams::default());
        let text = summary(&result, &Translator::new("en"));
        assert!(text.contains("Total demand: 840.00 L/day (0.84 m³/day)"));
        assert!(text.contains("Head loss (10%): 10.00 m"));
        assert!(text.contains("Total head (AMT): 35.00 m"));
        assert!(text.contains("Target with margins: 183.27 L/h @ 38.50 m"));
        let best = result.ranking.best().expect("best");
        assert!(text.contains(&format!("- {} (", best.pump.name)));
        assert!(text.contains("Top 3 options considered:"));
    }

    #[test]
    fn summary_states_when_nothing_meets() {
        let mut input = scenario();
        let pumps = vec![PumpRecord::rated("weak", "DC", "24V", Some(100.0), 1000.0, 45.0)];
        let result = compute_sizing(&mut input, &pumps, &SizingParams::default());
        let text = summary(&result, &Translator::new("en"));
        assert!(text.contains("No pump meets the current targets."));
    }

    #[test]
    fn summary_flags_missing_inputs_and_lists_warnings() {
        let mut input = SizingInput::default();
        let result = compute_sizing(&mut input, &sample_catalog(), &SizingParams::default());
        let text = summary(&result, &Translator::new("en"));
        assert!(text.contains("Not enough data"));
        assert!(text.contains("Warnings:"));
        assert!(text.contains("AMT is 0 m"));
    }

    #[test]
    fn clamp_warning_is_translated() {
        let w = SizingWarning::PumpingHoursClamped {
            requested: 0.1,
            applied: 0.5,
        };
        let pt = warning_text(&w, &Translator::new("pt-br"));
        assert!(pt.contains("0.50 h/dia"));
    }

    #[test]
    fn candidate_table_is_bounded() {
        let mut input = scenario();
        let result = compute_sizing(&mut input, &sample_catalog(), &SizingParams::default());
        let table = candidate_table(&result.ranking, 2, &Translator::new("en"));
        assert_eq!(table.lines().count(), 3);
    }
}
