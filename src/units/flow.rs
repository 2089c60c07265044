/// 체적 유량 단위. 내부 기준은 L/h 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowUnit {
    LitersPerHour,
    LitersPerMinute,
    CubicMeterPerHour,
    CubicMeterPerSecond,
}

fn to_liters_per_hour(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::LitersPerHour => value,
        FlowUnit::LitersPerMinute => value * 60.0,
        FlowUnit::CubicMeterPerHour => value * 1000.0,
        FlowUnit::CubicMeterPerSecond => value * 3_600_000.0,
    }
}

fn from_liters_per_hour(value_lh: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::LitersPerHour => value_lh,
        FlowUnit::LitersPerMinute => value_lh / 60.0,
        FlowUnit::CubicMeterPerHour => value_lh / 1000.0,
        FlowUnit::CubicMeterPerSecond => value_lh / 3_600_000.0,
    }
}

/// 유량을 다른 단위로 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    let lh = to_liters_per_hour(value, from);
    from_liters_per_hour(lh, to)
}
