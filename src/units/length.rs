/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Meter,
    Kilometer,
}

fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value,
        LengthUnit::Kilometer => value * 1000.0,
    }
}

fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value_m,
        LengthUnit::Kilometer => value_m / 1000.0,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let m = to_meter(value, from);
    from_meter(m, to)
}
