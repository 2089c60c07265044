/// 체적 단위. 내부 기준은 리터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeUnit {
    Liter,
    CubicMeter,
}

fn to_liter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value,
        VolumeUnit::CubicMeter => value * 1000.0,
    }
}

fn from_liter(value_l: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value_l,
        VolumeUnit::CubicMeter => value_l / 1000.0,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let l = to_liter(value, from);
    from_liter(l, to)
}
