use serde::{Deserialize, Serialize};

/// 문자열 필드가 비었을 때 사용하는 자리표시자.
pub const PLACEHOLDER: &str = "-";

/// 펌프 성능곡선 위의 한 점(유량 L/h, 양정 m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub flow: f64,
    pub head: f64,
}

impl CurvePoint {
    pub const fn new(flow: f64, head: f64) -> Self {
        Self { flow, head }
    }
}

/// 정규화된 카탈로그 항목.
///
/// 직렬화 시 항상 정규 형태(`name`, `type`, `voltage`, `powerW`, `price`,
/// `maxFlow`, `maxHead`, `curvePoints`)로 내보낸다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PumpRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub pump_type: String,
    pub voltage: String,
    /// 정격 전력 [W]. 알 수 없으면 None.
    #[serde(rename = "powerW", skip_serializing_if = "Option::is_none")]
    pub power_w: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// 최대 유량 [L/h]
    pub max_flow: f64,
    /// 최대 양정 [m]
    pub max_head: f64,
    /// 측정 성능곡선. 있으면 max_flow/max_head 보다 우선한다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve_points: Option<Vec<CurvePoint>>,
}

impl PumpRecord {
    /// 단일 정격(최대 유량/양정)만 가진 펌프를 만든다.
    pub fn rated(
        name: &str,
        pump_type: &str,
        voltage: &str,
        power_w: Option<f64>,
        max_flow: f64,
        max_head: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            pump_type: pump_type.to_string(),
            voltage: voltage.to_string(),
            power_w,
            price: None,
            max_flow,
            max_head,
            curve_points: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_curve(mut self, points: Vec<CurvePoint>) -> Self {
        self.curve_points = Some(points);
        self
    }

    /// 곡선 평가에 쓸 수 있는 점 목록(2점 이상)이 있는지 확인한다.
    pub fn usable_curve(&self) -> Option<&[CurvePoint]> {
        self.curve_points.as_deref().filter(|points| points.len() >= 2)
    }
}
