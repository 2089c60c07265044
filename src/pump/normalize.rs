//! 서로 다른 카탈로그 출처의 필드명을 정규 `PumpRecord`로 맞춘다.
//!
//! 필드마다 허용되는 키 이름을 순서대로 나열한 테이블을 두고, 먼저 발견되는
//! null이 아닌 값을 사용한다. 각 테이블의 첫 번째 키는 정규 내보내기 형태의
//! 키이므로 내보낸 카탈로그를 다시 읽어도 같은 결과가 나온다.

use serde_json::{Map, Value};
use tracing::debug;

use super::record::{CurvePoint, PumpRecord, PLACEHOLDER};

pub const NAME_KEYS: &[&str] = &["name", "nome", "model", "title", "bomba", "label"];
pub const TYPE_KEYS: &[&str] = &["type", "tipo", "category", "kind"];
pub const VOLTAGE_KEYS: &[&str] = &["voltage", "tensao", "tensão", "v"];
pub const POWER_KEYS: &[&str] = &["powerW", "potencia", "potenciaW", "power", "watt", "watts"];
pub const MAX_FLOW_KEYS: &[&str] = &[
    "maxFlow",
    "qmax",
    "Qmax",
    "max_flow",
    "max_flow_lh",
    "flowMax",
    "maxVazao",
    "maxVazaoLh",
];
pub const MAX_HEAD_KEYS: &[&str] = &[
    "maxHead",
    "hmax",
    "Hmax",
    "max_head",
    "headMax",
    "maxAltura",
    "maxAlturaM",
];
pub const PRICE_KEYS: &[&str] = &["price", "preco", "valor"];
pub const CURVE_KEYS: &[&str] = &["curvePoints", "curva", "pontosCurva"];
pub const POINT_FLOW_KEYS: &[&str] = &["flow", "q", "vazao"];
pub const POINT_HEAD_KEYS: &[&str] = &["head", "h", "altura"];

/// 단일 레코드 정규화 결과. 용량 필드가 실제로 숫자였는지를 함께 기록한다.
struct Normalized {
    record: PumpRecord,
    capacity_parsed: bool,
}

/// 원시 JSON 객체 하나를 정규 `PumpRecord`로 변환한다.
///
/// 항상 성공한다. 용량 필드를 읽지 못하면 0으로 채운다.
pub fn normalize(raw: &Value) -> PumpRecord {
    normalize_inner(raw).record
}

/// 카탈로그 배열 전체를 정규화한다.
///
/// 배열이 아니면 빈 목록을 돌려준다. 객체가 아닌 항목과 최대 유량/양정을
/// 유한한 숫자로 읽을 수 없는 항목은 조용히 제외한다. 결과가 비었을 때의
/// 경고는 호출자 책임이다.
pub fn normalize_catalog(raw: &Value) -> Vec<PumpRecord> {
    let Some(items) = raw.as_array() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        if !item.is_object() {
            debug!(index = idx, "skipping non-object catalog entry");
            continue;
        }
        let n = normalize_inner(item);
        if !n.capacity_parsed {
            debug!(
                index = idx,
                name = %n.record.name,
                "dropping pump without usable maxFlow/maxHead"
            );
            continue;
        }
        out.push(n.record);
    }
    out
}

fn normalize_inner(raw: &Value) -> Normalized {
    let empty = Map::new();
    let obj = raw.as_object().unwrap_or(&empty);

    let max_flow = pick(obj, MAX_FLOW_KEYS).and_then(parse_number);
    let max_head = pick(obj, MAX_HEAD_KEYS).and_then(parse_number);

    let record = PumpRecord {
        name: text_field(obj, NAME_KEYS),
        pump_type: text_field(obj, TYPE_KEYS),
        voltage: text_field(obj, VOLTAGE_KEYS),
        power_w: pick(obj, POWER_KEYS)
            .and_then(parse_number)
            .filter(|p| *p > 0.0),
        price: pick(obj, PRICE_KEYS)
            .and_then(parse_number)
            .filter(|p| *p >= 0.0),
        max_flow: max_flow.unwrap_or(0.0).max(0.0),
        max_head: max_head.unwrap_or(0.0).max(0.0),
        curve_points: pick(obj, CURVE_KEYS).and_then(parse_curve),
    };
    Normalized {
        record,
        capacity_parsed: max_flow.is_some() && max_head.is_some(),
    }
}

/// 키 테이블 순서대로 첫 번째 null이 아닌 값을 찾는다.
fn pick<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| obj.get(*k).filter(|v| !v.is_null()))
}

fn text_field(obj: &Map<String, Value>, keys: &[&str]) -> String {
    let text = match pick(obj, keys) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    };
    if text.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        text
    }
}

/// JSON 숫자 또는 숫자 문자열을 유한한 f64로 읽는다.
fn parse_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn parse_curve(value: &Value) -> Option<Vec<CurvePoint>> {
    let points: Vec<CurvePoint> = value
        .as_array()?
        .iter()
        .filter_map(parse_point)
        .collect();
    (points.len() >= 2).then_some(points)
}

fn parse_point(value: &Value) -> Option<CurvePoint> {
    let (flow, head) = match value {
        Value::Object(obj) => (
            pick(obj, POINT_FLOW_KEYS).and_then(parse_number)?,
            pick(obj, POINT_HEAD_KEYS).and_then(parse_number)?,
        ),
        Value::Array(pair) if pair.len() == 2 => {
            (parse_number(&pair[0])?, parse_number(&pair[1])?)
        }
        _ => return None,
    };
    (flow >= 0.0 && head >= 0.0).then_some(CurvePoint::new(flow, head))
}
