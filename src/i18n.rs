use std::collections::HashMap;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const KEEP_CURRENT_HINT: &str = "general.keep_current_hint";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SIZING: &str = "main_menu.sizing";
    pub const MAIN_MENU_CATALOG: &str = "main_menu.catalog";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION: &str = "error.invalid_selection";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const SIZING_HEADING: &str = "sizing.heading";
    pub const SIZING_DEMAND_SECTION: &str = "sizing.demand_section";
    pub const SIZING_SITE_SECTION: &str = "sizing.site_section";
    pub const SIZING_PUMPING_SECTION: &str = "sizing.pumping_section";
    pub const SIZING_SELECTION_SECTION: &str = "sizing.selection_section";
    pub const PROMPT_PEOPLE: &str = "prompt.people";
    pub const PROMPT_CATTLE: &str = "prompt.cattle";
    pub const PROMPT_PIGS: &str = "prompt.pigs";
    pub const PROMPT_GARDENS: &str = "prompt.gardens";
    pub const PROMPT_PASTURE: &str = "prompt.pasture";
    pub const PROMPT_WELL_DEPTH: &str = "prompt.well_depth";
    pub const PROMPT_TANK_HEIGHT: &str = "prompt.tank_height";
    pub const PROMPT_PIPE_DISTANCE: &str = "prompt.pipe_distance";
    pub const PROMPT_PUMPING_HOURS: &str = "prompt.pumping_hours";
    pub const PROMPT_EFFICIENCY: &str = "prompt.efficiency";
    pub const PROMPT_POWER_ENABLED: &str = "prompt.power_enabled";
    pub const PROMPT_FLOW_MARGIN: &str = "prompt.flow_margin";
    pub const PROMPT_HEAD_MARGIN: &str = "prompt.head_margin";
    pub const PROMPT_TYPE_FILTER: &str = "prompt.type_filter";
    pub const PROMPT_VOLTAGE_FILTER: &str = "prompt.voltage_filter";

    pub const CATALOG_HEADING: &str = "catalog.heading";
    pub const CATALOG_OPTIONS: &str = "catalog.options";
    pub const CATALOG_LIST_HEADER: &str = "catalog.list_header";
    pub const CATALOG_IS_EMPTY: &str = "catalog.is_empty";
    pub const CATALOG_IMPORTED: &str = "catalog.imported";
    pub const CATALOG_EMPTY_WARNING: &str = "catalog.empty_warning";
    pub const CATALOG_EXPORTED: &str = "catalog.exported";
    pub const CATALOG_RESET: &str = "catalog.reset";
    pub const CATALOG_UNCHANGED: &str = "catalog.unchanged";
    pub const PROMPT_FILE_PATH: &str = "prompt.file_path";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_TOP_N: &str = "settings.prompt_top_n";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_DEMAND: &str = "report.demand";
    pub const REPORT_WELL_DEPTH: &str = "report.well_depth";
    pub const REPORT_TANK_HEIGHT: &str = "report.tank_height";
    pub const REPORT_PIPE_DISTANCE: &str = "report.pipe_distance";
    pub const REPORT_HEAD_LOSS: &str = "report.head_loss";
    pub const REPORT_AMT: &str = "report.amt";
    pub const REPORT_HOURS: &str = "report.hours";
    pub const REPORT_FLOW: &str = "report.flow";
    pub const REPORT_FLOW_M3: &str = "report.flow_m3";
    pub const REPORT_POWER: &str = "report.power";
    pub const REPORT_POWER_DISABLED: &str = "report.power_disabled";
    pub const REPORT_TARGET: &str = "report.target";
    pub const REPORT_RECOMMENDED_HEADING: &str = "report.recommended_heading";
    pub const REPORT_RECOMMENDED: &str = "report.recommended";
    pub const REPORT_NONE: &str = "report.none";
    pub const REPORT_NOT_ENOUGH_DATA: &str = "report.not_enough_data";
    pub const REPORT_TOP_HEADING: &str = "report.top_heading";
    pub const REPORT_OPTION: &str = "report.option";

    pub const TABLE_HEADER: &str = "table.header";
    pub const TABLE_MEETS: &str = "table.meets";
    pub const TABLE_FAILS: &str = "table.fails";

    pub const WARNINGS_HEADING: &str = "warnings.heading";
    pub const WARN_HOURS_CLAMPED: &str = "warnings.hours_clamped";
    pub const WARN_EFFICIENCY_CLAMPED: &str = "warnings.efficiency_clamped";
    pub const WARN_FLOW_MARGIN_CLAMPED: &str = "warnings.flow_margin_clamped";
    pub const WARN_HEAD_MARGIN_CLAMPED: &str = "warnings.head_margin_clamped";
    pub const WARN_ZERO_AMT: &str = "warnings.zero_amt";
    pub const WARN_EMPTY_CATALOG: &str = "warnings.empty_catalog";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
    Pt,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else if c.starts_with("pt") {
            Language::Pt
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Pt => "pt-br",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드에 따라 내장 문자열만 쓰는 번역기를 생성한다.
    pub fn new(lang_code: &str) -> Self {
        let lang = Language::from_code(lang_code);
        Self {
            lang,
            overrides: built_in_pack(lang.as_code()),
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 내장 영어/한국어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En | Language::Pt => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }

    /// `{name}` 형태의 자리표시자를 값으로 채운 번역을 만든다.
    pub fn tf(&self, key: &str, args: &[(&str, &dyn Display)]) -> String {
        let mut text = self.t(key).to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{name}}}"), &value.to_string());
        }
        text
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        "pt" | "pt-br" | "pt-pt" => Some("pt-br".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        other if other.starts_with("pt") => Some("pt-br".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en-us".into()),
        "pt" => Some("pt-br".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|lang| normalize_locale_string(&lang))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [섹션] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., pt-br)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., pt)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "pt-br" | "pt" => parse_toml_to_map(include_str!("../locales/pt-br.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        KEEP_CURRENT_HINT => "(엔터 = 현재 값 유지)",
        MAIN_MENU_TITLE => "\n=== 태양광 양수 펌프 선정 ===",
        MAIN_MENU_SIZING => "1) 펌프 사이징",
        MAIN_MENU_CATALOG => "2) 펌프 카탈로그",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION => "잘못된 선택입니다.",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        SIZING_HEADING => "\n-- 펌프 사이징 --",
        SIZING_DEMAND_SECTION => "[물 수요]",
        SIZING_SITE_SECTION => "[현장 형상]",
        SIZING_PUMPING_SECTION => "[양수 조건]",
        SIZING_SELECTION_SECTION => "[펌프 선정]",
        PROMPT_PEOPLE => "사람 수",
        PROMPT_CATTLE => "소(두)",
        PROMPT_PIGS => "돼지(두)",
        PROMPT_GARDENS => "텃밭 수",
        PROMPT_PASTURE => "목초지 [ha]",
        PROMPT_WELL_DEPTH => "우물 깊이 [m]",
        PROMPT_TANK_HEIGHT => "저수조 높이 [m]",
        PROMPT_PIPE_DISTANCE => "관로 길이 [m]",
        PROMPT_PUMPING_HOURS => "하루 양수 시간 [h]",
        PROMPT_EFFICIENCY => "펌프 효율 (0~1)",
        PROMPT_POWER_ENABLED => "전력 추정 사용 (y/n)",
        PROMPT_FLOW_MARGIN => "유량 여유율 (≥1.0)",
        PROMPT_HEAD_MARGIN => "양정 여유율 (≥1.0)",
        PROMPT_TYPE_FILTER => "펌프 종류 필터 (정확히 일치, '-' = 해제)",
        PROMPT_VOLTAGE_FILTER => "전압 필터 (부분 일치, '-' = 해제)",
        CATALOG_HEADING => "\n-- 펌프 카탈로그 --",
        CATALOG_OPTIONS => "1) 목록  2) JSON 파일 가져오기  3) JSON 파일 내보내기  4) 예제 카탈로그로 초기화",
        CATALOG_LIST_HEADER => "#   이름                     종류        전압     전력[W]   Qmax[L/h]  Hmax[m]  곡선",
        CATALOG_IS_EMPTY => "카탈로그가 비어 있습니다.",
        CATALOG_IMPORTED => "카탈로그 적용 완료: 펌프 {accepted}개 (제외 {dropped}개).",
        CATALOG_EMPTY_WARNING => "카탈로그를 적용했지만 유효한 펌프가 없습니다 (maxFlow/maxHead 확인).",
        CATALOG_EXPORTED => "카탈로그를 {path} 에 저장했습니다.",
        CATALOG_RESET => "예제 카탈로그로 초기화했습니다.",
        CATALOG_UNCHANGED => "기존 카탈로그를 유지합니다.",
        PROMPT_FILE_PATH => "파일 경로: ",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_PROMPT_LANGUAGE => "언어 (ko/en/pt-br/auto)",
        SETTINGS_PROMPT_TOP_N => "추천 표 후보 수",
        SETTINGS_SAVED => "설정을 저장했습니다. 언어 변경은 다음 실행부터 적용됩니다.",
        REPORT_TITLE => "=== 양수 설비 사이징 요약 ===",
        REPORT_DEMAND => "총 수요: {lpd} L/일 ({m3d} m³/일)",
        REPORT_WELL_DEPTH => "우물 깊이: {m} m",
        REPORT_TANK_HEIGHT => "저수조 높이: {m} m",
        REPORT_PIPE_DISTANCE => "관로 길이: {m} m ({km} km)",
        REPORT_HEAD_LOSS => "관로 손실({pct}%): {m} m",
        REPORT_AMT => "전양정(AMT): {m} m",
        REPORT_HOURS => "양수 시간: {h} h/일",
        REPORT_FLOW => "필요 유량: {lh} L/h ({lmin} L/min)",
        REPORT_FLOW_M3 => "체적 유량: {m3h} m³/h ({m3d} m³/일)",
        REPORT_POWER => "수력 동력: {hyd} W, 전기 동력: {ele} W (효율 {eff})",
        REPORT_POWER_DISABLED => "전력 추정: 사용 안 함",
        REPORT_TARGET => "여유율 적용 목표: {flow} L/h @ {head} m (유량 ×{fm}, 양정 ×{hm})",
        REPORT_RECOMMENDED_HEADING => "추천 펌프:",
        REPORT_RECOMMENDED => "- {name} ({type}, {voltage}) - 전력: {power} W, 목표 유량에서 양정 {head} m",
        REPORT_NONE => "- 현재 목표를 만족하는 펌프가 없습니다.",
        REPORT_NOT_ENOUGH_DATA => "- 목표 유량 또는 양정이 0이라 추천할 수 없습니다.",
        REPORT_TOP_HEADING => "검토한 상위 {n}개:",
        REPORT_OPTION => "{rank}. {name} ({type}, {voltage}) - Qmax: {qmax} L/h, Hmax: {hmax} m",
        TABLE_HEADER => "#   이름                     종류        전압     전력[W]   H@Q[m]   여유[m]   상태",
        TABLE_MEETS => "충족",
        TABLE_FAILS => "미충족",
        WARNINGS_HEADING => "주의:",
        WARN_HOURS_CLAMPED => "양수 시간을 안전 최소값 {applied} h/일로 조정했습니다 (입력 {requested}).",
        WARN_EFFICIENCY_CLAMPED => "펌프 효율을 {requested} 에서 {applied} 로 조정했습니다.",
        WARN_FLOW_MARGIN_CLAMPED => "유량 여유율을 {requested} 에서 {applied} 로 조정했습니다.",
        WARN_HEAD_MARGIN_CLAMPED => "양정 여유율을 {requested} 에서 {applied} 로 조정했습니다.",
        WARN_ZERO_AMT => "AMT가 0 m입니다. 우물 깊이, 저수조 높이, 관로 길이를 확인하세요.",
        WARN_EMPTY_CATALOG => "카탈로그에 유효한 펌프가 없습니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        KEEP_CURRENT_HINT => "(Enter = keep current value)",
        MAIN_MENU_TITLE => "\n=== Solar Pump Sizer ===",
        MAIN_MENU_SIZING => "1) Pump sizing",
        MAIN_MENU_CATALOG => "2) Pump catalog",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION => "Invalid selection.",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        SIZING_HEADING => "\n-- Pump Sizing --",
        SIZING_DEMAND_SECTION => "[Water demand]",
        SIZING_SITE_SECTION => "[Site geometry]",
        SIZING_PUMPING_SECTION => "[Pumping conditions]",
        SIZING_SELECTION_SECTION => "[Pump selection]",
        PROMPT_PEOPLE => "People",
        PROMPT_CATTLE => "Cattle (head)",
        PROMPT_PIGS => "Pigs (head)",
        PROMPT_GARDENS => "Vegetable gardens",
        PROMPT_PASTURE => "Pasture [ha]",
        PROMPT_WELL_DEPTH => "Well depth [m]",
        PROMPT_TANK_HEIGHT => "Tank height [m]",
        PROMPT_PIPE_DISTANCE => "Pipe distance [m]",
        PROMPT_PUMPING_HOURS => "Pumping hours per day [h]",
        PROMPT_EFFICIENCY => "Pump efficiency (0-1)",
        PROMPT_POWER_ENABLED => "Estimate power (y/n)",
        PROMPT_FLOW_MARGIN => "Flow margin (>=1.0)",
        PROMPT_HEAD_MARGIN => "Head margin (>=1.0)",
        PROMPT_TYPE_FILTER => "Pump type filter (exact, '-' = clear)",
        PROMPT_VOLTAGE_FILTER => "Voltage filter (substring, '-' = clear)",
        CATALOG_HEADING => "\n-- Pump Catalog --",
        CATALOG_OPTIONS => "1) List  2) Import JSON file  3) Export JSON file  4) Reset to sample catalog",
        CATALOG_LIST_HEADER => "#   Name                     Type        Voltage  Power[W]  Qmax[L/h]  Hmax[m]  Curve",
        CATALOG_IS_EMPTY => "The catalog is empty.",
        CATALOG_IMPORTED => "Catalog applied: {accepted} pumps ({dropped} dropped).",
        CATALOG_EMPTY_WARNING => "Catalog applied, but no valid pump was found (check maxFlow/maxHead).",
        CATALOG_EXPORTED => "Catalog exported to {path}.",
        CATALOG_RESET => "Catalog reset to the built-in sample.",
        CATALOG_UNCHANGED => "The previous catalog is kept.",
        PROMPT_FILE_PATH => "File path: ",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_PROMPT_LANGUAGE => "Language (ko/en/pt-br/auto)",
        SETTINGS_PROMPT_TOP_N => "Candidates shown in the ranking table",
        SETTINGS_SAVED => "Settings saved. Language changes apply on next start.",
        REPORT_TITLE => "=== PUMPING PROJECT SUMMARY ===",
        REPORT_DEMAND => "Total demand: {lpd} L/day ({m3d} m³/day)",
        REPORT_WELL_DEPTH => "Well depth: {m} m",
        REPORT_TANK_HEIGHT => "Tank height: {m} m",
        REPORT_PIPE_DISTANCE => "Pipe distance: {m} m ({km} km)",
        REPORT_HEAD_LOSS => "Head loss ({pct}%): {m} m",
        REPORT_AMT => "Total head (AMT): {m} m",
        REPORT_HOURS => "Pumping hours: {h} h/day",
        REPORT_FLOW => "Required flow: {lh} L/h ({lmin} L/min)",
        REPORT_FLOW_M3 => "Flow in m³: {m3h} m³/h ({m3d} m³/day)",
        REPORT_POWER => "Hydraulic power: {hyd} W, electrical power: {ele} W (efficiency {eff})",
        REPORT_POWER_DISABLED => "Power estimate: disabled",
        REPORT_TARGET => "Target with margins: {flow} L/h @ {head} m (flow ×{fm}, head ×{hm})",
        REPORT_RECOMMENDED_HEADING => "Recommended pump:",
        REPORT_RECOMMENDED => "- {name} ({type}, {voltage}) - Power: {power} W, head at target flow {head} m",
        REPORT_NONE => "- No pump meets the current targets.",
        REPORT_NOT_ENOUGH_DATA => "- Not enough data to recommend a pump (target flow or head is zero).",
        REPORT_TOP_HEADING => "Top {n} options considered:",
        REPORT_OPTION => "{rank}. {name} ({type}, {voltage}) - Qmax: {qmax} L/h, Hmax: {hmax} m",
        TABLE_HEADER => "#   Name                     Type        Voltage  Power[W]  H@Q[m]   Margin[m] Status",
        TABLE_MEETS => "Meets target",
        TABLE_FAILS => "Does not meet",
        WARNINGS_HEADING => "Warnings:",
        WARN_HOURS_CLAMPED => "Pumping hours adjusted to the safety minimum of {applied} h/day (entered {requested}).",
        WARN_EFFICIENCY_CLAMPED => "Pump efficiency adjusted from {requested} to {applied}.",
        WARN_FLOW_MARGIN_CLAMPED => "Flow margin adjusted from {requested} to {applied}.",
        WARN_HEAD_MARGIN_CLAMPED => "Head margin adjusted from {requested} to {applied}.",
        WARN_ZERO_AMT => "AMT is 0 m. Check well depth, tank height and pipe distance.",
        WARN_EMPTY_CATALOG => "There are no valid pumps in the catalog.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_and_korean_built_ins() {
        let en = Translator::new("en");
        assert_eq!(en.t(keys::TABLE_MEETS), "Meets target");
        let ko = Translator::new("ko");
        assert_eq!(ko.t(keys::TABLE_MEETS), "충족");
    }

    #[test]
    fn portuguese_pack_is_built_in() {
        let pt = Translator::new("pt-br");
        assert_eq!(pt.language(), Language::Pt);
        assert_eq!(pt.t(keys::TABLE_MEETS), "Atende meta");
    }

    #[test]
    fn placeholders_are_filled() {
        let en = Translator::new("en");
        let text = en.tf(keys::CATALOG_IMPORTED, &[("accepted", &3), ("dropped", &1)]);
        assert_eq!(text, "Catalog applied: 3 pumps (1 dropped).");
    }

    #[test]
    fn language_resolution_prefers_cli_then_config() {
        assert_eq!(resolve_language("pt", Some("en")), "pt-br");
        assert_eq!(resolve_language("auto", Some("ko-KR")), "ko");
    }

    #[test]
    fn nested_toml_pack_is_flattened() {
        let map = parse_toml_to_map("[report]\ntitle = \"T\"\n").unwrap();
        assert_eq!(map.get("report.title").map(String::as_str), Some("T"));
    }
}
