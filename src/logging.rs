use tracing_subscriber::{fmt, EnvFilter};

/// 로그 출력을 초기화한다.
///
/// `RUST_LOG`가 있으면 그대로 따르고, 없으면 `warn`(`verbose`이면 `debug`)을 쓴다.
/// 대화형 프롬프트와 섞이지 않도록 stderr로 내보낸다.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 테스트용 초기화. 여러 번 호출해도 된다.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
