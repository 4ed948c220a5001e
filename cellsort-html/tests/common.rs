use std::sync::OnceLock;

use cellsort_common::observability::{LogConfig, LogFormat};

static INIT_PATH: OnceLock<std::path::PathBuf> = OnceLock::new();

pub fn init_test_tracing() {
    let _ = INIT_PATH.get_or_init(|| {
        let format = std::env::var("CELLSORT_LOG_FORMAT")
            .ok()
            .and_then(|raw| raw.parse::<LogFormat>().ok())
            .unwrap_or(LogFormat::Text);

        let config = LogConfig {
            app_name: "cellsort-tests",
            log_dir: Some(std::env::temp_dir().join("cellsort-tests")),
            emit_stderr: true,
            format,
            default_filter: "trace",
        };

        cellsort_common::observability::init_logging(config).unwrap_or_default()
    });
}
