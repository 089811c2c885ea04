// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化日志
///
/// 默认级别为 `info,jobscrape=debug`，可通过 `RUST_LOG` 覆盖。
/// 设置 `JOBSCRAPE_LOG_FORMAT=json` 时输出 JSON 格式日志。
pub fn init_telemetry() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,jobscrape=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if std::env::var("JOBSCRAPE_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
