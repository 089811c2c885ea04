// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 应用程序配置设置
///
/// 包含目标站点规则和HTTP客户端配置。输出文件路径由命令行参数决定。
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 抓取规则配置
    pub scraper: ScraperSettings,
    /// HTTP客户端配置
    pub http: HttpSettings,
}

/// 抓取规则配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSettings {
    /// 站点源，用于补全以 `/` 开头的相对链接
    pub site_origin: String,
    /// 职位详情链接中必须包含的路径片段
    pub job_path_marker: String,
    /// 以该后缀结尾的链接会被排除
    pub excluded_suffix: String,
    /// 两次详情页请求之间的间隔（毫秒）
    pub request_delay_ms: u64,
}

impl ScraperSettings {
    /// 请求间隔
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            site_origin: "https://academicjobsonline.org".to_string(),
            job_path_marker: "/ajo/jobs/".to_string(),
            excluded_suffix: "/apply".to_string(),
            request_delay_ms: 1000,
        }
    }
}

/// HTTP客户端配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// User-Agent 请求头
    pub user_agent: String,
    /// 单次请求超时时间（秒），未设置时使用客户端默认值
    pub timeout_secs: Option<u64>,
}

impl HttpSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

fn default_user_agent() -> String {
    format!("jobscrape/{}", env!("CARGO_PKG_VERSION"))
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载内置默认值、`config/default`、`config/{APP_ENVIRONMENT}`
    /// 以及 `JOBSCRAPE__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let scraper = ScraperSettings::default();
        let builder = Config::builder()
            // Scraper defaults target academicjobsonline.org
            .set_default("scraper.site_origin", scraper.site_origin)?
            .set_default("scraper.job_path_marker", scraper.job_path_marker)?
            .set_default("scraper.excluded_suffix", scraper.excluded_suffix)?
            .set_default("scraper.request_delay_ms", scraper.request_delay_ms as i64)?
            .set_default("http.user_agent", default_user_agent())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("JOBSCRAPE").separator("__"));

        builder.build()?.try_deserialize()
    }
}
