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

use crate::config::settings::HttpSettings;
use crate::engines::traits::{FetchError, PageFetcher};
use async_trait::async_trait;
use std::time::Instant;
use tracing::debug;

/// 抓取引擎
///
/// 基于reqwest实现的HTTP页面获取引擎，整个运行期间复用同一个客户端
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 根据HTTP配置创建引擎
    ///
    /// # 参数
    ///
    /// * `settings` - HTTP客户端配置
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestEngine)` - 创建成功
    /// * `Err(FetchError)` - 客户端构建失败（例如TLS后端初始化失败）
    pub fn new(settings: &HttpSettings) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .cookie_store(true);

        // No timeout unless configured, matching the client default
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl PageFetcher for ReqwestEngine {
    /// 执行HTTP获取
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 响应正文
    /// * `Err(FetchError)` - 传输失败或非2xx状态码
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let start = Instant::now();
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content = response.text().await?;
        debug!(
            url,
            status = status.as_u16(),
            bytes = content.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Fetched page"
        );

        Ok(content)
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}
