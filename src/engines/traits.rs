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

use async_trait::async_trait;
use thiserror::Error;

/// 页面获取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求失败（连接、超时、读取响应体等）
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// 服务器返回非成功状态码
    #[error("{status} error for url: {url}")]
    Status { url: String, status: u16 },
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

impl FetchError {
    /// 返回导致失败的HTTP状态码（如果有）
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Request(e) => e.status().map(|s| s.as_u16()),
            FetchError::Other(_) => None,
        }
    }
}

/// 页面获取特质
///
/// 获取URL对应的原始标记文本；非成功状态码视为错误
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 获取页面内容
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
