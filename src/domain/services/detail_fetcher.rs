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

use crate::domain::models::job::JobRecord;
use crate::domain::services::detail_extractor::DetailExtractor;
use crate::domain::services::progress::ProgressObserver;
use crate::engines::traits::PageFetcher;
use std::sync::Arc;
use std::time::Duration;

/// 详情抓取器
///
/// 按顺序逐个获取职位详情页并解析为 [`JobRecord`]。
/// 同一时间只有一个请求，每次请求之后固定等待 `delay`。
pub struct DetailFetcher {
    /// 页面获取引擎
    fetcher: Arc<dyn PageFetcher>,
    /// 详情页解析器
    extractor: DetailExtractor,
    /// 每次请求后的等待时间
    delay: Duration,
    /// 进度观察者
    observer: Arc<dyn ProgressObserver>,
}

impl DetailFetcher {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        extractor: DetailExtractor,
        delay: Duration,
        observer: Arc<dyn ProgressObserver>,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            delay,
            observer,
        }
    }

    /// 抓取所有详情页
    ///
    /// 单个URL获取失败只会被记录并跳过，不会中断其余URL的处理
    ///
    /// # 参数
    ///
    /// * `urls` - 职位详情URL列表
    ///
    /// # 返回值
    ///
    /// 成功获取的职位记录，顺序与输入一致
    pub async fn fetch_all(&self, urls: &[String]) -> Vec<JobRecord> {
        let total = urls.len();
        let mut records = Vec::with_capacity(total);

        for (i, url) in urls.iter().enumerate() {
            let index = i + 1;
            self.observer.job_started(index, total, url);

            match self.fetcher.fetch(url).await {
                Ok(html) => {
                    records.push(self.extractor.extract(&html, url));
                    self.observer.job_succeeded(index, total);
                }
                Err(e) => self.observer.job_failed(index, total, url, &e),
            }

            // Pause after every attempt, failed ones included
            tokio::time::sleep(self.delay).await;
        }

        records
    }
}
