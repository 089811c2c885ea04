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

use crate::config::settings::ScraperSettings;
use crate::domain::models::scrape_config::ScrapeConfig;
use crate::domain::repositories::result_sink::ResultSink;
use crate::domain::services::detail_extractor::DetailExtractor;
use crate::domain::services::detail_fetcher::DetailFetcher;
use crate::domain::services::keyword_filter::KeywordFilter;
use crate::domain::services::link_extractor::LinkExtractor;
use crate::domain::services::progress::{ProgressObserver, RunSummary};
use crate::engines::traits::PageFetcher;
use crate::utils::errors::PipelineError;
use std::sync::Arc;

/// 职位抓取流水线
///
/// 列表页 -> 链接提取 -> 详情抓取 -> 关键词筛选，
/// 每个阶段的输出在下一阶段开始前写入结果存储
pub struct JobPipeline {
    /// 抓取配置
    config: ScrapeConfig,
    /// 页面获取引擎
    fetcher: Arc<dyn PageFetcher>,
    /// 结果存储
    sink: Arc<dyn ResultSink>,
    /// 进度观察者
    observer: Arc<dyn ProgressObserver>,
    link_extractor: LinkExtractor,
    detail_fetcher: DetailFetcher,
    keyword_filter: KeywordFilter,
}

impl JobPipeline {
    /// 创建新的流水线
    ///
    /// # 参数
    ///
    /// * `config` - 已校验的抓取配置
    /// * `settings` - 站点规则与请求间隔
    /// * `fetcher` - 页面获取引擎
    /// * `sink` - 结果存储
    /// * `observer` - 进度观察者
    ///
    /// # 返回值
    ///
    /// * `Ok(JobPipeline)` - 创建成功
    /// * `Err(PipelineError)` - 站点配置不合法
    pub fn new(
        config: ScrapeConfig,
        settings: &ScraperSettings,
        fetcher: Arc<dyn PageFetcher>,
        sink: Arc<dyn ResultSink>,
        observer: Arc<dyn ProgressObserver>,
    ) -> Result<Self, PipelineError> {
        let link_extractor = LinkExtractor::new(settings)?;
        let detail_fetcher = DetailFetcher::new(
            fetcher.clone(),
            DetailExtractor::new()?,
            settings.request_delay(),
            observer.clone(),
        );
        let keyword_filter = KeywordFilter::new(config.keywords());

        Ok(Self {
            config,
            fetcher,
            sink,
            observer,
            link_extractor,
            detail_fetcher,
            keyword_filter,
        })
    }

    /// 执行一次完整的抓取
    ///
    /// 列表页获取失败和任何写入失败都会终止运行；
    /// 单个详情页失败只会跳过该职位
    ///
    /// # 参数
    ///
    /// * `listing_url` - 列表页URL
    ///
    /// # 返回值
    ///
    /// * `Ok(RunSummary)` - 运行汇总
    /// * `Err(PipelineError)` - 致命错误
    pub async fn run(&self, listing_url: &str) -> Result<RunSummary, PipelineError> {
        self.observer.run_started(listing_url);

        let listing = self
            .fetcher
            .fetch(listing_url)
            .await
            .map_err(PipelineError::ListingFetch)?;

        let links = self.link_extractor.extract(&listing);
        self.observer.links_found(links.len());
        self.sink.write_links(&links).await?;

        let records = self.detail_fetcher.fetch_all(&links).await;
        self.sink.write_records(&records).await?;

        let relevant = self.keyword_filter.filter(&records);
        self.sink.write_filtered(&relevant).await?;

        let summary = RunSummary {
            links: links.len(),
            records: records.len(),
            relevant: relevant.len(),
            results_file: self.config.outputs().results_file.clone(),
        };
        self.observer.finished(&summary);

        Ok(summary)
    }
}
