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
use crate::domain::models::scrape_config::ScrapeConfigError;
use crate::utils::errors::PipelineError;
use crate::utils::url_utils;
use scraper::{Html, Selector};
use std::collections::HashSet;

/// 链接提取器
///
/// 从列表页中找出职位详情链接
pub struct LinkExtractor {
    /// 规范化后的站点源
    origin: String,
    /// 详情链接必须包含的路径片段
    marker: String,
    /// 需要排除的链接后缀
    excluded_suffix: String,
    anchor_selector: Selector,
}

impl LinkExtractor {
    /// 创建新的链接提取器
    ///
    /// # 参数
    ///
    /// * `settings` - 抓取规则配置
    ///
    /// # 返回值
    ///
    /// * `Ok(LinkExtractor)` - 创建成功
    /// * `Err(PipelineError)` - 站点源不合法
    pub fn new(settings: &ScraperSettings) -> Result<Self, PipelineError> {
        let origin = url_utils::site_origin(&settings.site_origin).map_err(|e| {
            ScrapeConfigError::InvalidOrigin {
                origin: settings.site_origin.clone(),
                reason: e.to_string(),
            }
        })?;
        let anchor_selector = Selector::parse("a[href]")
            .map_err(|e| PipelineError::Selector(format!("{:?}", e)))?;

        Ok(Self {
            origin,
            marker: settings.job_path_marker.clone(),
            excluded_suffix: settings.excluded_suffix.clone(),
            anchor_selector,
        })
    }

    /// 从HTML内容中提取职位详情链接
    ///
    /// 保留包含路径片段的链接，相对路径补全为绝对URL，
    /// 去掉以排除后缀结尾的链接，并按首次出现的顺序去重
    ///
    /// # 参数
    ///
    /// * `html_content` - 列表页HTML内容
    ///
    /// # 返回值
    ///
    /// 按出现顺序排列的绝对URL列表，没有匹配时为空
    pub fn extract(&self, html_content: &str) -> Vec<String> {
        let document = Html::parse_document(html_content);
        let mut seen = HashSet::new();
        let mut links = Vec::new();

        for element in document.select(&self.anchor_selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            if !href.contains(&self.marker) {
                continue;
            }

            let full_url = url_utils::absolutize(&self.origin, href);
            if !self.excluded_suffix.is_empty() && full_url.ends_with(&self.excluded_suffix) {
                continue;
            }
            if seen.insert(full_url.clone()) {
                links.push(full_url);
            }
        }

        links
    }
}
