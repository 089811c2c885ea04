// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;
use thiserror::Error;
use validator::Validate;

/// 抓取配置错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScrapeConfigError {
    /// 关键词列表为空
    #[error("Keywords list cannot be empty")]
    EmptyKeywords,
    /// 站点源不是合法的 http(s) 源
    #[error("Invalid site origin '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },
}

/// 三个输出文件的路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// 职位链接 CSV
    pub links_file: PathBuf,
    /// 职位详情 JSON
    pub data_file: PathBuf,
    /// 筛选结果 CSV
    pub results_file: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            links_file: PathBuf::from("job_links.csv"),
            data_file: PathBuf::from("jobs_data.json"),
            results_file: PathBuf::from("relevant_jobs.csv"),
        }
    }
}

/// 抓取配置
///
/// 一次运行期间不可变。关键词列表不能为空，构造时即校验，
/// 因此校验失败发生在任何网络请求之前。
#[derive(Debug, Clone, Validate)]
pub struct ScrapeConfig {
    #[validate(length(min = 1, message = "Keywords list cannot be empty"))]
    keywords: Vec<String>,
    outputs: OutputPaths,
}

impl ScrapeConfig {
    /// 创建抓取配置
    ///
    /// # 参数
    ///
    /// * `keywords` - 用于筛选职位描述的关键词（不区分大小写）
    /// * `outputs` - 输出文件路径
    ///
    /// # 返回值
    ///
    /// * `Ok(ScrapeConfig)` - 校验通过的配置
    /// * `Err(ScrapeConfigError::EmptyKeywords)` - 关键词列表为空
    pub fn new(keywords: Vec<String>, outputs: OutputPaths) -> Result<Self, ScrapeConfigError> {
        let config = Self { keywords, outputs };
        config
            .validate()
            .map_err(|_| ScrapeConfigError::EmptyKeywords)?;
        Ok(config)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn outputs(&self) -> &OutputPaths {
        &self.outputs
    }
}
