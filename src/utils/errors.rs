// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

use crate::domain::models::scrape_config::ScrapeConfigError;
use crate::domain::repositories::result_sink::StorageError;
use crate::engines::traits::FetchError;

/// 流水线错误类型
///
/// 只有致命错误会以该类型返回；单个详情页的失败在流水线内部被记录并跳过
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{0}")]
    Config(#[from] ScrapeConfigError),

    #[error("Failed to fetch listing page: {0}")]
    ListingFetch(#[source] FetchError),

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Failed to write results: {0}")]
    Storage(#[from] StorageError),
}
