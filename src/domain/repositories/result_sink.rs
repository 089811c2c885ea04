// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::job::{FilteredJob, JobRecord};

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// CSV 序列化错误
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// JSON 序列化错误
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 结果写入特质
///
/// 持久化流水线三个阶段的输出。每次写入都完整覆盖目标，失败即返回错误。
#[async_trait]
pub trait ResultSink: Send + Sync {
    /// 写入职位链接列表
    async fn write_links(&self, links: &[String]) -> Result<(), StorageError>;

    /// 写入原始职位记录
    async fn write_records(&self, records: &[JobRecord]) -> Result<(), StorageError>;

    /// 写入筛选结果
    async fn write_filtered(&self, jobs: &[FilteredJob]) -> Result<(), StorageError>;
}
