// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::domain::models::job::{FilteredJob, JobRecord};
use crate::domain::models::scrape_config::OutputPaths;
use crate::domain::repositories::result_sink::{ResultSink, StorageError};

/// 链接列表 CSV 的表头
const LINKS_HEADER: &str = "Job Link";

/// 本地文件结果写入器
///
/// - 链接列表：单列 CSV，表头 `Job Link`
/// - 原始记录：两空格缩进的 JSON 数组，非 ASCII 字符不转义
/// - 筛选结果：CSV，表头 `title,company,link`
pub struct FileResultWriter {
    outputs: OutputPaths,
}

impl FileResultWriter {
    pub fn new(outputs: OutputPaths) -> Self {
        Self { outputs }
    }

    /// 覆盖写入文件
    async fn save(&self, path: &Path, data: &[u8]) -> Result<(), StorageError> {
        let mut file = fs::File::create(path).await?;
        file.write_all(data).await?;
        file.flush().await?;

        debug!(path = %path.display(), bytes = data.len(), "Wrote output file");
        Ok(())
    }
}

fn csv_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new())
}

fn into_bytes(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, StorageError> {
    writer
        .into_inner()
        .map_err(|e| StorageError::Io(std::io::Error::new(e.error().kind(), e.to_string())))
}

/// 将链接列表编码为 CSV
pub fn encode_links(links: &[String]) -> Result<Vec<u8>, StorageError> {
    let mut writer = csv_writer();
    writer.write_record([LINKS_HEADER])?;
    for link in links {
        writer.write_record([link])?;
    }
    into_bytes(writer)
}

/// 将筛选结果编码为 CSV，表头由字段名生成
pub fn encode_filtered(jobs: &[FilteredJob]) -> Result<Vec<u8>, StorageError> {
    let mut writer = csv_writer();
    if jobs.is_empty() {
        // serialize() only emits the header alongside the first row
        writer.write_record(["title", "company", "link"])?;
    }
    for job in jobs {
        writer.serialize(job)?;
    }
    into_bytes(writer)
}

/// 将原始记录编码为 JSON
pub fn encode_records(records: &[JobRecord]) -> Result<Vec<u8>, StorageError> {
    Ok(serde_json::to_vec_pretty(records)?)
}

#[async_trait]
impl ResultSink for FileResultWriter {
    async fn write_links(&self, links: &[String]) -> Result<(), StorageError> {
        let data = encode_links(links)?;
        self.save(&self.outputs.links_file, &data).await
    }

    async fn write_records(&self, records: &[JobRecord]) -> Result<(), StorageError> {
        let data = encode_records(records)?;
        self.save(&self.outputs.data_file, &data).await
    }

    async fn write_filtered(&self, jobs: &[FilteredJob]) -> Result<(), StorageError> {
        let data = encode_filtered(jobs)?;
        self.save(&self.outputs.results_file, &data).await
    }
}
