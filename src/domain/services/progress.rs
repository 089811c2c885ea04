// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::FetchError;
use std::path::PathBuf;
use tracing::{info, warn};

/// 一次运行的汇总
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// 提取到的职位链接数
    pub links: usize,
    /// 成功抓取的职位记录数
    pub records: usize,
    /// 命中关键词的职位数
    pub relevant: usize,
    /// 筛选结果文件
    pub results_file: PathBuf,
}

/// 进度观察者特质
///
/// 流水线通过该特质汇报进度，自身不直接打印
pub trait ProgressObserver: Send + Sync {
    /// 开始抓取列表页
    fn run_started(&self, _listing_url: &str) {}

    /// 列表页中找到的职位链接数
    fn links_found(&self, _count: usize) {}

    /// 开始处理第 `index` 个职位（从1开始）
    fn job_started(&self, _index: usize, _total: usize, _url: &str) {}

    fn job_succeeded(&self, _index: usize, _total: usize) {}

    fn job_failed(&self, _index: usize, _total: usize, _url: &str, _error: &FetchError) {}

    fn finished(&self, _summary: &RunSummary) {}
}

/// 不做任何事的观察者
pub struct NoopProgress;

impl ProgressObserver for NoopProgress {}

/// 基于 tracing 的观察者
pub struct TracingProgress;

impl ProgressObserver for TracingProgress {
    fn run_started(&self, listing_url: &str) {
        info!(listing_url, "Starting job scraping");
    }

    fn links_found(&self, count: usize) {
        info!(count, "Found job links");
    }

    fn job_started(&self, index: usize, total: usize, url: &str) {
        info!("Processing job {}/{}: {}", index, total, url);
    }

    fn job_succeeded(&self, index: usize, total: usize) {
        info!("Successfully extracted details for job {}/{}", index, total);
    }

    fn job_failed(&self, index: usize, total: usize, url: &str, error: &FetchError) {
        warn!(
            status = error.status(),
            "Error processing job {}/{} ({}): {}", index, total, url, error
        );
    }

    fn finished(&self, summary: &RunSummary) {
        info!(
            "Found {} relevant jobs out of {} total jobs ({} links)",
            summary.relevant, summary.records, summary.links
        );
        info!("Results saved to: {}", summary.results_file.display());
    }
}
