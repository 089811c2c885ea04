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

use clap::Parser;
use jobscrape::config::settings::Settings;
use jobscrape::domain::models::scrape_config::{OutputPaths, ScrapeConfig};
use jobscrape::domain::services::pipeline::JobPipeline;
use jobscrape::domain::services::progress::TracingProgress;
use jobscrape::engines::reqwest_engine::ReqwestEngine;
use jobscrape::infrastructure::storage::FileResultWriter;
use jobscrape::utils::telemetry;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

/// 抓取并筛选学术职位列表
#[derive(Parser, Debug)]
#[command(name = "jobscrape", version)]
#[command(about = "Scrape and filter academic job listings.")]
struct Cli {
    /// Mother URL to scrape job listings from
    url: String,

    /// Keywords to filter jobs (case-insensitive)
    #[arg(required = true, num_args = 1..)]
    keywords: Vec<String>,

    /// Path to save job links CSV
    #[arg(long, default_value = "job_links.csv")]
    links_file: PathBuf,

    /// Path to save job details JSON
    #[arg(long, default_value = "jobs_data.json")]
    data_file: PathBuf,

    /// Path to save filtered results CSV
    #[arg(long, default_value = "relevant_jobs.csv")]
    results_file: PathBuf,
}

/// 主函数
///
/// 单线程运行时上顺序执行一次抓取；任何未处理的错误打印为 `Error: ...` 并以 1 退出
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    telemetry::init_telemetry();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Validate keywords before touching the network
    let outputs = OutputPaths {
        links_file: cli.links_file,
        data_file: cli.data_file,
        results_file: cli.results_file,
    };
    let config = ScrapeConfig::new(cli.keywords, outputs.clone())?;

    let settings = Settings::new()?;
    info!(
        site_origin = %settings.scraper.site_origin,
        delay_ms = settings.scraper.request_delay_ms,
        "Configuration loaded"
    );

    let engine = Arc::new(ReqwestEngine::new(&settings.http)?);
    let sink = Arc::new(FileResultWriter::new(outputs));
    let pipeline = JobPipeline::new(
        config,
        &settings.scraper,
        engine,
        sink,
        Arc::new(TracingProgress),
    )?;

    pipeline.run(&cli.url).await?;
    Ok(())
}
