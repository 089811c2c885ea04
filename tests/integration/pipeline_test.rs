// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{outputs_in, start_site, LISTING_PATH};
use jobscrape::config::settings::{HttpSettings, ScraperSettings};
use jobscrape::domain::models::job::JobRecord;
use jobscrape::domain::models::scrape_config::ScrapeConfig;
use jobscrape::domain::services::pipeline::JobPipeline;
use jobscrape::domain::services::progress::NoopProgress;
use jobscrape::engines::reqwest_engine::ReqwestEngine;
use jobscrape::infrastructure::storage::FileResultWriter;
use jobscrape::utils::errors::PipelineError;
use std::sync::Arc;

fn settings_for(server_uri: &str) -> ScraperSettings {
    ScraperSettings {
        site_origin: server_uri.to_string(),
        request_delay_ms: 0,
        ..ScraperSettings::default()
    }
}

fn build_pipeline(server_uri: &str, dir: &std::path::Path, keywords: &[&str]) -> JobPipeline {
    let outputs = outputs_in(dir);
    let config = ScrapeConfig::new(
        keywords.iter().map(|k| k.to_string()).collect(),
        outputs.clone(),
    )
    .unwrap();

    JobPipeline::new(
        config,
        &settings_for(server_uri),
        Arc::new(ReqwestEngine::new(&HttpSettings::default()).unwrap()),
        Arc::new(FileResultWriter::new(outputs)),
        Arc::new(NoopProgress),
    )
    .unwrap()
}

#[tokio::test]
async fn test_end_to_end_scrape_writes_three_files() {
    let server = start_site().await;
    let dir = tempfile::tempdir().unwrap();
    let pipeline = build_pipeline(&server.uri(), dir.path(), &["machine learning"]);

    let summary = pipeline
        .run(&format!("{}{}", server.uri(), LISTING_PATH))
        .await
        .unwrap();

    assert_eq!(summary.links, 3);
    assert_eq!(summary.records, 2);
    assert_eq!(summary.relevant, 1);

    let links = std::fs::read_to_string(dir.path().join("job_links.csv")).unwrap();
    let lines: Vec<_> = links.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Job Link".to_string(),
            format!("{}/ajo/jobs/100", server.uri()),
            format!("{}/ajo/jobs/200", server.uri()),
            format!("{}/ajo/jobs/404", server.uri()),
        ]
    );

    let data = std::fs::read_to_string(dir.path().join("jobs_data.json")).unwrap();
    assert!(data.contains("Universität Zürich"));
    let records: Vec<JobRecord> = serde_json::from_str(&data).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Assistant Professor");
    assert_eq!(records[0].description, "Research in Machine Learning and robotics.");
    assert_eq!(
        records[0].job_link,
        "https://academicjobsonline.org/ajo/jobs/100"
    );
    // No description section and no canonical link
    assert_eq!(records[1].institute, "University of Oxford");
    assert_eq!(records[1].description, "");
    assert_eq!(records[1].job_link, format!("{}/ajo/jobs/200", server.uri()));

    let results = std::fs::read_to_string(dir.path().join("relevant_jobs.csv")).unwrap();
    assert_eq!(
        results,
        "title,company,link\r\nAssistant Professor,Universität Zürich,https://academicjobsonline.org/ajo/jobs/100\r\n"
    );
}

#[tokio::test]
async fn test_no_relevant_jobs_still_writes_raw_records() {
    let server = start_site().await;
    let dir = tempfile::tempdir().unwrap();
    let pipeline = build_pipeline(&server.uri(), dir.path(), &["quantum chemistry"]);

    let summary = pipeline
        .run(&format!("{}{}", server.uri(), LISTING_PATH))
        .await
        .unwrap();

    assert_eq!(summary.records, 2);
    assert_eq!(summary.relevant, 0);

    let data = std::fs::read_to_string(dir.path().join("jobs_data.json")).unwrap();
    let records: Vec<JobRecord> = serde_json::from_str(&data).unwrap();
    assert_eq!(records.len(), 2);

    let results = std::fs::read_to_string(dir.path().join("relevant_jobs.csv")).unwrap();
    assert_eq!(results, "title,company,link\r\n");
}

#[tokio::test]
async fn test_listing_error_status_aborts_before_writing() {
    let server = start_site().await;
    let dir = tempfile::tempdir().unwrap();
    let pipeline = build_pipeline(&server.uri(), dir.path(), &["machine learning"]);

    let result = pipeline
        .run(&format!("{}/ajo/missing_listing", server.uri()))
        .await;

    match result {
        Err(PipelineError::ListingFetch(e)) => assert_eq!(e.status(), Some(404)),
        other => panic!("unexpected result: {:?}", other.map(|s| s.links)),
    }
    assert!(!dir.path().join("job_links.csv").exists());
}

#[tokio::test]
async fn test_unwritable_output_is_fatal() {
    let server = start_site().await;
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no_such_dir");
    let pipeline = build_pipeline(&server.uri(), &missing, &["machine learning"]);

    let result = pipeline
        .run(&format!("{}{}", server.uri(), LISTING_PATH))
        .await;

    assert!(matches!(result, Err(PipelineError::Storage(_))));
}
