// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{start_site, LISTING_PATH};
use std::process::Command;

fn jobscrape() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_jobscrape"));
    command
        .env_remove("APP_ENVIRONMENT")
        .env("JOBSCRAPE__SCRAPER__REQUEST_DELAY_MS", "0");
    command
}

#[tokio::test]
async fn test_cli_writes_outputs_and_exits_zero() {
    let server = start_site().await;
    let dir = tempfile::tempdir().unwrap();
    let uri = server.uri();

    let output = tokio::task::spawn_blocking({
        let dir = dir.path().to_path_buf();
        move || {
            jobscrape()
                .current_dir(&dir)
                .env("JOBSCRAPE__SCRAPER__SITE_ORIGIN", &uri)
                .arg(format!("{}{}", uri, LISTING_PATH))
                .arg("robotics")
                .arg("computer vision")
                .arg("--results-file")
                .arg("matches.csv")
                .output()
                .unwrap()
        }
    })
    .await
    .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(dir.path().join("job_links.csv").exists());
    assert!(dir.path().join("jobs_data.json").exists());

    let results = std::fs::read_to_string(dir.path().join("matches.csv")).unwrap();
    assert!(results.starts_with("title,company,link\r\n"));
    assert!(results.contains("Assistant Professor"));
}

#[tokio::test]
async fn test_cli_reports_listing_failure() {
    let server = start_site().await;
    let dir = tempfile::tempdir().unwrap();
    let url = format!("{}/ajo/not_found", server.uri());

    let output = tokio::task::spawn_blocking({
        let dir = dir.path().to_path_buf();
        move || {
            jobscrape()
                .current_dir(&dir)
                .arg(url)
                .arg("machine learning")
                .output()
                .unwrap()
        }
    })
    .await
    .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Error: "), "stdout was: {}", stdout);
    assert!(!dir.path().join("job_links.csv").exists());
}

#[test]
fn test_cli_requires_keywords() {
    let output = jobscrape()
        .arg("https://academicjobsonline.org/ajo/computer_science")
        .output()
        .unwrap();

    assert!(!output.status.success());
}
