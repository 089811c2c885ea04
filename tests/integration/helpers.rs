// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use jobscrape::domain::models::scrape_config::OutputPaths;
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const LISTING_PATH: &str = "/ajo/computer_science";

/// 构造一个职位详情页
pub fn detail_page(title: &str, institute: &str, description: Option<&str>, canonical: Option<&str>) -> String {
    let canonical = canonical
        .map(|href| format!(r#"<link rel="canonical" href="{}">"#, href))
        .unwrap_or_default();
    let description = description
        .map(|text| {
            format!(
                r#"<section style="width:96%;border:1px solid #cccccc;margin:auto">{}</section>"#,
                text
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
        <html>
            <head><title>{title}</title>{canonical}</head>
            <body>
                <h2>{institute}</h2>
                <div class="row">
                    <div class="label"><b>Position Title:</b></div>
                    <div class="value">{title}</div>
                </div>
                {description}
            </body>
        </html>"#
    )
}

/// 列表页：一个绝对链接、一个相对链接、一个重复链接、一个申请链接，
/// 另有一个返回 404 的职位
pub fn listing_page(server_uri: &str) -> String {
    format!(
        r#"<html><body>
            <a href="{uri}/ajo/jobs/100">Absolute</a>
            <a href="/ajo/jobs/200">Relative</a>
            <a href="{uri}/ajo/jobs/100">Duplicate</a>
            <a href="/ajo/jobs/200/apply">Apply</a>
            <a href="/ajo/jobs/404">Gone</a>
            <a href="/ajo/faq">FAQ</a>
        </body></html>"#,
        uri = server_uri
    )
}

/// 启动模拟站点
pub async fn start_site() -> MockServer {
    let server = MockServer::start().await;
    let uri = server.uri();

    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(&uri)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/ajo/jobs/100"))
        .respond_with(ResponseTemplate::new(200).set_body_string(detail_page(
            "Assistant Professor",
            "Universität Zürich",
            Some("Research in <b>Machine Learning</b> and robotics."),
            Some("https://academicjobsonline.org/ajo/jobs/100"),
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/ajo/jobs/200"))
        .respond_with(ResponseTemplate::new(200).set_body_string(detail_page(
            "Lecturer",
            "University of Oxford",
            None,
            None,
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/ajo/jobs/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    server
}

pub fn outputs_in(dir: &Path) -> OutputPaths {
    OutputPaths {
        links_file: dir.join("job_links.csv"),
        data_file: dir.join("jobs_data.json"),
        results_file: dir.join("relevant_jobs.csv"),
    }
}
