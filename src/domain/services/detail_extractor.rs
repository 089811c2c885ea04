// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::JobRecord;
use crate::utils::errors::PipelineError;
use scraper::{ElementRef, Html, Selector};

/// 职位名称标签的文本
const POSITION_TITLE_LABEL: &str = "Position Title:";
/// 描述区块的内联样式片段，两者必须同时出现
const DESCRIPTION_WIDTH_STYLE: &str = "width:96%";
const DESCRIPTION_BORDER_STYLE: &str = "border:1px solid #cccccc";

/// 详情页解析器
///
/// 从职位详情页的标记中提取字段。每个字段都是一次独立的查询，
/// 查不到时该字段为空，不影响其它字段。
pub struct DetailExtractor {
    bold: Selector,
    heading: Selector,
    styled_section: Selector,
    canonical: Selector,
}

impl DetailExtractor {
    pub fn new() -> Result<Self, PipelineError> {
        Ok(Self {
            bold: parse_selector("b")?,
            heading: parse_selector("h2")?,
            styled_section: parse_selector("section[style]")?,
            canonical: parse_selector(r#"link[rel~="canonical"][href]"#)?,
        })
    }

    /// 提取职位记录
    ///
    /// # 参数
    ///
    /// * `html_content` - 详情页HTML内容
    /// * `url` - 实际请求的URL，页面没有 canonical 链接时作为职位链接
    pub fn extract(&self, html_content: &str, url: &str) -> JobRecord {
        let document = Html::parse_document(html_content);

        JobRecord {
            title: self.position_title(&document).unwrap_or_default(),
            institute: self.institute(&document).unwrap_or_default(),
            description: self.description(&document).unwrap_or_default(),
            job_link: self
                .canonical_link(&document)
                .unwrap_or_else(|| url.to_string()),
        }
    }

    /// `<b>Position Title:</b>` 所在元素之后的第一个 `<div>` 兄弟元素
    fn position_title(&self, document: &Html) -> Option<String> {
        let label = document
            .select(&self.bold)
            .find(|b| b.text().collect::<String>() == POSITION_TITLE_LABEL)?;
        let parent = label.parent()?;

        parent
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|sibling| sibling.value().name() == "div")
            .map(element_text)
    }

    fn institute(&self, document: &Html) -> Option<String> {
        document.select(&self.heading).next().map(element_text)
    }

    fn description(&self, document: &Html) -> Option<String> {
        document
            .select(&self.styled_section)
            .find(|section| {
                section.value().attr("style").is_some_and(|style| {
                    style.contains(DESCRIPTION_WIDTH_STYLE)
                        && style.contains(DESCRIPTION_BORDER_STYLE)
                })
            })
            .map(element_text)
    }

    fn canonical_link(&self, document: &Html) -> Option<String> {
        document
            .select(&self.canonical)
            .next()
            .and_then(|link| link.value().attr("href"))
            .map(str::to_string)
    }
}

fn parse_selector(selector: &str) -> Result<Selector, PipelineError> {
    Selector::parse(selector).map_err(|e| PipelineError::Selector(format!("{}: {:?}", selector, e)))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
