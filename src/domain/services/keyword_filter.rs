// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::{FilteredJob, JobRecord};

/// 关键词筛选器
///
/// 描述中（不区分大小写）包含任一关键词的职位会被保留
pub struct KeywordFilter {
    /// 小写化后的关键词
    keywords: Vec<String>,
}

impl KeywordFilter {
    pub fn new(keywords: &[String]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// 判断描述是否包含任一关键词
    pub fn matches(&self, description: &str) -> bool {
        let description = description.to_lowercase();
        self.keywords.iter().any(|k| description.contains(k.as_str()))
    }

    /// 筛选职位记录
    ///
    /// 结果保持输入顺序，不修改输入
    pub fn filter(&self, records: &[JobRecord]) -> Vec<FilteredJob> {
        records
            .iter()
            .filter(|record| self.matches(&record.description))
            .map(FilteredJob::from)
            .collect()
    }
}
