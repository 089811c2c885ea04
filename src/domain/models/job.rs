// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 职位记录
///
/// 从单个职位详情页提取的原始字段。任何字段在页面中缺失时都为空字符串，
/// 单个字段缺失不会导致整条记录失败。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    /// 职位名称
    pub title: String,
    /// 招聘机构（页面第一个 `<h2>`）
    pub institute: String,
    /// 职位描述
    pub description: String,
    /// 职位链接，优先使用页面声明的 canonical 链接
    pub job_link: String,
}

/// 筛选后的职位
///
/// 由描述命中关键词的 [`JobRecord`] 投影而来，只读
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredJob {
    pub title: String,
    pub company: String,
    pub link: String,
}

impl From<&JobRecord> for FilteredJob {
    fn from(record: &JobRecord) -> Self {
        // Some postings have no "Position Title:" label; fall back to the institute
        let title = if record.title.is_empty() {
            record.institute.clone()
        } else {
            record.title.clone()
        };

        Self {
            title,
            company: record.institute.clone(),
            link: record.job_link.clone(),
        }
    }
}
