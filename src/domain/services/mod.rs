// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 抓取流水线按顺序由以下阶段组成：
/// - 链接提取（link_extractor）：从列表页提取职位详情链接
/// - 详情抓取（detail_fetcher）：逐个获取详情页，带固定请求间隔
/// - 详情解析（detail_extractor）：从详情页标记中提取字段
/// - 关键词筛选（keyword_filter）：按描述中的关键词保留职位
/// - 流水线（pipeline）：串联以上阶段并持久化每个阶段的输出
///
/// 进度汇报（progress）以观察者特质注入，流水线本身不直接输出。
pub mod detail_extractor;
pub mod detail_fetcher;
pub mod keyword_filter;
pub mod link_extractor;
pub mod pipeline;
pub mod progress;
