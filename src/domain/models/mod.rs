// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 职位（job）：从详情页提取的原始记录以及筛选后的投影
/// - 抓取配置（scrape_config）：一次运行期间不可变的关键词和输出路径
pub mod job;
pub mod scrape_config;
