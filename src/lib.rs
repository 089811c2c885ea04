// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理抓取器的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含职位记录、抓取配置以及抓取流水线的各个阶段
pub mod domain;

/// 引擎模块
///
/// 实现页面获取引擎
pub mod engines;

/// 基础设施模块
///
/// 提供结果文件的持久化
pub mod infrastructure;

/// 工具模块
///
/// 提供错误类型、URL处理和日志初始化
pub mod utils;
