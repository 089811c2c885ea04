// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理抓取器的配置设置，包括目标站点、请求间隔和HTTP客户端配置
pub mod settings;
