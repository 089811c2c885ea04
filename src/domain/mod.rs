// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：职位记录、筛选结果和抓取配置
/// - 仓库接口（repositories）：结果持久化抽象接口
/// - 服务（services）：链接提取、详情抓取、关键词筛选和流水线编排
///
/// 领域层不依赖于具体的HTTP客户端或文件系统实现，
/// 页面获取和结果写入都通过特质注入。
pub mod models;
pub mod repositories;
pub mod services;
