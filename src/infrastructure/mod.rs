// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 提供领域仓库接口的具体实现：
/// - 存储（storage）：将链接列表、原始记录和筛选结果写入本地文件
pub mod storage;
