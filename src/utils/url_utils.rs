// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{Origin, ParseError, Url};

/// 规范化站点源
///
/// 接受任意 http(s) URL，返回不带末尾斜杠的源，例如 `https://academicjobsonline.org`
pub fn site_origin(raw: &str) -> Result<String, ParseError> {
    let url = Url::parse(raw)?;
    match url.origin() {
        origin @ Origin::Tuple(..) => Ok(origin.ascii_serialization()),
        Origin::Opaque(_) => Err(ParseError::EmptyHost),
    }
}

/// 将以 `/` 开头的相对路径拼接到站点源上，其余链接原样返回
///
/// 这里刻意只做字符串拼接而不走 `Url::join`，链接列表中的 URL 与页面上写的保持一致
pub fn absolutize(origin: &str, href: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", origin, href)
    } else {
        href.to_string()
    }
}
