use super::constants::fence;

/// 清理响应内容，提取 JSON（处理代码块包裹的情况）
///
/// 优先取 ```json 代码块，其次取普通 ``` 代码块；结束标记取最后一个，
/// 缺少结束标记时只去掉开始标记
pub fn clean_response(response: &str) -> &str {
    let trimmed = response.trim();

    // 已经是 JSON 开头时不再查找代码块，避免误伤字符串值里的 ```
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return trimmed
            .strip_suffix(fence::CODE_BLOCK)
            .map(str::trim_end)
            .unwrap_or(trimmed);
    }

    let start_marker = if trimmed.contains(fence::JSON_CODE_BLOCK_START) {
        fence::JSON_CODE_BLOCK_START
    } else if trimmed.contains(fence::CODE_BLOCK) {
        fence::CODE_BLOCK
    } else {
        return trimmed;
    };

    if let Some(start) = trimmed.find(start_marker) {
        let body_start = start + start_marker.len();
        let body = &trimmed[body_start..];
        return match body.rfind(fence::CODE_BLOCK) {
            Some(end) => body[..end].trim(),
            None => body.trim(),
        };
    }

    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_json_is_only_trimmed() {
        assert_eq!(clean_response("  {\"a\":1}\n"), "{\"a\":1}");
    }

    #[test]
    fn strips_json_fence() {
        assert_eq!(clean_response("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn strips_bare_fence() {
        assert_eq!(clean_response("\n```\n[1,2]\n```\n"), "[1,2]");
    }

    #[test]
    fn ignores_prose_around_block() {
        let raw = "Here is the analysis:\n```json\n{\"a\":1}\n```\nHope this helps!";
        assert_eq!(clean_response(raw), "{\"a\":1}");
    }

    #[test]
    fn fence_inside_json_string_is_preserved() {
        let raw = "{\"reason\":\"use ``` sparingly\"}";
        assert_eq!(clean_response(raw), raw);
    }

    #[test]
    fn fenced_block_with_fence_inside_string() {
        let raw = "```json\n{\"reason\":\"no ``` here\"}\n```";
        assert_eq!(clean_response(raw), "{\"reason\":\"no ``` here\"}");
    }

    #[test]
    fn trailing_fence_only() {
        assert_eq!(clean_response("{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn unterminated_fence_drops_opening_marker() {
        assert_eq!(clean_response("```json\n{\"a\":1}"), "{\"a\":1}");
    }
}
