use std::env;

/// 环境变量配置管理
pub struct EnvConfig;

impl EnvConfig {
    /// 获取可选的环境变量，空白值视为未设置
    pub fn get_env_optional(key: &str) -> Option<String> {
        env::var(key)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
