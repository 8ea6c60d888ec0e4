// 应用状态管理
// 包含合作伙伴目录等全局状态

use crate::config::Config;
use crate::models::PartnerDirectory;

/// 应用全局状态
pub struct AppState {
    /// 合作伙伴目录
    pub directory: PartnerDirectory,
}

impl AppState {
    /// 创建新的应用状态实例
    ///
    /// # Arguments
    /// * `config` - 应用配置
    ///
    /// # Returns
    /// * 应用状态实例 (合作伙伴目录由配置构建)
    pub fn new(config: &Config) -> Self {
        Self {
            directory: config.build_directory(),
        }
    }

    /// 创建测试用的应用状态
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        Self::new(&Config::default())
    }
}
