//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 分类规则文件路径（None 使用内置规则）
    pub catalog_path: Option<PathBuf>,
    // 关键词命中得分
    pub keyword_weight: f64,
    // 正则命中得分
    pub pattern_weight: f64,
    // 优先级加成单位
    pub priority_bonus_unit: f64,
    // 优先级上限（None 时取规则库最大优先级 + 1）
    pub priority_ceiling: Option<u32>,
    // 无匹配时"其他"分类的置信度
    pub fallback_confidence: f64,
    // 低于该置信度的已存储帖子需要重新分类
    pub reclassify_threshold: f64,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            keyword_weight: 1.0,
            pattern_weight: 3.0,
            priority_bonus_unit: 0.5,
            priority_ceiling: None,
            fallback_confidence: 0.1,
            reclassify_threshold: 0.5,
            verbose: false,
        }
    }
}

impl GlobalConfig {
    /// 日志过滤级别（RUST_LOG 未设置时使用）
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn catalog_path(mut self, path: PathBuf) -> Self {
        self.config.catalog_path = Some(path);
        self
    }

    pub fn keyword_weight(mut self, weight: f64) -> Self {
        self.config.keyword_weight = weight.max(0.0);
        self
    }

    pub fn pattern_weight(mut self, weight: f64) -> Self {
        self.config.pattern_weight = weight.max(0.0);
        self
    }

    pub fn priority_bonus_unit(mut self, unit: f64) -> Self {
        self.config.priority_bonus_unit = unit.max(0.0);
        self
    }

    pub fn priority_ceiling(mut self, ceiling: u32) -> Self {
        self.config.priority_ceiling = Some(ceiling);
        self
    }

    pub fn fallback_confidence(mut self, confidence: f64) -> Self {
        self.config.fallback_confidence = confidence.clamp(0.0, 1.0);
        self
    }

    pub fn reclassify_threshold(mut self, threshold: f64) -> Self {
        self.config.reclassify_threshold = threshold;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = ConfigManager::get_default();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.keyword_weight, 1.0);
        assert_eq!(config.pattern_weight, 3.0);
        assert_eq!(config.priority_bonus_unit, 0.5);
        assert_eq!(config.fallback_confidence, 0.1);
    }

    #[test]
    fn test_builder_clamps_fallback_confidence() {
        let config = ConfigManager::custom()
            .fallback_confidence(1.7)
            .priority_ceiling(10)
            .build();
        assert_eq!(config.fallback_confidence, 1.0);
        assert_eq!(config.priority_ceiling, Some(10));
    }

    #[test]
    fn test_builder_rejects_negative_weights() {
        let config = ConfigManager::custom()
            .keyword_weight(-1.0)
            .pattern_weight(-3.0)
            .priority_bonus_unit(-0.5)
            .build();
        assert_eq!(config.keyword_weight, 0.0);
        assert_eq!(config.pattern_weight, 0.0);
        assert_eq!(config.priority_bonus_unit, 0.0);
    }

    #[test]
    fn test_verbose_controls_log_filter() {
        assert_eq!(ConfigManager::get_default().log_filter(), "warn");
        assert_eq!(ConfigManager::custom().verbose(true).build().log_filter(), "debug");
    }
}
