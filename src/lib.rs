//! rscategorizer - 基于关键词与正则规则的内容分类引擎

// 导出全局错误类型
pub use self::error::{CategorizerError, CatResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{
    CategoryRule, RuleLibrary, RuleLoader, RuleCacheManager, RuleFileType,
    builtin_library, CATALOG_VERSION, FALLBACK_CATEGORY,
};

// 导出编译模块核心接口
pub use self::compiler::{
    CompiledCategory, CompiledRuleLibrary, RuleCompiler, CompiledPattern, Matcher
};

// 导出分类模块核心接口（含全局简化接口）
pub use self::classifier::{
    Classifier,
    ClassificationInput,
    ClassificationResult,
    CategoryScore,
    BatchItem,
    BatchEntry,
    CategoryStats,
    CategoryCount,
    init_classifier,
    init_classifier_with_config,
    init_classifier_with_rules,
    classify_content,
    classify_contents,
};

// 导出结果回写模块核心接口
pub use self::store::{
    CategoryStore, StoredItem, MemoryCategoryStore, CategoryUpdater, PersistOutcome, PersistReport
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod compiler;
pub mod classifier;
pub mod store;
