//! 规则模块：负责规则的加载、缓存、数据模型定义
pub mod model;
pub mod builtin;
pub mod cache;
pub mod loader;

// 导出核心接口
pub use self::model::{CategoryRule, RuleLibrary};
pub use self::builtin::{builtin_library, CATALOG_VERSION, FALLBACK_CATEGORY};
pub use self::loader::{RuleLoader, RuleFileType};
pub use self::cache::RuleCacheManager;
