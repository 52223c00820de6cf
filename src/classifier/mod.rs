//! 分类模块：内容分类核心逻辑
pub mod result;
pub mod subject;
pub mod scorer;
pub mod classifier;
pub mod global;
pub mod stats;

// 导出核心接口
pub use self::result::{
    BatchEntry, BatchItem, CategoryScore, ClassificationInput, ClassificationResult,
};
pub use self::subject::build_subject;
pub use self::scorer::CategoryScorer;
pub use self::classifier::Classifier;
pub use self::global::{
    init_classifier,
    init_classifier_with_config,
    init_classifier_with_rules,
    get_global_classifier,
    classify_content,
    classify_contents,
};
pub use self::stats::{CategoryCount, CategoryStats};
