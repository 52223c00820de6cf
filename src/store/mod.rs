//! 结果回写模块：分类结果持久化协作方接口与实现
//! 分类与持久化相互独立：写入失败不会影响已计算出的分类结果
pub mod memory;
pub mod updater;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::classifier::{BatchItem, ClassificationInput};
use crate::error::CatResult;

/// 已存储的帖子
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredItem {
    pub id: String,
    #[serde(flatten)]
    pub input: ClassificationInput,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl StoredItem {
    pub fn new(item: BatchItem) -> Self {
        Self {
            id: item.id,
            input: item.input,
            category_id: None,
            confidence: None,
        }
    }

    /// 未分类或置信度低于阈值时需要重新分类
    pub fn needs_reclassification(&self, threshold: f64) -> bool {
        match (&self.category_id, self.confidence) {
            (None, _) => true,
            (Some(_), Some(confidence)) => confidence < threshold,
            (Some(_), None) => false,
        }
    }
}

/// 分类持久化协作方
#[async_trait]
pub trait CategoryStore: std::fmt::Debug + Send + Sync {
    /// 分类名称 -> 存储侧分类标识
    async fn resolve_category(&self, category_name: &str) -> CatResult<Option<String>>;

    /// 写回帖子分类
    async fn update_item_category(
        &self,
        item_id: &str,
        category_id: &str,
        confidence: f64,
    ) -> CatResult<()>;

    /// 待重新分类的帖子（未分类或置信度低于阈值），最多 limit 条
    async fn pending_items(&self, threshold: f64, limit: usize) -> CatResult<Vec<BatchItem>>;
}

pub use self::memory::MemoryCategoryStore;
pub use self::updater::{CategoryUpdater, PersistOutcome, PersistReport};
