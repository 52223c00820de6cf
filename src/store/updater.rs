//! 分类结果回写工具
//! 负责将分类结果写回存储（单条失败不影响后续帖子）

use serde::Serialize;
use tracing::{debug, warn};

use super::CategoryStore;
use crate::classifier::{BatchEntry, ClassificationResult, Classifier};
use crate::error::{CatResult, CategorizerError};

/// 单条回写结果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistOutcome {
    pub item_id: String,
    pub classification: ClassificationResult,
    pub updated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 批量回写报告
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistReport {
    pub processed: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub outcomes: Vec<PersistOutcome>,
}

/// 分类结果回写工具
pub struct CategoryUpdater;

impl CategoryUpdater {
    /// 回写单条分类结果：解析分类标识后写入
    pub async fn persist(
        store: &dyn CategoryStore,
        item_id: &str,
        result: &ClassificationResult,
    ) -> CatResult<()> {
        let category_id = store
            .resolve_category(&result.category_name)
            .await?
            .ok_or_else(|| CategorizerError::CategoryNotFound(result.category_name.clone()))?;

        store
            .update_item_category(item_id, &category_id, result.confidence)
            .await?;

        debug!("帖子[{}]分类回写成功：{}", item_id, result);
        Ok(())
    }

    /// 批量回写：逐条写入，失败只记录不中断
    pub async fn persist_batch(store: &dyn CategoryStore, entries: &[BatchEntry]) -> PersistReport {
        let mut report = PersistReport {
            processed: entries.len(),
            ..Default::default()
        };

        for entry in entries {
            let outcome = match Self::persist(store, &entry.id, &entry.category).await {
                Ok(()) => {
                    report.success_count += 1;
                    PersistOutcome {
                        item_id: entry.id.clone(),
                        classification: entry.category.clone(),
                        updated: true,
                        error: None,
                    }
                }
                Err(e) => {
                    warn!("帖子[{}]分类回写失败：{}", entry.id, e);
                    report.failure_count += 1;
                    PersistOutcome {
                        item_id: entry.id.clone(),
                        classification: entry.category.clone(),
                        updated: false,
                        error: Some(e.to_string()),
                    }
                }
            };
            report.outcomes.push(outcome);
        }

        debug!(
            "批量回写完成：共{}条，成功{}条，失败{}条",
            report.processed, report.success_count, report.failure_count
        );
        report
    }

    /// 重新分类：拉取未分类或低置信度帖子，分类后回写
    pub async fn reprocess(
        classifier: &Classifier,
        store: &dyn CategoryStore,
        limit: usize,
    ) -> CatResult<PersistReport> {
        let threshold = classifier.config().reclassify_threshold;
        let items = store.pending_items(threshold, limit).await?;
        if items.is_empty() {
            debug!("没有需要重新分类的帖子");
            return Ok(PersistReport::default());
        }

        let entries = classifier.classify_batch(&items);
        Ok(Self::persist_batch(store, &entries).await)
    }
}
