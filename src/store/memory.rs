//! 内存存储实现

use std::collections::{HashMap, HashSet};
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CategoryStore, StoredItem};
use crate::classifier::BatchItem;
use crate::error::{CatResult, CategorizerError};
use crate::rule::{RuleLibrary, FALLBACK_CATEGORY};

/// 内存分类存储（帖子按插入顺序保存）
#[derive(Debug, Default)]
pub struct MemoryCategoryStore {
    // 分类名称 -> 分类标识
    categories: HashMap<String, String>,
    items: RwLock<Vec<StoredItem>>,
    // 写入时强制失败的帖子
    failing_items: HashSet<String>,
}

impl MemoryCategoryStore {
    /// 按规则库生成分类表（含兜底分类）
    pub fn from_library(rule_lib: &RuleLibrary) -> Self {
        let mut categories = HashMap::new();
        for (index, rule) in rule_lib.categories.iter().enumerate() {
            categories.insert(rule.name.clone(), format!("cat-{:03}", index + 1));
        }
        categories.insert(FALLBACK_CATEGORY.to_string(), "cat-000".to_string());

        Self {
            categories,
            ..Default::default()
        }
    }

    pub fn with_categories(categories: HashMap<String, String>) -> Self {
        Self {
            categories,
            ..Default::default()
        }
    }

    /// 指定写入必然失败的帖子
    pub fn fail_writes_for<I, S>(mut self, item_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.failing_items.extend(item_ids.into_iter().map(Into::into));
        self
    }

    pub async fn insert_items(&self, items: Vec<BatchItem>) {
        let mut stored = self.items.write().await;
        stored.extend(items.into_iter().map(StoredItem::new));
    }

    pub async fn get_item(&self, item_id: &str) -> Option<StoredItem> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| item.id == item_id)
            .cloned()
    }
}

#[async_trait]
impl CategoryStore for MemoryCategoryStore {
    async fn resolve_category(&self, category_name: &str) -> CatResult<Option<String>> {
        Ok(self.categories.get(category_name).cloned())
    }

    async fn update_item_category(
        &self,
        item_id: &str,
        category_id: &str,
        confidence: f64,
    ) -> CatResult<()> {
        if self.failing_items.contains(item_id) {
            return Err(CategorizerError::StoreWriteError(format!("帖子[{}]写入被拒绝", item_id)));
        }

        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| CategorizerError::StoreWriteError(format!("帖子不存在：{}", item_id)))?;

        item.category_id = Some(category_id.to_string());
        item.confidence = Some(confidence);
        Ok(())
    }

    async fn pending_items(&self, threshold: f64, limit: usize) -> CatResult<Vec<BatchItem>> {
        Ok(self
            .items
            .read()
            .await
            .iter()
            .filter(|item| item.needs_reclassification(threshold))
            .take(limit)
            .map(|item| BatchItem {
                id: item.id.clone(),
                input: item.input.clone(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ClassificationInput;
    use crate::rule::builtin_library;

    fn item(id: &str) -> BatchItem {
        BatchItem { id: id.to_string(), input: ClassificationInput::default() }
    }

    #[tokio::test]
    async fn test_resolve_builtin_categories() {
        let store = MemoryCategoryStore::from_library(builtin_library());
        assert_eq!(store.resolve_category("美妆护肤").await.unwrap(), Some("cat-001".to_string()));
        assert_eq!(store.resolve_category("其他").await.unwrap(), Some("cat-000".to_string()));
        assert_eq!(store.resolve_category("不存在").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_and_pending() {
        let store = MemoryCategoryStore::from_library(builtin_library());
        store.insert_items(vec![item("a"), item("b"), item("c")]).await;

        store.update_item_category("a", "cat-003", 0.9).await.unwrap();
        store.update_item_category("b", "cat-003", 0.2).await.unwrap();

        let stored = store.get_item("a").await.unwrap();
        assert_eq!(stored.category_id.as_deref(), Some("cat-003"));

        let pending: Vec<String> = store
            .pending_items(0.5, 10)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(pending, vec!["b".to_string(), "c".to_string()]);

        assert_eq!(store.pending_items(0.5, 1).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_write_failures() {
        let store = MemoryCategoryStore::from_library(builtin_library()).fail_writes_for(["x"]);
        store.insert_items(vec![item("x")]).await;

        let injected = store.update_item_category("x", "cat-001", 0.5).await;
        assert!(matches!(injected, Err(CategorizerError::StoreWriteError(_))));

        let missing = store.update_item_category("nope", "cat-001", 0.5).await;
        assert!(matches!(missing, Err(CategorizerError::StoreWriteError(_))));
    }
}
