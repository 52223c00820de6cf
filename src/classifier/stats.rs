//! 分类统计：汇总批量分类结果的分类分布

use std::collections::HashMap;
use serde::Serialize;

use super::result::BatchEntry;

/// 单个分类的帖子数量
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// 批量分类统计
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub total: usize,
    pub fallback_count: usize,
    // 按数量降序，数量相同按名称升序
    pub categories: Vec<CategoryCount>,
    // 已归入非兜底分类的百分比（取整）
    pub classification_rate: u32,
}

impl CategoryStats {
    pub fn from_entries(entries: &[BatchEntry]) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut fallback_count = 0;
        for entry in entries {
            if entry.category.is_fallback() {
                fallback_count += 1;
            }
            *counts.entry(entry.category.category_name.as_str()).or_insert(0) += 1;
        }

        let mut categories: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(name, count)| CategoryCount { name: name.to_string(), count })
            .collect();
        categories.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));

        let total = entries.len();
        let classification_rate = if total == 0 {
            0
        } else {
            (((total - fallback_count) as f64 / total as f64) * 100.0).round() as u32
        };

        Self {
            total,
            fallback_count,
            categories,
            classification_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ClassificationResult;

    fn entry(id: &str, category: &str) -> BatchEntry {
        let mut result = ClassificationResult::fallback(0.1);
        result.category_id = category.to_string();
        result.category_name = category.to_string();
        BatchEntry { id: id.to_string(), category: result }
    }

    #[test]
    fn test_stats_counts_and_order() {
        let entries = vec![
            entry("1", "美食"),
            entry("2", "旅游"),
            entry("3", "美食"),
            entry("4", "其他"),
        ];
        let stats = CategoryStats::from_entries(&entries);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.fallback_count, 1);
        assert_eq!(stats.classification_rate, 75);
        assert_eq!(stats.categories[0], CategoryCount { name: "美食".to_string(), count: 2 });
        assert_eq!(stats.categories.len(), 3);
    }

    #[test]
    fn test_stats_empty() {
        let stats = CategoryStats::from_entries(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.classification_rate, 0);
        assert!(stats.categories.is_empty());
    }
}
