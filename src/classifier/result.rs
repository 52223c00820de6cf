//! 分类输入与结果结构

use serde::{Deserialize, Serialize};

use crate::rule::FALLBACK_CATEGORY;

/// 分类输入
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationInput {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "content")]
    pub body: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

impl ClassificationInput {
    pub fn new<T: Into<String>, B: Into<String>>(title: T, body: B, tags: Vec<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            tags,
        }
    }
}

/// 分类结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub category_id: String,
    pub category_name: String,
    pub confidence: f64,
    pub matched_keywords: Vec<String>,
    pub matched_patterns: Vec<String>,
}

impl ClassificationResult {
    /// 兜底结果："其他"分类，无任何命中
    pub fn fallback(confidence: f64) -> Self {
        Self {
            category_id: FALLBACK_CATEGORY.to_string(),
            category_name: FALLBACK_CATEGORY.to_string(),
            confidence,
            matched_keywords: Vec::new(),
            matched_patterns: Vec::new(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.category_id == FALLBACK_CATEGORY
    }
}

impl std::fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.2})", self.category_name, self.confidence)
    }
}

/// 单个分类的打分明细
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category_id: String,
    pub category_name: String,
    pub score: f64,
    pub confidence: f64,
    pub matched_keywords: Vec<String>,
    pub matched_patterns: Vec<String>,
}

impl From<CategoryScore> for ClassificationResult {
    fn from(score: CategoryScore) -> Self {
        Self {
            category_id: score.category_id,
            category_name: score.category_name,
            confidence: score.confidence,
            matched_keywords: score.matched_keywords,
            matched_patterns: score.matched_patterns,
        }
    }
}

/// 批量分类输入项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchItem {
    pub id: String,
    #[serde(flatten)]
    pub input: ClassificationInput,
}

/// 批量分类结果项（与输入一一对应）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub id: String,
    pub category: ClassificationResult,
}

// ======== 辅助函数：tags 为 null 时视为空列表 ========
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
