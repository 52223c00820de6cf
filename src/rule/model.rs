//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化

use std::collections::HashSet;
use serde::{Deserialize, Serialize};

use super::builtin::FALLBACK_CATEGORY;
use crate::error::{CatResult, CategorizerError};

/// 分类规则定义
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CategoryRule {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    // 正则源码，匹配时忽略大小写
    #[serde(rename = "contentPatterns", default, alias = "content_patterns")]
    pub content_patterns: Vec<String>,
    // 数字越小优先级越高
    pub priority: u32,
}

impl CategoryRule {
    pub fn new<S: Into<String>>(
        name: S,
        keywords: &[&str],
        content_patterns: &[&str],
        priority: u32,
    ) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            content_patterns: content_patterns.iter().map(|p| p.to_string()).collect(),
            priority,
        }
    }
}

/// 完整规则库（规则顺序即平分时的胜出顺序）
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RuleLibrary {
    #[serde(default)]
    pub version: String,
    pub categories: Vec<CategoryRule>,
}

impl RuleLibrary {
    pub fn new<S: Into<String>>(version: S, categories: Vec<CategoryRule>) -> Self {
        Self {
            version: version.into(),
            categories,
        }
    }

    /// 规则库中的最大优先级数值
    pub fn max_priority(&self) -> u32 {
        self.categories.iter().map(|c| c.priority).max().unwrap_or(0)
    }

    /// 校验规则库：非空、ID唯一、名称非空且不占用兜底分类、每条规则至少有一个关键词或正则
    pub fn validate(&self) -> CatResult<()> {
        if self.categories.is_empty() {
            return Err(CategorizerError::RuleParseError("规则库为空".to_string()));
        }

        let mut seen = HashSet::new();
        for rule in &self.categories {
            if rule.id.trim().is_empty() || rule.name.trim().is_empty() {
                return Err(CategorizerError::RuleParseError(
                    "分类ID或名称不能为空".to_string(),
                ));
            }
            if rule.id == FALLBACK_CATEGORY || rule.name == FALLBACK_CATEGORY {
                return Err(CategorizerError::RuleParseError(format!(
                    "分类[{}]占用了保留的兜底分类名",
                    rule.id
                )));
            }
            if !seen.insert(rule.id.as_str()) {
                return Err(CategorizerError::RuleParseError(format!(
                    "分类ID重复：{}",
                    rule.id
                )));
            }
            if rule.keywords.is_empty() && rule.content_patterns.is_empty() {
                return Err(CategorizerError::RuleParseError(format!(
                    "分类[{}]没有任何关键词或正则",
                    rule.id
                )));
            }
        }
        Ok(())
    }
}
