//! 分类打分器：对单个分类计算命中得分与置信度

use crate::compiler::{CompiledCategory, CompiledPattern};

use super::result::CategoryScore;

/// 分类打分器
pub struct CategoryScorer;

impl CategoryScorer {
    /// 计算单个分类得分；无任何关键词/正则命中或总分不为正时返回 None（仅有优先级加成不算命中）
    pub fn score(category: &CompiledCategory, subject: &str) -> Option<CategoryScore> {
        let (keyword_score, matched_keywords) = Self::collect_hits(&category.keywords, subject);
        let (pattern_score, matched_patterns) = Self::collect_hits(&category.patterns, subject);

        if matched_keywords.is_empty() && matched_patterns.is_empty() {
            return None;
        }

        let score = keyword_score + pattern_score + category.priority_bonus;
        if score <= 0.0 {
            return None;
        }
        let confidence = Self::confidence(score, category.max_possible_score);

        Some(CategoryScore {
            category_id: category.id.clone(),
            category_name: category.name.clone(),
            score,
            confidence,
            matched_keywords,
            matched_patterns,
        })
    }

    /// 置信度 = 得分 / 理论最高分，限制在 [0, 1]
    pub fn confidence(score: f64, max_possible_score: f64) -> f64 {
        if max_possible_score <= 0.0 {
            return 0.0;
        }
        (score / max_possible_score).clamp(0.0, 1.0)
    }

    // 每个匹配项最多计一次（按是否出现，不按次数）
    fn collect_hits(items: &[CompiledPattern], subject: &str) -> (f64, Vec<String>) {
        let mut score = 0.0;
        let mut hits = Vec::new();
        for item in items {
            if item.matcher.is_match(subject) {
                score += item.weight;
                hits.push(item.source.clone());
            }
        }
        (score, hits)
    }
}
