//! 规则编译器核心
//! 仅负责将原始规则编译为可执行的匹配模式

use std::time::Instant;
use regex::RegexBuilder;
use tracing::{debug, warn};

use super::pattern::{CompiledCategory, CompiledPattern, CompiledRuleLibrary, Matcher};
use crate::config::GlobalConfig;
use crate::error::CatResult;
use crate::rule::{CategoryRule, RuleLibrary};

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译规则库
    pub fn compile(rule_lib: &RuleLibrary, config: &GlobalConfig) -> CatResult<CompiledRuleLibrary> {
        let start = Instant::now();
        let ceiling = config
            .priority_ceiling
            .unwrap_or_else(|| rule_lib.max_priority().saturating_add(1));

        let mut compile_stats = CompileStats::default();
        let mut categories = Vec::with_capacity(rule_lib.categories.len());
        for rule in &rule_lib.categories {
            categories.push(Self::compile_category(rule, config, ceiling, &mut compile_stats)?);
        }

        debug!("✅ 规则编译完成，总耗时{:?}", start.elapsed());
        debug!(
            "📊 编译统计：分类{}个、关键词{}条、正则{}条、跳过空关键词{}条，优先级上限{}",
            categories.len(),
            compile_stats.keyword_count,
            compile_stats.pattern_count,
            compile_stats.skipped_count,
            ceiling
        );

        Ok(CompiledRuleLibrary {
            version: rule_lib.version.clone(),
            categories,
            fallback_confidence: config.fallback_confidence,
        })
    }

    /// 编译单个分类规则
    fn compile_category(
        rule: &CategoryRule,
        config: &GlobalConfig,
        ceiling: u32,
        stats: &mut CompileStats,
    ) -> CatResult<CompiledCategory> {
        let mut keywords = Vec::with_capacity(rule.keywords.len());
        for keyword in &rule.keywords {
            let needle = keyword.to_lowercase();
            if needle.is_empty() {
                warn!("分类[{}]包含空关键词，已跳过", rule.id);
                stats.skipped_count += 1;
                continue;
            }
            keywords.push(CompiledPattern {
                source: keyword.clone(),
                matcher: Matcher::Contains(needle),
                weight: config.keyword_weight,
            });
        }

        let mut patterns = Vec::with_capacity(rule.content_patterns.len());
        for source in &rule.content_patterns {
            let regex = RegexBuilder::new(source).case_insensitive(true).build()?;
            patterns.push(CompiledPattern {
                source: source.clone(),
                matcher: Matcher::Regex(regex),
                weight: config.pattern_weight,
            });
        }

        stats.keyword_count += keywords.len();
        stats.pattern_count += patterns.len();

        let priority_bonus = Self::priority_bonus(rule.priority, ceiling, config.priority_bonus_unit);
        let max_possible_score = keywords.iter().map(|k| k.weight).sum::<f64>()
            + patterns.iter().map(|p| p.weight).sum::<f64>()
            + priority_bonus;

        Ok(CompiledCategory {
            id: rule.id.clone(),
            name: rule.name.clone(),
            keywords,
            patterns,
            priority: rule.priority,
            priority_bonus,
            max_possible_score,
        })
    }

    /// 优先级加成：(上限 - 优先级) * 单位，优先级超出上限时为0
    pub fn priority_bonus(priority: u32, ceiling: u32, unit: f64) -> f64 {
        f64::from(ceiling.saturating_sub(priority)) * unit
    }
}

/// 编译统计信息
#[derive(Debug, Clone, Default)]
struct CompileStats {
    keyword_count: usize,
    pattern_count: usize,
    skipped_count: usize,
}
