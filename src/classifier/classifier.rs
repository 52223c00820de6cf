//! 分类器核心：整合打分器，输出分类结果
use std::sync::Arc;

use tracing::debug;

use super::result::{BatchEntry, BatchItem, CategoryScore, ClassificationInput, ClassificationResult};
use super::scorer::CategoryScorer;
use super::subject::build_subject;
use crate::compiler::{CompiledRuleLibrary, RuleCompiler};
use crate::config::GlobalConfig;
use crate::error::CatResult;
use crate::rule::{builtin_library, RuleLibrary, RuleLoader};

/// 内容分类器（无状态，可跨线程共享）
#[derive(Debug, Clone)]
pub struct Classifier {
    compiled_lib: Arc<CompiledRuleLibrary>,
    config: GlobalConfig,
}

impl Classifier {
    /// 创建分类器（按配置加载规则库）
    pub async fn new(config: GlobalConfig) -> CatResult<Self> {
        let rule_lib = RuleLoader::load(&config).await?;
        Self::with_rules(&rule_lib, config)
    }

    /// 使用内存中的规则库创建分类器
    pub fn with_rules(rule_lib: &RuleLibrary, config: GlobalConfig) -> CatResult<Self> {
        rule_lib.validate()?;
        let compiled_lib = RuleCompiler::compile(rule_lib, &config)?;
        Ok(Self {
            compiled_lib: Arc::new(compiled_lib),
            config,
        })
    }

    /// 使用内置规则库创建分类器
    pub fn builtin(config: GlobalConfig) -> CatResult<Self> {
        Self::with_rules(builtin_library(), config)
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// 规则库版本
    pub fn catalog_version(&self) -> &str {
        &self.compiled_lib.version
    }

    /// 可用分类名称（规则库顺序）
    pub fn categories(&self) -> Vec<&str> {
        self.compiled_lib.category_names()
    }

    /// 核心分类接口
    pub fn classify(&self, title: &str, body: &str, tags: &[String]) -> ClassificationResult {
        let ranked = self.rank(title, body, tags);
        match ranked.into_iter().next() {
            Some(best) => best.into(),
            None => ClassificationResult::fallback(self.compiled_lib.fallback_confidence),
        }
    }

    /// 分类接口（结构化输入）
    pub fn classify_input(&self, input: &ClassificationInput) -> ClassificationResult {
        self.classify(&input.title, &input.body, &input.tags)
    }

    /// 所有命中分类的打分明细，按原始得分降序；平分时保持规则库顺序
    pub fn rank(&self, title: &str, body: &str, tags: &[String]) -> Vec<CategoryScore> {
        let subject = build_subject(title, body, tags);
        let mut scores: Vec<CategoryScore> = self
            .compiled_lib
            .categories
            .iter()
            .filter_map(|category| CategoryScorer::score(category, &subject))
            .collect();

        // sort_by 为稳定排序
        scores.sort_by(|a, b| b.score.total_cmp(&a.score));
        scores
    }

    /// 批量分类：按输入顺序逐条分类，输出与输入一一对应
    pub fn classify_batch(&self, items: &[BatchItem]) -> Vec<BatchEntry> {
        let entries: Vec<BatchEntry> = items
            .iter()
            .map(|item| BatchEntry {
                id: item.id.clone(),
                category: self.classify_input(&item.input),
            })
            .collect();

        debug!("批量分类完成，共{}条", entries.len());
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::rule::{CategoryRule, FALLBACK_CATEGORY};

    fn builtin() -> Classifier {
        Classifier::builtin(ConfigManager::get_default()).unwrap()
    }

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_skincare_scenario() {
        let result = builtin().classify(
            "护肤心得分享",
            "今天分享一下我的护肤经验，用了面膜和精华",
            &tags(&["护肤", "推荐"]),
        );
        assert_eq!(result.category_id, "美妆护肤");
        assert_eq!(result.category_name, "美妆护肤");
        for keyword in ["护肤", "面膜", "精华"] {
            assert!(result.matched_keywords.contains(&keyword.to_string()));
        }
        assert!(result.confidence > 0.1);
        assert!(result.confidence <= 1.0);
    }

    #[test]
    fn test_empty_input_falls_back() {
        let result = builtin().classify("", "", &[]);
        assert_eq!(result.category_id, FALLBACK_CATEGORY);
        assert_eq!(result.confidence, 0.1);
        assert!(result.matched_keywords.is_empty());
        assert!(result.matched_patterns.is_empty());
    }

    #[test]
    fn test_unmatched_text_falls_back() {
        let result = builtin().classify("hello", "nothing relevant here", &tags(&["misc"]));
        assert!(result.is_fallback());
        assert_eq!(result.confidence, 0.1);
    }

    #[test]
    fn test_priority_breaks_equal_keyword_hits() {
        // 两条规则各命中一个关键词，优先级数值更小的 A 胜出
        let classifier = Classifier::with_rules(
            &RuleLibrary::new(
                "t",
                vec![
                    CategoryRule::new("B", &["手表"], &[], 2),
                    CategoryRule::new("A", &["口红"], &[], 1),
                ],
            ),
            ConfigManager::get_default(),
        )
        .unwrap();
        let result = classifier.classify("口红和手表", "", &[]);
        assert_eq!(result.category_id, "A");
    }

    #[test]
    fn test_tie_goes_to_earlier_rule() {
        let classifier = Classifier::with_rules(
            &RuleLibrary::new(
                "t",
                vec![
                    CategoryRule::new("first", &["猫"], &[], 1),
                    CategoryRule::new("second", &["狗"], &[], 1),
                ],
            ),
            ConfigManager::get_default(),
        )
        .unwrap();
        let ranked = classifier.rank("猫和狗", "", &[]);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(classifier.classify("猫和狗", "", &[]).category_id, "first");
    }

    #[test]
    fn test_deterministic() {
        let classifier = builtin();
        let t = tags(&["旅行", "攻略"]);
        let a = classifier.classify("周末去海边", "酒店很好，风景也美", &t);
        let b = classifier.classify("周末去海边", "酒店很好，风景也美", &t);
        assert_eq!(a, b);
        assert_eq!(a.category_id, "旅游");
    }

    #[test]
    fn test_adding_winning_keyword_never_lowers_score() {
        let classifier = builtin();
        let before = classifier.rank("做饭日记", "", &[]);
        let after = classifier.rank("做饭日记", "还做了火锅", &[]);
        let score_of = |ranked: &[CategoryScore]| {
            ranked.iter().find(|s| s.category_id == "美食").map(|s| s.score).unwrap()
        };
        assert!(score_of(&after) >= score_of(&before));
    }

    #[test]
    fn test_case_insensitive_keyword() {
        let result = builtin().classify("周末DIY", "", &[]);
        assert_eq!(result.category_id, "生活方式");
        assert_eq!(result.matched_keywords, vec!["DIY".to_string()]);
    }

    #[test]
    fn test_confidence_within_bounds_for_all_categories() {
        let classifier = builtin();
        let text = "护肤 穿搭 美食 旅游 生活 健身 学习 面膜 精华 火锅 酒店 跑步 编程";
        for score in classifier.rank(text, text, &tags(&["日常"])) {
            assert!((0.0..=1.0).contains(&score.confidence), "{}", score.category_id);
        }
    }

    #[test]
    fn test_batch_matches_single_classification() {
        let classifier = builtin();
        let items = vec![
            BatchItem { id: "1".into(), input: ClassificationInput::new("跑步打卡", "今天跑了十公里", tags(&["健身"])) },
            BatchItem { id: "2".into(), input: ClassificationInput::default() },
            BatchItem { id: "3".into(), input: ClassificationInput::new("考试复习", "笔记整理", vec![]) },
        ];

        let entries = classifier.classify_batch(&items);
        assert_eq!(entries.len(), items.len());
        for (item, entry) in items.iter().zip(&entries) {
            assert_eq!(entry.id, item.id);
            assert_eq!(entry.category, classifier.classify_input(&item.input));
        }
        assert_eq!(entries[0].category.category_id, "健身运动");
        assert!(entries[1].category.is_fallback());
        assert_eq!(entries[2].category.category_id, "学习工作");
    }

    #[test]
    fn test_custom_fallback_confidence() {
        let config = ConfigManager::custom().fallback_confidence(0.05).build();
        let classifier = Classifier::builtin(config).unwrap();
        assert_eq!(classifier.classify("", "", &[]).confidence, 0.05);
    }
}
