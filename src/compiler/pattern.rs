//! 编译后模式模型
//! 关键词与正则编译后的结构

use regex::Regex;

#[derive(Debug, Clone)]
pub enum Matcher {
    Contains(String), // 包含匹配（关键词已转小写）
    Regex(Regex),     // 正则匹配（忽略大小写）
}

impl Matcher {
    /// 简单匹配判断，subject 需已转小写
    pub fn is_match(&self, subject: &str) -> bool {
        match self {
            Matcher::Contains(s) => subject.contains(s.as_str()),
            Matcher::Regex(regex) => regex.is_match(subject),
        }
    }

    /// 规则描述
    pub fn describe(&self) -> &str {
        match self {
            Matcher::Contains(s) => s.as_str(),
            Matcher::Regex(r) => r.as_str(),
        }
    }
}

/// 编译后的单个匹配项
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    // 原始关键词/正则源码，命中时原样输出
    pub source: String,
    pub matcher: Matcher,
    pub weight: f64,
}

/// 分类编译后的规则
#[derive(Debug, Clone)]
pub struct CompiledCategory {
    pub id: String,
    pub name: String,
    pub keywords: Vec<CompiledPattern>,
    pub patterns: Vec<CompiledPattern>,
    pub priority: u32,
    pub priority_bonus: f64,
    // 该分类理论最高得分：全部关键词与正则命中 + 优先级加成
    pub max_possible_score: f64,
}

/// 编译后的规则库
#[derive(Debug, Clone)]
pub struct CompiledRuleLibrary {
    pub version: String,
    // 保持规则库原始顺序
    pub categories: Vec<CompiledCategory>,
    pub fallback_confidence: f64,
}

impl CompiledRuleLibrary {
    /// 分类名称列表（规则库顺序）
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }
}
