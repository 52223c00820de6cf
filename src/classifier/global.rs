//! 全局分类器单例管理
use once_cell::sync::OnceCell;
use tracing::{debug, info};

use super::classifier::Classifier;
use super::result::{BatchEntry, BatchItem, ClassificationResult};
use crate::config::{ConfigManager, GlobalConfig};
use crate::error::{CatResult, CategorizerError};
use crate::rule::RuleLibrary;

/// 全局分类器实例
static GLOBAL_CLASSIFIER: OnceCell<Classifier> = OnceCell::new();

/// 初始化全局分类器（默认配置，内置规则库）
pub async fn init_classifier() -> CatResult<()> {
    init_classifier_with_config(ConfigManager::get_default()).await
}

/// 带自定义配置初始化全局分类器
pub async fn init_classifier_with_config(config: GlobalConfig) -> CatResult<()> {
    if GLOBAL_CLASSIFIER.get().is_some() {
        debug!("全局分类器已初始化，跳过");
        return Ok(());
    }

    let classifier = Classifier::new(config).await?;
    set_global(classifier)
}

/// 手动注入规则库，初始化全局分类器
pub fn init_classifier_with_rules(rule_lib: &RuleLibrary, config: GlobalConfig) -> CatResult<()> {
    if GLOBAL_CLASSIFIER.get().is_some() {
        debug!("全局分类器已初始化，跳过自定义规则注入");
        return Ok(());
    }

    let classifier = Classifier::with_rules(rule_lib, config)?;
    set_global(classifier)
}

fn set_global(classifier: Classifier) -> CatResult<()> {
    let version = classifier.catalog_version().to_string();
    GLOBAL_CLASSIFIER.set(classifier).map_err(|_| {
        CategorizerError::ClassifierInitError("全局分类器已被其他线程初始化".to_string())
    })?;
    info!("全局分类器初始化完成，规则库版本：{}", version);
    Ok(())
}

/// 获取全局分类器（未初始化时使用内置规则库懒加载）
pub fn get_global_classifier() -> CatResult<&'static Classifier> {
    GLOBAL_CLASSIFIER.get_or_try_init(|| {
        debug!("懒加载全局分类器（内置规则库）");
        Classifier::builtin(ConfigManager::get_default())
    })
}

// 对外暴露的简化接口
pub fn classify_content(title: &str, body: &str, tags: &[String]) -> CatResult<ClassificationResult> {
    let classifier = get_global_classifier()?;
    Ok(classifier.classify(title, body, tags))
}

pub fn classify_contents(items: &[BatchItem]) -> CatResult<Vec<BatchEntry>> {
    let classifier = get_global_classifier()?;
    Ok(classifier.classify_batch(items))
}
