//! 规则加载管理器
//! 负责从内置规则表、本地 JSON 或 MessagePack 文件加载规则库

use std::path::Path;
use tracing::{debug, warn};

use super::builtin::builtin_library;
use super::cache::RuleCacheManager;
use super::model::RuleLibrary;
use crate::config::GlobalConfig;
use crate::error::{CatResult, CategorizerError};

/// 规则文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFileType {
    /// 规则 JSON
    Json,
    /// MessagePack 规则快照
    MsgPack,
}

impl RuleFileType {
    /// 按扩展名识别规则文件类型（未知扩展名按 JSON 处理）
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("mp") || ext.eq_ignore_ascii_case("msgpack") => {
                RuleFileType::MsgPack
            }
            _ => RuleFileType::Json,
        }
    }
}

/// 规则加载管理器
pub struct RuleLoader;

impl RuleLoader {
    /// 加载规则库（未配置路径时使用内置规则）
    pub async fn load(config: &GlobalConfig) -> CatResult<RuleLibrary> {
        let rule_lib = match &config.catalog_path {
            None => {
                debug!("未配置规则文件，使用内置规则库");
                builtin_library().clone()
            }
            Some(path) => Self::load_file(path).await?,
        };

        rule_lib.validate()?;
        debug!(
            "规则库加载完成，版本：{}，分类规则数：{}",
            rule_lib.version,
            rule_lib.categories.len()
        );
        Ok(rule_lib)
    }

    /// 从本地文件加载规则库
    pub async fn load_file(path: &Path) -> CatResult<RuleLibrary> {
        if !path.exists() {
            warn!("规则文件不存在：{}", path.display());
            return Err(CategorizerError::RuleLoadError(format!(
                "规则文件不存在：{}",
                path.display()
            )));
        }

        match RuleFileType::from_path(path) {
            RuleFileType::MsgPack => RuleCacheManager::load_from_cache(path).await,
            RuleFileType::Json => {
                let content = tokio::fs::read(path).await?;
                Self::parse_json(&content)
            }
        }
    }

    /// 解析规则 JSON
    pub fn parse_json(content: &[u8]) -> CatResult<RuleLibrary> {
        serde_json::from_slice::<RuleLibrary>(content)
            .map_err(|e| CategorizerError::RuleParseError(format!("规则JSON解析失败：{}", e)))
    }

    /// 导出规则库（按扩展名选择 JSON 或 MessagePack）
    pub async fn export(path: &Path, rule_lib: &RuleLibrary) -> CatResult<()> {
        match RuleFileType::from_path(path) {
            RuleFileType::MsgPack => RuleCacheManager::save_to_cache(path, rule_lib).await,
            RuleFileType::Json => {
                let content = serde_json::to_vec_pretty(rule_lib)?;
                tokio::fs::write(path, content).await?;
                Ok(())
            }
        }
    }
}
