//! 规则缓存管理
//! 仅处理规则库的本地序列化（MessagePack）和反序列化

use std::path::Path;
use rmp_serde::{Serializer, from_slice};
use serde::Serialize;
use tracing::debug;

use super::model::RuleLibrary;
use crate::error::{CatResult, CategorizerError};

/// 规则缓存管理器
pub struct RuleCacheManager;

impl RuleCacheManager {
    /// 从本地缓存加载规则库
    pub async fn load_from_cache(cache_path: &Path) -> CatResult<RuleLibrary> {
        let cache_data = tokio::fs::read(cache_path).await?;
        Self::decode(&cache_data)
    }

    /// 将规则库缓存到本地
    pub async fn save_to_cache(cache_path: &Path, rule_lib: &RuleLibrary) -> CatResult<()> {
        let cache_data = Self::encode(rule_lib)?;
        tokio::fs::write(cache_path, cache_data).await?;
        Ok(())
    }

    /// 清除本地缓存
    pub async fn clear_cache(cache_path: &Path) -> CatResult<()> {
        if cache_path.exists() {
            tokio::fs::remove_file(cache_path).await?;
        }
        Ok(())
    }

    /// MessagePack反序列化
    pub fn decode(cache_data: &[u8]) -> CatResult<RuleLibrary> {
        let rule_lib: RuleLibrary = from_slice(cache_data)
            .map_err(|e| CategorizerError::MsgPackError(format!("反序列化失败：{}", e)))?;

        debug!("缓存文件反序列化成功，版本：{}，分类规则数：{}", rule_lib.version, rule_lib.categories.len());
        Ok(rule_lib)
    }

    /// MessagePack序列化（字段名写入，保证跨版本可读）
    pub fn encode(rule_lib: &RuleLibrary) -> CatResult<Vec<u8>> {
        let mut cache_data = Vec::new();
        rule_lib
            .serialize(&mut Serializer::new(&mut cache_data).with_struct_map())
            .map_err(|e| CategorizerError::MsgPackError(format!("序列化失败：{}", e)))?;

        debug!("规则库序列化成功，序列化后数据大小：{} 字节", cache_data.len());
        Ok(cache_data)
    }
}
