//! rscategorizer 命令行入口

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use rscategorizer::{
    BatchItem, CategoryStats, CategoryUpdater, Classifier, ConfigManager, GlobalConfig,
    MemoryCategoryStore, RuleLoader,
};

#[derive(Debug, Parser)]
#[command(name = "rscategorizer", version, about = "基于关键词与正则规则的内容分类工具")]
struct Cli {
    /// 规则文件（.json 或 .mp），缺省使用内置规则库
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 分类单条内容
    Classify {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        body: String,
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// 批量分类 JSON 数组 [{id,title,body,tags}]
    Batch {
        #[arg(long)]
        input: PathBuf,
        /// 写回内存存储并输出回写报告
        #[arg(long)]
        persist: bool,
    },
    /// 查看或导出规则库
    Catalog {
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

fn init_logging(config: &GlobalConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = ConfigManager::custom().verbose(cli.verbose);
    if let Some(path) = &cli.catalog {
        builder = builder.catalog_path(path.clone());
    }
    let config = builder.build();
    init_logging(&config);

    match cli.command {
        Command::Classify { title, body, tags } => {
            if title.is_empty() && body.is_empty() {
                anyhow::bail!("标题或内容不能为空");
            }
            let classifier = Classifier::new(config).await.context("分类器初始化失败")?;
            let result = classifier.classify(&title, &body, &tags);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Batch { input, persist } => {
            let classifier = Classifier::new(config).await.context("分类器初始化失败")?;
            let content = tokio::fs::read(&input)
                .await
                .with_context(|| format!("读取输入文件失败：{}", input.display()))?;
            let items: Vec<BatchItem> = serde_json::from_slice(&content).context("输入JSON解析失败")?;

            let entries = classifier.classify_batch(&items);
            let stats = CategoryStats::from_entries(&entries);

            let output = if persist {
                let rule_lib = RuleLoader::load(classifier.config()).await?;
                let store = MemoryCategoryStore::from_library(&rule_lib);
                store.insert_items(items).await;
                let report = CategoryUpdater::persist_batch(&store, &entries).await;
                json!({ "results": entries, "stats": stats, "persist": report })
            } else {
                json!({ "results": entries, "stats": stats })
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Catalog { export } => {
            let rule_lib = RuleLoader::load(&config).await.context("规则库加载失败")?;
            match export {
                Some(path) => {
                    RuleLoader::export(&path, &rule_lib).await?;
                    println!("已导出 {} 个分类到 {}", rule_lib.categories.len(), path.display());
                }
                None => {
                    println!("规则库版本：{}", rule_lib.version);
                    for rule in &rule_lib.categories {
                        println!(
                            "{}\t优先级{}\t关键词{}条\t正则{}条",
                            rule.name,
                            rule.priority,
                            rule.keywords.len(),
                            rule.content_patterns.len()
                        );
                    }
                }
            }
        }
    }

    Ok(())
}
