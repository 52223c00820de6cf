//! 编译模块：将原始规则编译为可执行的匹配模式
pub mod pattern;
pub mod compiler;

pub use self::pattern::{CompiledCategory, CompiledPattern, CompiledRuleLibrary, Matcher};
pub use self::compiler::RuleCompiler;
