//! 内置分类规则库
//! 修改此表会改变分类结果，需同步提升 CATALOG_VERSION 并重新分类历史数据

use once_cell::sync::Lazy;

use super::model::{CategoryRule, RuleLibrary};

/// 内置规则库版本
pub const CATALOG_VERSION: &str = "2024.1";

/// 无匹配时的兜底分类
pub const FALLBACK_CATEGORY: &str = "其他";

static BUILTIN_LIBRARY: Lazy<RuleLibrary> = Lazy::new(|| {
    RuleLibrary::new(
        CATALOG_VERSION,
        vec![
            CategoryRule::new(
                "美妆护肤",
                &[
                    "护肤", "美妆", "化妆", "面膜", "精华", "防晒", "卸妆", "洁面",
                    "保湿", "美白", "抗老", "祛痘", "眼霜", "乳液", "面霜", "口红",
                    "彩妆", "粉底", "遮瑕", "眉毛", "眼影", "腮红", "指甲油",
                ],
                &["护肤|美妆|化妆|彩妆", "面膜|精华|防晒|卸妆", "口红|粉底|眼影|腮红"],
                1,
            ),
            CategoryRule::new(
                "时尚穿搭",
                &[
                    "穿搭", "时尚", "服装", "搭配", "衣服", "裤子", "裙子", "鞋子",
                    "包包", "配饰", "首饰", "手表", "帽子", "围巾", "外套", "毛衣",
                    "连衣裙", "牛仔裤", "高跟鞋", "运动鞋", "靴子",
                ],
                &["穿搭|时尚|服装|搭配", "衣服|裤子|裙子|鞋子", "包包|配饰|首饰"],
                2,
            ),
            CategoryRule::new(
                "美食",
                &[
                    "美食", "料理", "菜谱", "做饭", "烹饪", "餐厅", "小吃", "甜品",
                    "蛋糕", "面包", "火锅", "烧烤", "炒菜", "汤", "粥", "面条",
                    "饺子", "包子", "披萨", "寿司", "咖啡", "奶茶", "饮品",
                ],
                &["美食|料理|菜谱|做饭|烹饪", "餐厅|小吃|甜品|蛋糕", "火锅|烧烤|炒菜|面条"],
                3,
            ),
            CategoryRule::new(
                "旅游",
                &[
                    "旅游", "旅行", "游记", "攻略", "景点", "酒店", "民宿", "机票",
                    "自驾", "徒步", "爬山", "海边", "古镇", "城市", "国外", "国内",
                    "拍照", "风景", "文化", "历史", "博物馆", "寺庙",
                ],
                &["旅游|旅行|游记|攻略", "景点|酒店|民宿", "自驾|徒步|爬山|海边"],
                4,
            ),
            CategoryRule::new(
                "生活方式",
                &[
                    "生活", "日常", "家居", "装修", "收纳", "清洁", "植物", "宠物",
                    "读书", "音乐", "电影", "摄影", "手工", "DIY", "艺术", "绘画",
                    "书法", "花艺", "茶道", "咖啡", "香薰", "瑜伽", "冥想",
                ],
                &["生活|日常|家居|装修", "收纳|清洁|植物|宠物", "读书|音乐|电影|摄影"],
                5,
            ),
            CategoryRule::new(
                "健身运动",
                &[
                    "健身", "运动", "锻炼", "减肥", "瘦身", "塑形", "肌肉", "力量",
                    "跑步", "游泳", "瑜伽", "普拉提", "舞蹈", "球类", "户外", "登山",
                    "骑行", "马拉松", "健康", "营养", "蛋白质", "卡路里",
                ],
                &["健身|运动|锻炼|减肥", "瘦身|塑形|肌肉|力量", "跑步|游泳|瑜伽|普拉提"],
                6,
            ),
            CategoryRule::new(
                "学习工作",
                &[
                    "学习", "工作", "职场", "考试", "学生", "上班", "技能", "培训",
                    "英语", "编程", "设计", "写作", "演讲", "时间管理", "效率", "笔记",
                    "规划", "目标", "成长", "自律", "习惯", "思维", "方法",
                ],
                &["学习|工作|职场|考试", "技能|培训|英语|编程", "效率|笔记|规划|目标"],
                7,
            ),
        ],
    )
});

/// 获取内置规则库
pub fn builtin_library() -> &'static RuleLibrary {
    &BUILTIN_LIBRARY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_library_is_valid() {
        let lib = builtin_library();
        assert!(lib.validate().is_ok());
        assert_eq!(lib.categories.len(), 7);
        assert_eq!(lib.max_priority(), 7);
        assert_eq!(lib.version, CATALOG_VERSION);
    }

    #[test]
    fn test_builtin_catalog_order() {
        let names: Vec<&str> = builtin_library()
            .categories
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["美妆护肤", "时尚穿搭", "美食", "旅游", "生活方式", "健身运动", "学习工作"]
        );
    }
}
