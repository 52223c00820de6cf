//! 匹配文本构造：标题、正文、标签以空格拼接后统一转小写

/// 构造匹配文本
pub fn build_subject(title: &str, body: &str, tags: &[String]) -> String {
    format!("{} {} {}", title, body, tags.join(" ")).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_subject_lowercases_and_joins() {
        let tags = vec!["DIY".to_string(), "手工".to_string()];
        assert_eq!(build_subject("My 周末", "Body", &tags), "my 周末 body diy 手工");
    }

    #[test]
    fn test_build_subject_empty() {
        assert_eq!(build_subject("", "", &[]).trim(), "");
    }
}
