use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Deserialize;

use super::error::StyleError;

const EMBEDDED_CONFIG: &str = include_str!("../../styled.config.json");

static GLOBAL: LazyLock<StyleConfig> = LazyLock::new(StyleConfig::embedded);

/// 分类 -> token 名 -> 取值
pub type Tokens = BTreeMap<String, BTreeMap<String, String>>;

/// 样式系统配置：design token 与输出选项
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleConfig {
    /// 是否在原子规则之前输出基础 reset
    pub preflight: bool,
    pub tokens: Tokens,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let mut tokens = Tokens::new();
        tokens.insert(
            "fontSizes".into(),
            table(&[
                ("xs", "0.75rem"),
                ("sm", "0.875rem"),
                ("md", "1rem"),
                ("lg", "1.125rem"),
                ("xl", "1.25rem"),
                ("2xl", "1.5rem"),
                ("3xl", "1.875rem"),
                ("4xl", "2.25rem"),
            ]),
        );
        tokens.insert(
            "fontWeights".into(),
            table(&[("normal", "400"), ("medium", "500"), ("bold", "700")]),
        );
        tokens.insert(
            "lineHeights".into(),
            table(&[("tight", "1.25"), ("normal", "1.5"), ("loose", "2")]),
        );
        tokens.insert(
            "spacing".into(),
            table(&[
                ("0", "0rem"),
                ("1", "0.25rem"),
                ("2", "0.5rem"),
                ("4", "1rem"),
                ("8", "2rem"),
            ]),
        );
        Self {
            preflight: true,
            tokens,
        }
    }
}

impl StyleConfig {
    pub fn from_json(source: &str) -> Result<Self, StyleError> {
        let config: StyleConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// 读取编译期嵌入的 styled.config.json，失败时回退到默认配置
    pub fn embedded() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("嵌入的样式配置无效，使用默认配置: {e}");
                Self::default()
            }
        }
    }

    pub fn global() -> &'static StyleConfig {
        &GLOBAL
    }

    pub fn token(&self, category: &str, name: &str) -> Option<&str> {
        self.tokens
            .get(category)
            .and_then(|entries| entries.get(name))
            .map(String::as_str)
    }

    fn validate(&self) -> Result<(), StyleError> {
        for (category, entries) in &self.tokens {
            if entries.is_empty() {
                return Err(StyleError::EmptyTokenCategory(category.clone()));
            }
            if let Some(name) = entries.keys().find(|name| !is_valid_token_name(name)) {
                return Err(StyleError::InvalidTokenName {
                    category: category.clone(),
                    name: name.clone(),
                });
            }
        }
        Ok(())
    }
}

fn is_valid_token_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.'))
}

fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = StyleConfig::from_json(EMBEDDED_CONFIG).unwrap();
        assert!(config.preflight);
        assert_eq!(config.token("fontSizes", "xl"), Some("1.25rem"));
    }

    #[test]
    fn default_matches_embedded_file() {
        let embedded = StyleConfig::from_json(EMBEDDED_CONFIG).unwrap();
        assert_eq!(embedded, StyleConfig::default());
        assert_eq!(StyleConfig::default().token("spacing", "4"), Some("1rem"));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = StyleConfig::from_json(r#"{ "preflight": false }"#).unwrap();
        assert!(!config.preflight);
        assert_eq!(config.tokens, StyleConfig::default().tokens);
    }

    #[test]
    fn tokens_replace_default_table() {
        let config =
            StyleConfig::from_json(r##"{ "tokens": { "colors": { "ink": "#111" } } }"##).unwrap();
        assert!(config.preflight);
        assert_eq!(config.token("colors", "ink"), Some("#111"));
        assert_eq!(config.token("fontSizes", "xl"), None);
    }

    #[test]
    fn rejects_invalid_token_name() {
        let err = StyleConfig::from_json(r#"{ "tokens": { "fontSizes": { "x l": "1rem" } } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            StyleError::InvalidTokenName { ref category, ref name }
                if category == "fontSizes" && name == "x l"
        ));
    }

    #[test]
    fn rejects_empty_category() {
        let err = StyleConfig::from_json(r#"{ "tokens": { "colors": {} } }"#).unwrap_err();
        assert!(matches!(err, StyleError::EmptyTokenCategory(ref c) if c == "colors"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = StyleConfig::from_json("{ preflight: ").unwrap_err();
        assert!(matches!(err, StyleError::Config(_)));
    }
}
