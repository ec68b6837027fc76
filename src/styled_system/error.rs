use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("样式配置解析失败: {0}")]
    Config(#[from] serde_json::Error),
    #[error("token 分类为空: {0}")]
    EmptyTokenCategory(String),
    #[error("非法的 token 名称: {category}.{name}")]
    InvalidTokenName { category: String, name: String },
}
