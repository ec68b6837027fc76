use super::css::{css, Classes};

/// center 模式的可选参数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CenterOptions {
    pub inline: bool,
}

/// 居中模式：flex 容器，主轴与交叉轴都居中
pub fn center(options: CenterOptions) -> Classes {
    let display = if options.inline { "inline-flex" } else { "flex" };
    css(&[
        ("display", display),
        ("alignItems", "center"),
        ("justifyContent", "center"),
    ])
}
