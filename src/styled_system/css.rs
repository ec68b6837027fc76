use std::fmt;

/// 已知样式属性的类名缩写，未列出的属性使用 kebab-case 全名
const SHORTHANDS: &[(&str, &str)] = &[
    ("alignItems", "ai"),
    ("background", "bg"),
    ("backgroundColor", "bg-c"),
    ("color", "c"),
    ("display", "d"),
    ("flexDirection", "flex-d"),
    ("fontSize", "fs"),
    ("fontWeight", "fw"),
    ("gap", "gap"),
    ("height", "h"),
    ("justifyContent", "jc"),
    ("lineHeight", "lh"),
    ("margin", "m"),
    ("minHeight", "min-h"),
    ("padding", "p"),
    ("textAlign", "ta"),
    ("width", "w"),
];

/// 单条声明的原子类，例如 `fontSize: xl` -> `fs_xl`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    property: String,
    value: String,
}

impl Atom {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn class_name(&self) -> String {
        let value = self.value.split_whitespace().collect::<Vec<_>>().join("_");
        format!("{}_{}", shorthand(&self.property), value)
    }

    /// CSS 中使用的属性名
    pub fn css_property(&self) -> String {
        kebab_case(&self.property)
    }
}

/// 一组去重后的原子类，按插入顺序输出
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classes {
    atoms: Vec<Atom>,
}

impl Classes {
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// 同一属性后写覆盖先写，位置保持不变
    pub fn insert(&mut self, atom: Atom) {
        match self
            .atoms
            .iter_mut()
            .find(|existing| existing.property == atom.property)
        {
            Some(existing) => *existing = atom,
            None => self.atoms.push(atom),
        }
    }
}

impl fmt::Display for Classes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, atom) in self.atoms.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&atom.class_name())?;
        }
        Ok(())
    }
}

/// 通用样式函数：把属性/取值映射转换为原子类，空白取值直接忽略
pub fn css(style: &[(&str, &str)]) -> Classes {
    let mut classes = Classes::default();
    for (property, value) in style {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        classes.insert(Atom::new(*property, value));
    }
    classes
}

fn shorthand(property: &str) -> String {
    SHORTHANDS
        .iter()
        .find(|(name, _)| *name == property)
        .map(|(_, short)| short.to_string())
        .unwrap_or_else(|| kebab_case(property))
}

pub(crate) fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_maps_to_shorthand_class() {
        assert_eq!(css(&[("fontSize", "xl")]).to_string(), "fs_xl");
    }

    #[test]
    fn unknown_property_uses_kebab_case() {
        let classes = css(&[("borderRadius", "4px")]);
        assert_eq!(classes.to_string(), "border-radius_4px");
        assert_eq!(classes.atoms()[0].css_property(), "border-radius");
    }

    #[test]
    fn later_value_for_same_property_wins_in_place() {
        let classes = css(&[("fontSize", "sm"), ("color", "red"), ("fontSize", "xl")]);
        assert_eq!(classes.to_string(), "fs_xl c_red");
    }

    #[test]
    fn whitespace_in_value_becomes_underscore() {
        let classes = css(&[("margin", "0  auto")]);
        assert_eq!(classes.to_string(), "m_0_auto");
    }

    #[test]
    fn blank_values_are_skipped() {
        let classes = css(&[("margin", "   "), ("padding", ""), ("color", " red ")]);
        assert_eq!(classes.to_string(), "c_red");
        assert_eq!(classes.atoms()[0].value(), "red");
    }

    #[test]
    fn empty_style_has_no_classes() {
        let classes = css(&[]);
        assert!(classes.is_empty());
        assert_eq!(classes.to_string(), "");
    }
}
