use std::collections::BTreeMap;
use std::fmt::Write;

use super::config::StyleConfig;
use super::css::{kebab_case, Atom};
use crate::markup::Element;

const PREFLIGHT: &str = "*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }\n";

/// 从渲染树中静态提取出的原子规则，按类名排序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    atoms: BTreeMap<String, Atom>,
}

impl Stylesheet {
    pub fn extract(root: &Element) -> Self {
        let mut sheet = Self::default();
        sheet.collect(root);
        log::debug!("提取到 {} 条原子规则", sheet.len());
        sheet
    }

    fn collect(&mut self, element: &Element) {
        for atom in element.classes().atoms() {
            self.atoms
                .entry(atom.class_name())
                .or_insert_with(|| atom.clone());
        }
        for child in element.element_children() {
            self.collect(child);
        }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.atoms.keys().map(String::as_str)
    }

    pub fn render(&self, config: &StyleConfig) -> String {
        let mut out = String::new();
        if config.preflight {
            out.push_str(PREFLIGHT);
        }

        let variables: Vec<_> = config
            .tokens
            .iter()
            .flat_map(|(category, entries)| {
                entries
                    .iter()
                    .map(move |(name, value)| (variable_name(category, name), value))
            })
            .collect();
        if !variables.is_empty() {
            out.push_str(":root {\n");
            for (name, value) in variables {
                let _ = writeln!(out, "  {name}: {value};");
            }
            out.push_str("}\n");
        }

        for (class_name, atom) in &self.atoms {
            let _ = writeln!(
                out,
                ".{} {{ {}: {}; }}",
                escape_identifier(class_name),
                atom.css_property(),
                resolve_value(atom, config)
            );
        }
        out
    }
}

fn resolve_value(atom: &Atom, config: &StyleConfig) -> String {
    match token_category(atom.property()) {
        Some(category) if config.token(category, atom.value()).is_some() => {
            format!("var({})", variable_name(category, atom.value()))
        }
        _ => atom.value().to_string(),
    }
}

fn token_category(property: &str) -> Option<&'static str> {
    match property {
        "fontSize" => Some("fontSizes"),
        "fontWeight" => Some("fontWeights"),
        "lineHeight" => Some("lineHeights"),
        "color" | "background" | "backgroundColor" => Some("colors"),
        "margin" | "padding" | "gap" => Some("spacing"),
        _ => None,
    }
}

fn variable_name(category: &str, name: &str) -> String {
    format!("--{}-{}", kebab_case(category), escape_identifier(name))
}

fn escape_identifier(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if !(ch.is_ascii_alphanumeric() || ch == '_' || ch == '-') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
