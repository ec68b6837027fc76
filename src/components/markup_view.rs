use leptos::html;
use leptos::prelude::*;

use crate::markup::{Element, Node};

/// 把 markup 渲染树挂成 leptos 视图
#[component]
pub fn MarkupView(element: Element) -> impl IntoView {
    render_element(element)
}

fn render_element(element: Element) -> AnyView {
    let (tag, classes, children) = element.into_parts();
    let class = classes.to_string();
    let children: Vec<AnyView> = children.into_iter().map(render_node).collect();

    match tag.as_str() {
        "main" => html::main().class(class).child(children).into_any(),
        "section" => html::section().class(class).child(children).into_any(),
        "h1" => html::h1().class(class).child(children).into_any(),
        "h2" => html::h2().class(class).child(children).into_any(),
        "p" => html::p().class(class).child(children).into_any(),
        "span" => html::span().class(class).child(children).into_any(),
        "div" => html::div().class(class).child(children).into_any(),
        other => {
            log::warn!("不支持的标签 <{other}>，按 div 渲染");
            html::div().class(class).child(children).into_any()
        }
    }
}

fn render_node(node: Node) -> AnyView {
    match node {
        Node::Element(element) => render_element(element),
        Node::Text(text) => text.into_any(),
    }
}
