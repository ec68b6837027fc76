use leptos::prelude::*;

use crate::components::markup_view::MarkupView;
use crate::components::style_sheet::StyleSheet;
use crate::markup::Element;
use crate::styled_system::{center, css, CenterOptions, StyleConfig, Stylesheet};

/// 首页渲染树：居中的容器内一个标题
pub fn landing() -> Element {
    Element::new("main")
        .with_classes(center(CenterOptions::default()))
        .with_child(
            Element::new("h1")
                .with_classes(css(&[("fontSize", "xl")]))
                .with_child("Hello World!"),
        )
}

#[component]
pub fn Home() -> impl IntoView {
    let page = landing();
    let sheet = Stylesheet::extract(&page).render(StyleConfig::global());

    view! {
        <StyleSheet css=sheet/>
        <MarkupView element=page/>
    }
}
