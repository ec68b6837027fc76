use gdynya_ui::components::markup_view::MarkupView;
use gdynya_ui::markup::Element;
use gdynya_ui::pages::home::Home;
use gdynya_ui::styled_system::css;
use gdynya_ui::landing;
use leptos::prelude::*;

#[test]
fn markup_view_renders_landing_tree() {
    let html = view! { <MarkupView element=landing()/> }.to_html();

    let main = html
        .find(r#"<main class="d_flex ai_center jc_center">"#)
        .expect("main container");
    let heading = html.find(r#"<h1 class="fs_xl">"#).expect("heading");
    let text = html.find("Hello World!").expect("heading text");
    let heading_end = html.find("</h1>").expect("heading close");
    let main_end = html.find("</main>").expect("main close");

    assert!(main < heading && heading < text);
    assert!(text < heading_end && heading_end < main_end);
}

#[test]
fn unsupported_tag_renders_as_div() {
    let element = Element::new("article")
        .with_classes(css(&[("color", "red")]))
        .with_child("body");
    let html = view! { <MarkupView element=element/> }.to_html();

    let open = html.find(r#"<div class="c_red">"#).expect("div fallback");
    let text = html.find("body").expect("child text");
    let close = html.rfind("</div>").expect("div close");
    assert!(open < text && text < close, "{html}");
    assert!(!html.contains("article"), "{html}");
}

#[test]
fn home_injects_stylesheet_before_page() {
    let html = view! { <Home/> }.to_html();

    let style = html.find("<style>").expect("style element");
    let main = html.find("<main").expect("main container");
    assert!(style < main);
    assert!(html.contains(".fs_xl { font-size: var(--font-sizes-xl); }"), "{html}");
}
