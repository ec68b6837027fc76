use leptos::prelude::*;

#[component]
pub fn StyleSheet(#[prop(into)] css: String) -> impl IntoView {
    view! { <style>{css}</style> }
}
