use gdynya_ui::app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // 日志只用于调试，初始化失败不影响渲染
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("挂载 gdynya-ui");

    leptos::mount::mount_to_body(|| view! { <App/> })
}
