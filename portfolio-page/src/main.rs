use engine::core::app_setup::create_app;

mod engine;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod page;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        // Menu and section reveal are wired before the renderer starts, so
        // they survive a missing or unsupported graphics context.
        page::install_when_ready(page::reveal::RevealPolicy::default());

        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}
