#[cfg(target_arch = "wasm32")]
fn main() {
    use staffdesk_frontend::{config, router};
    use wasm_bindgen_futures::spawn_local;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting Staffdesk frontend: initializing runtime config");

    spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
        router::mount_app();
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // CSR-only application; outside the browser there is nothing to run.
}
