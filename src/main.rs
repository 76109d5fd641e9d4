#[cfg(target_arch = "wasm32")]
pub fn main() {
    use leptos::prelude::mount_to_body;
    use tweeter_web::app::App;

    tweeter_web::init_logging();
    tracing::info!(
        version = tweeter_web::app_lib::PKG_VERSION,
        commit = tweeter_web::app_lib::GIT_COMMIT_HASH,
        "starting tweeter web"
    );
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
