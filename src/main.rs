//! Mail Composer - Main Entry Point

use mail_composer::app::application::run_app;

fn main() {
    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = mail_composer::logging::init();

    tracing::info!("Starting Mail Composer...");

    run_app();
}
