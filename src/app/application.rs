//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    AnyView, App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};
use gpui_component::{Root, Theme, ThemeMode};
use tracing::{error, info, warn};

use crate::app::workspace::Workspace;
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::helpers::{MenuAction, new_key_bindings};
use crate::states::{
    AppSettings, ComposerGlobalStore, LocaleAction, ThemeAction, update_app_state_and_save,
};

/// Apply a theme choice; `None` follows the system appearance
fn apply_theme(mode: Option<ThemeMode>, cx: &mut App) {
    match mode {
        Some(mode) => Theme::change(mode, None, cx),
        None => Theme::sync_system_appearance(None, cx),
    }
}

fn on_theme_action(action: &ThemeAction, cx: &mut App) {
    let mode = match action {
        ThemeAction::Light => Some(ThemeMode::Light),
        ThemeAction::Dark => Some(ThemeMode::Dark),
        ThemeAction::System => None,
    };
    apply_theme(mode, cx);
    update_app_state_and_save(cx, "save_theme", move |state, _cx| {
        state.set_theme(mode);
    });
}

fn on_locale_action(action: &LocaleAction, cx: &mut App) {
    let locale = match action {
        LocaleAction::En => "en",
        LocaleAction::Zh => "zh",
    };
    update_app_state_and_save(cx, "save_locale", move |state, _cx| {
        if let Err(e) = state.set_locale(locale) {
            warn!(error = %e, "Locale not applied");
        }
    });
}

/// Load persisted settings, falling back to defaults
fn load_settings() -> AppSettings {
    let settings = AppSettings::try_load().unwrap_or_else(|e| {
        error!(error = %e, "Failed to load settings, using defaults");
        AppSettings::new()
    });

    if let Err(e) = settings.validate_endpoint() {
        warn!(error = %e, "Configured endpoint is unusable, using the default");
    }

    settings
}

/// Run the Mail Composer application
pub fn run_app() {
    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(|cx: &mut App| {
        gpui_component::init(cx);
        cx.bind_keys(new_key_bindings());

        // Set up action handlers
        cx.on_action(|action: &MenuAction, cx: &mut App| match action {
            MenuAction::Quit => cx.quit(),
        });
        cx.on_action(on_theme_action);
        cx.on_action(on_locale_action);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global state
        let settings = load_settings();
        apply_theme(settings.theme(), cx);
        info!(locale = settings.locale(), "Settings loaded");
        let store = ComposerGlobalStore::init(settings, cx);
        cx.set_global(store);

        // Create main window
        let bounds = Bounds::centered(
            None,
            size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Mail Composer")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let workspace = cx.new(|cx| Workspace::new(window, cx));
            cx.new(|cx| Root::new(AnyView::from(workspace), window, cx))
        });

        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
