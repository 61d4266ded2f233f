//! Workspace - Main Shell
//!
//! Holds the title bar and the composer, and renders the notification layer.

use gpui::{Context, Entity, Window, div, prelude::*};
use gpui_component::{ActiveTheme, Root, v_flex};

use crate::views::{ComposerTitleBar, ComposerView};

/// Main workspace containing the application layout
pub struct Workspace {
    title_bar: Entity<ComposerTitleBar>,
    composer: Entity<ComposerView>,
}

impl Workspace {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let title_bar = cx.new(|cx| ComposerTitleBar::new(window, cx));
        let composer = cx.new(|cx| ComposerView::new(window, cx));

        Self { title_bar, composer }
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(self.title_bar.clone())
            .child(div().flex_1().w_full().child(self.composer.clone()))
            .children(Root::render_notification_layer(window, cx))
    }
}
