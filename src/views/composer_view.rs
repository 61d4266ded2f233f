//! Composer View
//!
//! The send-email form: recipient, subject and message inputs, inline field
//! errors, and the send button. Inputs and the button are disabled while a
//! request is in flight.

use crate::domain::draft::Field;
use crate::domain::notice::{Notice, NoticeKind};
use crate::domain::validation::FieldError;
use crate::helpers::{ComposerAction, SEND_KEYSTROKE, humanize_keystroke};
use crate::states::{
    ComposerEvent, ComposerGlobalStore, ComposerState, i18n_composer, i18n_field_error,
    i18n_format, i18n_notice,
};
use gpui::{App, Context, Entity, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Disableable, WindowExt,
    button::{Button, ButtonVariants},
    input::{Input, InputEvent, InputState},
    label::Label,
    notification::Notification,
    v_flex,
};
use rust_i18n::t;

/// Width of the form card
const CARD_WIDTH: f32 = 448.0;
/// Visible rows of the message input
const BODY_ROWS: usize = 4;

/// Whether an input event is the send shortcut pressed inside a field.
///
/// Plain enter in the message input inserts a newline and must not send.
fn is_send_keystroke(event: &InputEvent) -> bool {
    matches!(event, InputEvent::PressEnter { secondary: true })
}

/// Placeholder for a field in the given locale
fn placeholder_text(field: Field, locale: &str) -> String {
    match field {
        Field::RecipientEmail => "recipient@example.com".to_string(),
        Field::Subject => t!("composer.subject_placeholder", locale = locale).to_string(),
        Field::BodyText => t!("composer.body_placeholder", locale = locale).to_string(),
    }
}

/// Send-email form component
pub struct ComposerView {
    /// Composer state entity
    composer_state: Entity<ComposerState>,
    /// Locale the placeholders were last rendered in
    placeholder_locale: String,
    recipient_input: Entity<InputState>,
    subject_input: Entity<InputState>,
    body_input: Entity<InputState>,
    /// Subscriptions
    _subscriptions: Vec<Subscription>,
}

impl ComposerView {
    /// Create a new composer view
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<ComposerGlobalStore>();
        let app_state = store.app_state();
        let composer_state = store.composer_state();
        let locale = store.read(cx).locale().to_string();

        let recipient_input = cx.new(|cx| {
            InputState::new(window, cx).placeholder(placeholder_text(Field::RecipientEmail, &locale))
        });
        let subject_input = cx.new(|cx| {
            InputState::new(window, cx).placeholder(placeholder_text(Field::Subject, &locale))
        });
        let body_input = cx.new(|cx| {
            InputState::new(window, cx)
                .multi_line(true)
                .rows(BODY_ROWS)
                .placeholder(placeholder_text(Field::BodyText, &locale))
        });

        let mut subscriptions = Vec::new();

        // Mirror every edit into the draft; the send keystroke inside an
        // input is consumed by the input and arrives here as PressEnter
        for (field, input) in [
            (Field::RecipientEmail, &recipient_input),
            (Field::Subject, &subject_input),
            (Field::BodyText, &body_input),
        ] {
            subscriptions.push(cx.subscribe(input, move |this, state, event, cx| {
                if matches!(event, InputEvent::Change) {
                    let value = state.read(cx).value().to_string();
                    this.composer_state.update(cx, |composer, cx| {
                        composer.update_field(field, value, cx);
                    });
                } else if is_send_keystroke(event) {
                    this.submit(cx);
                }
            }));
        }

        // Placeholders are plain input state, re-translate them on locale change
        subscriptions.push(cx.observe_in(&app_state, window, |this, model, window, cx| {
            let locale = model.read(cx).locale().to_string();
            if this.placeholder_locale != locale {
                this.apply_placeholders(&locale, window, cx);
                this.placeholder_locale = locale;
            }
            cx.notify();
        }));

        // Re-render on submitting / error changes
        subscriptions.push(cx.observe(&composer_state, |_this, _model, cx| {
            cx.notify();
        }));

        // Notifications and draft resets need the window
        subscriptions.push(cx.subscribe_in(
            &composer_state,
            window,
            |this, _state, event: &ComposerEvent, window, cx| match event {
                ComposerEvent::DraftReset => this.clear_inputs(window, cx),
                ComposerEvent::Notify(notice) => Self::push_notice(notice, window, cx),
            },
        ));

        Self {
            composer_state,
            placeholder_locale: locale,
            recipient_input,
            subject_input,
            body_input,
            _subscriptions: subscriptions,
        }
    }

    fn input_for(&self, field: Field) -> &Entity<InputState> {
        match field {
            Field::RecipientEmail => &self.recipient_input,
            Field::Subject => &self.subject_input,
            Field::BodyText => &self.body_input,
        }
    }

    fn apply_placeholders(&mut self, locale: &str, window: &mut Window, cx: &mut Context<Self>) {
        for field in Field::ALL {
            let text = placeholder_text(field, locale);
            self.input_for(field).update(cx, |state, cx| {
                state.set_placeholder(text, window, cx);
            });
        }
    }

    fn clear_inputs(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        for field in Field::ALL {
            self.input_for(field).update(cx, |state, cx| {
                state.set_value("", window, cx);
            });
        }
    }

    fn push_notice(notice: &Notice, window: &mut Window, cx: &mut App) {
        let title = i18n_notice(cx, &notice.title);
        let message = i18n_notice(cx, &notice.description);

        let notification = match notice.kind {
            NoticeKind::Success => Notification::success(message),
            NoticeKind::Error => Notification::error(message),
        }
        .title(title);

        window.push_notification(notification, cx);
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        self.composer_state.update(cx, |state, cx| state.submit(cx));
    }

    fn on_send_action(&mut self, action: &ComposerAction, _window: &mut Window, cx: &mut Context<Self>) {
        match action {
            ComposerAction::Send => self.submit(cx),
        }
    }

    /// Render one labelled input with its inline error
    fn render_field(
        &self,
        field: Field,
        error: Option<FieldError>,
        submitting: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let label = i18n_composer(cx, &format!("{}_label", field.i18n_key()));
        let error_text = error.map(|e| i18n_field_error(cx, e));
        let danger = cx.theme().danger;

        v_flex()
            .w_full()
            .gap_2()
            .child(Label::new(label).text_sm())
            .child(Input::new(self.input_for(field)).disabled(submitting))
            .when_some(error_text, |this, text| {
                this.child(Label::new(text).text_sm().text_color(danger))
            })
    }
}

impl Render for ComposerView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (submitting, errors) = {
            let state = self.composer_state.read(cx);
            (state.is_submitting(), state.composer().errors().clone())
        };

        let send_label = if submitting {
            i18n_composer(cx, "sending")
        } else {
            i18n_composer(cx, "send")
        };
        let shortcut = humanize_keystroke(SEND_KEYSTROKE);
        let send_tooltip = i18n_format(cx, "composer.send_tooltip", &[("shortcut", shortcut.as_str())]);

        let send_btn = Button::new("send-email")
            .primary()
            .label(send_label)
            .loading(submitting)
            .disabled(submitting)
            .tooltip(send_tooltip)
            .on_click(cx.listener(|this, _, _, cx| this.submit(cx)));

        let fields: Vec<_> = Field::ALL
            .into_iter()
            .map(|field| {
                self.render_field(field, errors.get(field), submitting, cx)
                    .into_any_element()
            })
            .collect();

        div()
            .id("composer")
            .key_context("MailComposer")
            .on_action(cx.listener(Self::on_send_action))
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .p_4()
            .bg(cx.theme().secondary)
            .child(
                v_flex()
                    .w(px(CARD_WIDTH))
                    .p_6()
                    .gap_4()
                    .rounded_lg()
                    .border_1()
                    .border_color(cx.theme().border)
                    .bg(cx.theme().background)
                    // Header
                    .child(
                        v_flex()
                            .items_center()
                            .gap_1()
                            .child(Label::new(i18n_composer(cx, "title")).text_xl())
                            .child(
                                Label::new(i18n_composer(cx, "description"))
                                    .text_sm()
                                    .text_color(cx.theme().muted_foreground),
                            ),
                    )
                    .children(fields)
                    .child(div().w_full().pt_2().child(send_btn)),
            )
    }
}
