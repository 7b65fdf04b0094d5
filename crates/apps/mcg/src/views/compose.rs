//! Compose modal - new message or reply

use gpui::prelude::*;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::input::{Input, InputEvent, InputState};
use gpui_component::{ActiveTheme, Disableable, Icon, IconName, Sizable};
use log::debug;
use mcg_mail::{ComposeDraft, OutgoingMessage, ReplyContext};

use crate::assets::icons::{Send as SendIcon, Wallet};

/// Events emitted by the ComposeView
pub enum ComposeEvent {
    /// Draft submitted; the modal is already cleared
    Send(OutgoingMessage),
    /// Cancel or close button
    Close,
}

impl EventEmitter<ComposeEvent> for ComposeView {}

#[derive(Clone, Copy)]
enum Field {
    To,
    Subject,
    Body,
}

pub struct ComposeView {
    draft: ComposeDraft,
    to_input: Entity<InputState>,
    subject_input: Entity<InputState>,
    body_input: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl ComposeView {
    pub fn new(reply: Option<&ReplyContext>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let draft = ComposeDraft::from_reply(reply);

        let to_input = cx.new(|cx| {
            let mut state = InputState::new(window, cx).placeholder("Enter .sol name");
            state.set_value(draft.to().to_string(), window, cx);
            state
        });
        let subject_input = cx.new(|cx| {
            let mut state = InputState::new(window, cx).placeholder("Enter subject");
            state.set_value(draft.subject().to_string(), window, cx);
            state
        });
        let body_input = cx.new(|cx| {
            InputState::new(window, cx)
                .multi_line(true)
                .placeholder("Write your message...")
        });

        let subscriptions = vec![
            Self::watch(&to_input, Field::To, cx),
            Self::watch(&subject_input, Field::Subject, cx),
            Self::watch(&body_input, Field::Body, cx),
        ];

        // Replies start in the body, new messages in the recipient field
        if reply.is_some() {
            body_input.update(cx, |state, cx| state.focus(window, cx));
        } else {
            to_input.update(cx, |state, cx| state.focus(window, cx));
        }

        Self {
            draft,
            to_input,
            subject_input,
            body_input,
            _subscriptions: subscriptions,
        }
    }

    fn watch(input: &Entity<InputState>, field: Field, cx: &mut Context<Self>) -> Subscription {
        cx.subscribe(input, move |view, state, event: &InputEvent, cx| {
            if let InputEvent::Change = event {
                let value = state.read(cx).text().to_string();
                view.on_field_change(field, value, cx);
            }
        })
    }

    fn on_field_change(&mut self, field: Field, value: String, cx: &mut Context<Self>) {
        match field {
            // Picking a suggestion writes the input back; that echo must not
            // bring the suggestions back
            Field::To if value == self.draft.to() => return,
            Field::To => self.draft.set_to(value),
            Field::Subject => self.draft.set_subject(value),
            Field::Body => self.draft.set_body(value),
        }
        cx.notify();
    }

    fn choose_suggestion(&mut self, index: usize, window: &mut Window, cx: &mut Context<Self>) {
        let Some(chosen) = self.draft.choose_suggestion(index).map(str::to_string) else {
            return;
        };
        debug!("Recipient suggestion chosen: {}", chosen);
        self.to_input
            .update(cx, |state, cx| state.set_value(chosen, window, cx));
        self.subject_input
            .update(cx, |state, cx| state.focus(window, cx));
        cx.notify();
    }

    fn send(&mut self, cx: &mut Context<Self>) {
        if let Some(outgoing) = self.draft.take_outgoing() {
            cx.emit(ComposeEvent::Send(outgoing));
        }
    }

    fn render_label(&self, label: &'static str, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        div()
            .mb_2()
            .text_xs()
            .text_color(theme.muted_foreground)
            .child(label)
    }

    fn render_suggestions(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        div()
            .mt_2()
            .bg(theme.background)
            .border_1()
            .border_color(theme.border)
            .rounded_lg()
            .shadow_lg()
            .overflow_hidden()
            .children(
                self.draft
                    .suggestions()
                    .iter()
                    .enumerate()
                    .map(|(ix, suggestion)| {
                        div()
                            .id(ElementId::Name(format!("suggestion-{}", ix).into()))
                            .px_4()
                            .py_2()
                            .text_sm()
                            .text_color(theme.foreground)
                            .cursor_pointer()
                            .hover(|style| style.bg(theme.list_hover))
                            .on_click(cx.listener(move |view, _event, window, cx| {
                                view.choose_suggestion(ix, window, cx);
                            }))
                            .child(suggestion.clone())
                    }),
            )
    }
}

impl Render for ComposeView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let bg = theme.background;
        let border = theme.border;
        let fg = theme.foreground;
        let muted = theme.muted_foreground;

        let can_send = self.draft.can_send();
        let has_suggestions = !self.draft.suggestions().is_empty();

        // Full-window overlay with the dialog near the top
        div()
            .key_context("ComposeView")
            .absolute()
            .inset_0()
            .flex()
            .justify_center()
            .pt_20()
            // Backdrop and panel both occlude so clicks never reach the page
            .child(
                div()
                    .absolute()
                    .inset_0()
                    .bg(hsla(0., 0., 0., 0.3))
                    .occlude(),
            )
            .child(
                div()
                    .relative()
                    .occlude()
                    .w(px(672.))
                    .bg(bg)
                    .border_1()
                    .border_color(border)
                    .rounded_xl()
                    .shadow_lg()
                    .flex()
                    .flex_col()
                    // Header
                    .child(
                        div()
                            .px_8()
                            .py_6()
                            .border_b_1()
                            .border_color(border)
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(div().text_lg().text_color(fg).child("New Message"))
                            .child(
                                Button::new("compose-close")
                                    .icon(Icon::new(IconName::Close).small())
                                    .ghost()
                                    .cursor_pointer()
                                    .on_click(cx.listener(|_view, _event, _window, cx| {
                                        cx.emit(ComposeEvent::Close);
                                    })),
                            ),
                    )
                    // Fields
                    .child(
                        div()
                            .p_8()
                            .flex()
                            .flex_col()
                            .gap_5()
                            .child(
                                div()
                                    .child(self.render_label("To", cx))
                                    .child(Input::new(&self.to_input))
                                    .when(has_suggestions, |el| {
                                        el.child(self.render_suggestions(cx))
                                    }),
                            )
                            .child(
                                div()
                                    .child(self.render_label("Subject", cx))
                                    .child(Input::new(&self.subject_input)),
                            )
                            .child(
                                div()
                                    .child(self.render_label("Message", cx))
                                    .child(Input::new(&self.body_input).h(px(240.))),
                            )
                            .child(
                                div()
                                    .pt_2()
                                    .flex()
                                    .items_center()
                                    .gap_2()
                                    .text_xs()
                                    .text_color(muted)
                                    .child(Icon::new(Wallet).small().text_color(muted))
                                    .child("Attach Crypto (V2)"),
                            ),
                    )
                    // Footer
                    .child(
                        div()
                            .px_8()
                            .py_5()
                            .border_t_1()
                            .border_color(border)
                            .flex()
                            .justify_end()
                            .gap_2()
                            .child(
                                Button::new("compose-cancel")
                                    .label("Cancel")
                                    .ghost()
                                    .cursor_pointer()
                                    .on_click(cx.listener(|_view, _event, _window, cx| {
                                        cx.emit(ComposeEvent::Close);
                                    })),
                            )
                            .child(
                                Button::new("compose-send")
                                    .icon(Icon::new(SendIcon).small())
                                    .label("Send")
                                    .primary()
                                    .disabled(!can_send)
                                    .on_click(cx.listener(|view, _event, _window, cx| {
                                        view.send(cx);
                                    })),
                            ),
                    ),
            )
    }
}

