//! Message view - displays a single message with its payment card

use gpui::prelude::*;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{ActiveTheme, Disableable, Icon, IconName, Sizable, Size as ComponentSize};
use mcg_mail::{MessageDetail, PaymailAttachment};

use crate::assets::icons::{Forward, Reply as ReplyIcon, Sparkles, Wallet};
use crate::input::{Claim, Reply};

/// Events emitted by the MessageView
pub enum MessageViewEvent {
    Back,
    Reply,
    Claim,
}

impl EventEmitter<MessageViewEvent> for MessageView {}

pub struct MessageView {
    detail: MessageDetail,
    focus_handle: FocusHandle,
}

impl MessageView {
    pub fn new(detail: MessageDetail, cx: &mut Context<Self>) -> Self {
        Self {
            detail,
            focus_handle: cx.focus_handle(),
        }
    }

    /// Focus this view for keyboard input
    pub fn focus(&self, window: &mut Window, _cx: &mut Context<Self>) {
        window.focus(&self.focus_handle);
    }

    /// Replace the displayed message (e.g., after a claim)
    pub fn set_detail(&mut self, detail: MessageDetail, cx: &mut Context<Self>) {
        self.detail = detail;
        cx.notify();
    }

    fn handle_reply(&mut self, _: &Reply, _window: &mut Window, cx: &mut Context<Self>) {
        cx.emit(MessageViewEvent::Reply);
    }

    fn handle_claim(&mut self, _: &Claim, _window: &mut Window, cx: &mut Context<Self>) {
        if self.detail.paymail.as_ref().is_some_and(|p| !p.claimed) {
            cx.emit(MessageViewEvent::Claim);
        }
    }

    fn render_toolbar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let muted = theme.muted_foreground;

        div()
            .flex()
            .items_center()
            .justify_between()
            .mb_6()
            .child(
                Button::new("back-button")
                    .icon(Icon::new(IconName::ArrowLeft).with_size(ComponentSize::Small))
                    .label("Back")
                    .ghost()
                    .cursor_pointer()
                    .on_click(cx.listener(|_view, _event, _window, cx| {
                        cx.emit(MessageViewEvent::Back);
                    })),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .child(
                        Button::new("reply-button")
                            .icon(Icon::new(ReplyIcon).with_size(ComponentSize::Small))
                            .label("Reply")
                            .ghost()
                            .cursor_pointer()
                            .on_click(cx.listener(|_view, _event, _window, cx| {
                                cx.emit(MessageViewEvent::Reply);
                            })),
                    )
                    // Forward and Delete have no behavior yet
                    .child(
                        Button::new("forward-button")
                            .icon(
                                Icon::new(Forward)
                                    .with_size(ComponentSize::Small)
                                    .text_color(muted),
                            )
                            .label("Forward")
                            .ghost(),
                    )
                    .child(
                        Button::new("delete-button")
                            .icon(
                                Icon::new(IconName::Delete)
                                    .with_size(ComponentSize::Small)
                                    .text_color(muted),
                            )
                            .label("Delete")
                            .ghost(),
                    ),
            )
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let detail = &self.detail;

        div()
            .flex_shrink_0()
            .px_8()
            .py_6()
            .border_b_1()
            .border_color(theme.border)
            .child(
                div()
                    .mb_6()
                    .text_3xl()
                    .text_color(theme.foreground)
                    .child(detail.subject.clone()),
            )
            .child(
                div()
                    .flex()
                    .items_start()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .items_start()
                            .gap_3()
                            .child(
                                div()
                                    .size_9()
                                    .rounded_full()
                                    .bg(theme.primary)
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .text_xs()
                                    .text_color(theme.primary_foreground)
                                    .child(detail.from_initials.clone()),
                            )
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .child(
                                        div()
                                            .flex()
                                            .items_center()
                                            .gap_2()
                                            .child(
                                                div()
                                                    .text_sm()
                                                    .text_color(theme.foreground)
                                                    .child(detail.from.clone()),
                                            )
                                            .child(
                                                div()
                                                    .text_xs()
                                                    .text_color(theme.muted_foreground)
                                                    .child(format!(
                                                        "({})",
                                                        detail.from_short_address
                                                    )),
                                            ),
                                    )
                                    .child(
                                        div()
                                            .text_xs()
                                            .text_color(theme.muted_foreground)
                                            .child(format!("to {}", detail.to)),
                                    ),
                            ),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(theme.muted_foreground)
                            .child(detail.full_date.clone()),
                    ),
            )
    }

    fn render_paymail(
        &self,
        paymail: &PaymailAttachment,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let theme = cx.theme();
        let claimed = paymail.claimed;

        div().flex_shrink_0().mx_8().mt_6().child(
            div()
                .p_5()
                .rounded_xl()
                .border_1()
                .border_color(theme.border)
                .bg(theme.secondary)
                .flex()
                .items_center()
                .justify_between()
                .child(
                    div()
                        .flex()
                        .items_center()
                        .gap_4()
                        .child(
                            div()
                                .size_10()
                                .rounded_full()
                                .bg(theme.background)
                                .flex()
                                .items_center()
                                .justify_center()
                                .child(Icon::new(Wallet).text_color(theme.primary)),
                        )
                        .child(
                            div()
                                .flex()
                                .flex_col()
                                .child(
                                    div()
                                        .text_sm()
                                        .text_color(theme.secondary_foreground)
                                        .child("Payment Attached"),
                                )
                                .child(
                                    div()
                                        .text_sm()
                                        .text_color(theme.muted_foreground)
                                        .child(format!(
                                            "This email includes {}",
                                            paymail.display()
                                        )),
                                ),
                        ),
                )
                .child(if claimed {
                    div()
                        .text_sm()
                        .text_color(theme.muted_foreground)
                        .child("Claimed")
                        .into_any_element()
                } else {
                    Button::new("claim-button")
                        .label("Claim")
                        .primary()
                        .cursor_pointer()
                        .on_click(cx.listener(|_view, _event, _window, cx| {
                            cx.emit(MessageViewEvent::Claim);
                        }))
                        .into_any_element()
                }),
        )
    }

    fn render_ai_toolbar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        div().flex_shrink_0().mx_8().my_6().child(
            div()
                .p_3()
                .rounded_full()
                .border_1()
                .border_color(theme.border)
                .flex()
                .items_center()
                .gap_2()
                .child(
                    Icon::new(Sparkles)
                        .small()
                        .text_color(theme.muted_foreground),
                )
                .child(
                    div()
                        .text_xs()
                        .text_color(theme.muted_foreground)
                        .child("AI Toolbar (V2)"),
                )
                .child(div().flex_1())
                .child(
                    Button::new("ai-summarize")
                        .label("Summarize")
                        .xsmall()
                        .ghost()
                        .disabled(true),
                )
                .child(
                    Button::new("ai-related")
                        .label("Find Related")
                        .xsmall()
                        .ghost()
                        .disabled(true),
                ),
        )
    }

    fn render_body(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        // One element per line keeps blank lines and indentation intact
        div()
            .id("message-body")
            .flex_1()
            .overflow_y_scroll()
            .px_8()
            .pb_8()
            .text_sm()
            .text_color(theme.foreground)
            .children(
                self.detail
                    .body
                    .split('\n')
                    .map(|line| div().min_h(px(20.)).child(line.to_string())),
            )
    }
}

impl Render for MessageView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let bg = theme.background;
        let paymail = self.detail.paymail.clone();

        div()
            .key_context("MessageView")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::handle_reply))
            .on_action(cx.listener(Self::handle_claim))
            .flex()
            .flex_col()
            .size_full()
            .bg(bg)
            .child(
                div()
                    .px_8()
                    .pt_6()
                    .child(self.render_toolbar(cx)),
            )
            .child(self.render_header(cx))
            .when_some(paymail, |el, paymail| {
                el.child(self.render_paymail(&paymail, cx))
            })
            .child(self.render_ai_toolbar(cx))
            .child(self.render_body(cx))
    }
}
