//! Inbox view - displays the message list

use chrono::Utc;
use gpui::prelude::*;
use gpui::*;
use gpui_component::scroll::Scrollbar;
use gpui_component::{ActiveTheme, VirtualListScrollHandle, v_virtual_list};
use log::{debug, error};
use mcg_mail::{MessageId, MessageStore, MessageSummary, list_messages};
use std::rc::Rc;
use std::sync::Arc;

use crate::components::MessageListItem;
use crate::input::{MoveDown, MoveUp, OpenSelected};

/// Height of each message row (sender, subject, preview + padding)
const MESSAGE_ITEM_HEIGHT: f32 = 84.0;

/// Events emitted by the InboxView
pub enum InboxEvent {
    /// A message row was clicked or opened with Enter
    Open(MessageId),
}

impl EventEmitter<InboxEvent> for InboxView {}

pub struct InboxView {
    store: Arc<dyn MessageStore>,
    messages: Vec<MessageSummary>,
    /// Index of the keyboard-highlighted row
    selected_index: Option<usize>,
    error_message: Option<String>,
    scroll_handle: VirtualListScrollHandle,
    item_sizes: Rc<Vec<Size<Pixels>>>,
    focus_handle: FocusHandle,
}

impl InboxView {
    pub fn new(store: Arc<dyn MessageStore>, cx: &mut Context<Self>) -> Self {
        let mut view = Self {
            store,
            messages: Vec::new(),
            selected_index: None,
            error_message: None,
            scroll_handle: VirtualListScrollHandle::new(),
            item_sizes: Rc::new(Vec::new()),
            focus_handle: cx.focus_handle(),
        };
        view.load_messages(cx);
        view
    }

    /// Focus this view for keyboard input
    pub fn focus(&self, window: &mut Window, _cx: &mut Context<Self>) {
        window.focus(&self.focus_handle);
    }

    /// Reload the list from the store (read flags may have changed)
    pub fn load_messages(&mut self, cx: &mut Context<Self>) {
        self.error_message = None;

        match list_messages(self.store.as_ref()) {
            Ok(messages) => {
                debug!("Loaded {} messages", messages.len());
                self.item_sizes = Rc::new(
                    messages
                        .iter()
                        .map(|_| size(px(10000.), px(MESSAGE_ITEM_HEIGHT)))
                        .collect(),
                );
                if let Some(index) = self.selected_index {
                    self.selected_index = messages.len().checked_sub(1).map(|max| index.min(max));
                }
                self.messages = messages;
            }
            Err(e) => {
                error!("Failed to load messages: {}", e);
                self.error_message = Some(format!("Failed to load messages: {}", e));
            }
        }
        cx.notify();
    }

    fn move_up(&mut self, cx: &mut Context<Self>) {
        if self.messages.is_empty() {
            return;
        }
        self.selected_index = Some(self.selected_index.map_or(0, |i| i.saturating_sub(1)));
        cx.notify();
    }

    fn move_down(&mut self, cx: &mut Context<Self>) {
        let Some(max_index) = self.messages.len().checked_sub(1) else {
            return;
        };
        self.selected_index = Some(self.selected_index.map_or(0, |i| (i + 1).min(max_index)));
        cx.notify();
    }

    fn open(&mut self, index: usize, cx: &mut Context<Self>) {
        if let Some(message) = self.messages.get(index) {
            self.selected_index = Some(index);
            cx.emit(InboxEvent::Open(message.id.clone()));
        }
    }

    fn handle_move_up(&mut self, _: &MoveUp, _window: &mut Window, cx: &mut Context<Self>) {
        self.move_up(cx);
    }

    fn handle_move_down(&mut self, _: &MoveDown, _window: &mut Window, cx: &mut Context<Self>) {
        self.move_down(cx);
    }

    fn handle_open_selected(
        &mut self,
        _: &OpenSelected,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let Some(index) = self.selected_index {
            self.open(index, cx);
        }
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        let total_count = self.messages.len();
        let unread_count = self.messages.iter().filter(|m| !m.is_read).count();
        let stats_text = if unread_count > 0 {
            format!("{} messages, {} unread", total_count, unread_count)
        } else {
            format!("{} messages", total_count)
        };

        div()
            .w_full()
            .px_4()
            .py_3()
            .bg(theme.background)
            .border_b_1()
            .border_color(theme.border)
            .flex()
            .justify_between()
            .items_center()
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.foreground)
                    .child("Inbox"),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(theme.muted_foreground)
                    .child(stats_text),
            )
    }

    fn render_error(&self, message: &str, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        div()
            .flex()
            .flex_1()
            .justify_center()
            .items_center()
            .p_4()
            .child(
                div()
                    .p_4()
                    .bg(theme.danger)
                    .rounded_lg()
                    .child(
                        div()
                            .text_sm()
                            .text_color(theme.danger_foreground)
                            .child(message.to_string()),
                    ),
            )
    }

    fn render_empty(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        div().flex().flex_1().justify_center().items_center().child(
            div()
                .text_sm()
                .text_color(theme.muted_foreground)
                .child("Your inbox is empty"),
        )
    }

    fn render_message_list(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let selected_index = self.selected_index;
        let now = Utc::now();

        div()
            .relative()
            .flex()
            .flex_col()
            .flex_1()
            .overflow_hidden()
            .bg(theme.list)
            .child(
                v_virtual_list(
                    cx.entity().clone(),
                    "message-list",
                    self.item_sizes.clone(),
                    move |view, visible_range, _window, cx| {
                        visible_range
                            .map(|ix| {
                                let message = view.messages[ix].clone();
                                let is_selected = selected_index == Some(ix);

                                div()
                                    .id(ElementId::Name(message.id.0.clone().into()))
                                    .h(px(MESSAGE_ITEM_HEIGHT))
                                    .w_full()
                                    .cursor_pointer()
                                    .on_click(cx.listener(move |view, _event, _window, cx| {
                                        view.open(ix, cx);
                                    }))
                                    .child(MessageListItem::new(message, is_selected, now))
                            })
                            .collect()
                    },
                )
                .flex_1()
                .track_scroll(&self.scroll_handle),
            )
            .child(Scrollbar::vertical(&self.scroll_handle))
    }
}

impl Render for InboxView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        div()
            .key_context("InboxView")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::handle_move_up))
            .on_action(cx.listener(Self::handle_move_down))
            .on_action(cx.listener(Self::handle_open_selected))
            .flex()
            .flex_col()
            .size_full()
            .bg(theme.background)
            .child(self.render_header(cx))
            .child(if let Some(ref error) = self.error_message.clone() {
                self.render_error(error, cx).into_any_element()
            } else if self.messages.is_empty() {
                self.render_empty(cx).into_any_element()
            } else {
                self.render_message_list(cx).into_any_element()
            })
    }
}
