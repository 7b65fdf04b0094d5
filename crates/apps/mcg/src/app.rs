//! Root application component for mcg.mail
//!
//! Owns the application state and routes every user intent through it.
//! Child views emit events; this component applies them and refreshes the
//! views that depend on the result.

use gpui::prelude::*;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{ActiveTheme, Icon, IconName, Theme, ThemeMode};
use log::{debug, error, info, warn};
use mcg_mail::theme::{self, ResolvedTheme};
use mcg_mail::{AppState, MessageId, OutgoingMessage, Page, SettingsModel, ThemePreference};

use crate::components::{ShortcutsHelp, SidebarItem, TopBar};
use crate::input::{
    Compose, Dismiss, GoToInbox, GoToSent, GoToSettings, GoToSpam, PAGE_CONTEXT, ShowShortcuts,
    ToggleTheme,
};
use crate::views::{
    ComposeEvent, ComposeView, ConnectScreen, InboxEvent, InboxView, MessageView,
    MessageViewEvent, PlaceholderView, SettingsView,
};

/// Apply a theme preference to the gpui-component theme
pub fn apply_theme(preference: ThemePreference, window: Option<&mut Window>, cx: &mut App) {
    let system_dark = matches!(
        cx.window_appearance(),
        WindowAppearance::Dark | WindowAppearance::VibrantDark
    );
    let mode = match preference.resolve(system_dark) {
        ResolvedTheme::Light => ThemeMode::Light,
        ResolvedTheme::Dark => ThemeMode::Dark,
    };
    Theme::change(mode, window, cx);
}

/// Root application state
pub struct McgApp {
    state: AppState,
    settings: SettingsModel,
    theme_preference: ThemePreference,
    inbox_view: Entity<InboxView>,
    message_view: Option<Entity<MessageView>>,
    compose_view: Option<Entity<ComposeView>>,
    show_shortcuts: bool,
    focus_handle: FocusHandle,
    /// Focus target for pages without their own view (Sent, Spam, Settings)
    page_focus_handle: FocusHandle,
}

impl McgApp {
    pub fn new(
        state: AppState,
        theme_preference: ThemePreference,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let store = state.store();
        let inbox_view = cx.new(|cx| InboxView::new(store, cx));
        cx.subscribe_in(&inbox_view, window, Self::handle_inbox_event)
            .detach();

        let focus_handle = cx.focus_handle();
        let page_focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        Self {
            state,
            settings: SettingsModel::default(),
            theme_preference,
            inbox_view,
            message_view: None,
            compose_view: None,
            show_shortcuts: false,
            focus_handle,
            page_focus_handle,
        }
    }

    // === Intents ===

    pub fn connect(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.state.connect();
        self.focus_current(window, cx);
        cx.notify();
    }

    /// Open a message in the detail view
    pub fn open_message(&mut self, id: MessageId, window: &mut Window, cx: &mut Context<Self>) {
        if !self.state.is_browsing() {
            return;
        }
        if let Err(e) = self.state.select_message(&id) {
            error!("Failed to open message {}: {}", id, e);
            return;
        }

        match mcg_mail::get_message_detail(self.state.store().as_ref(), &id) {
            Ok(Some(detail)) => {
                let view = cx.new(|cx| MessageView::new(detail, cx));
                cx.subscribe_in(&view, window, Self::handle_message_event)
                    .detach();
                self.message_view = Some(view);
            }
            Ok(None) => {
                warn!("Message {} disappeared after selection", id);
                self.message_view = None;
            }
            Err(e) => {
                error!("Failed to load message {}: {}", id, e);
                self.message_view = None;
            }
        }

        // Read flag may have changed
        self.inbox_view
            .update(cx, |view, cx| view.load_messages(cx));
        self.focus_current(window, cx);
        cx.notify();
    }

    pub fn back_to_inbox(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.state.back_to_inbox();
        self.message_view = None;
        self.inbox_view
            .update(cx, |view, cx| view.load_messages(cx));
        self.focus_current(window, cx);
        cx.notify();
    }

    pub fn change_page(&mut self, page: Page, window: &mut Window, cx: &mut Context<Self>) {
        if !self.state.is_browsing() || !self.state.change_page(page) {
            return;
        }
        if page == Page::Inbox {
            self.inbox_view
                .update(cx, |view, cx| view.load_messages(cx));
        }
        self.focus_current(window, cx);
        cx.notify();
    }

    pub fn open_compose(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        // A second request would replace the draft in progress
        if !self.state.is_browsing() {
            return;
        }
        self.state.open_compose();
        self.show_compose(window, cx);
    }

    pub fn start_reply(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if !self.state.is_browsing() {
            return;
        }
        match self.state.start_reply() {
            Ok(true) => self.show_compose(window, cx),
            Ok(false) => debug!("Reply ignored: no message selected"),
            Err(e) => error!("Failed to start reply: {}", e),
        }
    }

    fn show_compose(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let reply = self.state.reply_context().cloned();
        let view = cx.new(|cx| ComposeView::new(reply.as_ref(), window, cx));
        cx.subscribe_in(&view, window, Self::handle_compose_event)
            .detach();
        self.compose_view = Some(view);
        cx.notify();
    }

    pub fn close_compose(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.state.close_compose();
        self.compose_view = None;
        self.focus_current(window, cx);
        cx.notify();
    }

    fn send(&mut self, outgoing: &OutgoingMessage, window: &mut Window, cx: &mut Context<Self>) {
        if let Err(e) = self.state.send_outgoing(outgoing) {
            error!("Failed to send message: {}", e);
            return;
        }
        self.compose_view = None;
        self.focus_current(window, cx);
        cx.notify();
    }

    /// Claim the payment attached to the open message
    pub fn claim_selected(&mut self, cx: &mut Context<Self>) {
        let Some(id) = self.state.selected_id().cloned() else {
            return;
        };

        match self.state.claim_payment(&id) {
            Ok(false) => debug!("Payment on {} already claimed", id),
            Ok(true) => {
                let detail = mcg_mail::get_message_detail(self.state.store().as_ref(), &id);
                match (detail, &self.message_view) {
                    (Ok(Some(detail)), Some(view)) => {
                        view.update(cx, |view, cx| view.set_detail(detail, cx));
                    }
                    (Err(e), _) => error!("Failed to reload message {}: {}", id, e),
                    _ => {}
                }
            }
            Err(e) => error!("Failed to claim payment on {}: {}", id, e),
        }
        cx.notify();
    }

    pub fn toggle_theme(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.theme_preference = self.theme_preference.next();
        info!("Theme preference: {}", self.theme_preference.label());
        apply_theme(self.theme_preference, Some(window), cx);
        if let Err(e) = theme::save_preference(self.theme_preference) {
            warn!("Failed to save theme preference: {:#}", e);
        }
        cx.notify();
    }

    /// Close the topmost overlay, or go back from the message view
    pub fn dismiss(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.show_shortcuts {
            self.show_shortcuts = false;
            cx.notify();
        } else if self.compose_view.is_some() {
            self.close_compose(window, cx);
        } else if self.state.current_page() == Page::MessageDetail {
            self.back_to_inbox(window, cx);
        }
    }

    /// Move keyboard focus to the view for the current page
    fn focus_current(&self, window: &mut Window, cx: &mut Context<Self>) {
        match (self.state.current_page(), &self.message_view) {
            (Page::Inbox, _) => self.inbox_view.update(cx, |view, cx| view.focus(window, cx)),
            (Page::MessageDetail, Some(view)) => view.update(cx, |view, cx| view.focus(window, cx)),
            _ if self.state.is_connected() => window.focus(&self.page_focus_handle),
            _ => window.focus(&self.focus_handle),
        }
    }

    // === Child view events ===

    fn handle_inbox_event(
        &mut self,
        _: &Entity<InboxView>,
        event: &InboxEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match event {
            InboxEvent::Open(id) => self.open_message(id.clone(), window, cx),
        }
    }

    fn handle_message_event(
        &mut self,
        _: &Entity<MessageView>,
        event: &MessageViewEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match event {
            MessageViewEvent::Back => self.back_to_inbox(window, cx),
            MessageViewEvent::Reply => self.start_reply(window, cx),
            MessageViewEvent::Claim => self.claim_selected(cx),
        }
    }

    fn handle_compose_event(
        &mut self,
        _: &Entity<ComposeView>,
        event: &ComposeEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match event {
            ComposeEvent::Send(outgoing) => self.send(outgoing, window, cx),
            ComposeEvent::Close => self.close_compose(window, cx),
        }
    }

    // === Actions ===

    fn handle_dismiss(&mut self, _: &Dismiss, window: &mut Window, cx: &mut Context<Self>) {
        self.dismiss(window, cx);
    }

    fn handle_show_shortcuts(
        &mut self,
        _: &ShowShortcuts,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.show_shortcuts = !self.show_shortcuts;
        cx.notify();
    }

    fn handle_toggle_theme(&mut self, _: &ToggleTheme, window: &mut Window, cx: &mut Context<Self>) {
        self.toggle_theme(window, cx);
    }

    fn handle_compose(&mut self, _: &Compose, window: &mut Window, cx: &mut Context<Self>) {
        self.open_compose(window, cx);
    }

    fn handle_go_to_inbox(&mut self, _: &GoToInbox, window: &mut Window, cx: &mut Context<Self>) {
        self.change_page(Page::Inbox, window, cx);
    }

    fn handle_go_to_sent(&mut self, _: &GoToSent, window: &mut Window, cx: &mut Context<Self>) {
        self.change_page(Page::Sent, window, cx);
    }

    fn handle_go_to_spam(&mut self, _: &GoToSpam, window: &mut Window, cx: &mut Context<Self>) {
        self.change_page(Page::Spam, window, cx);
    }

    fn handle_go_to_settings(
        &mut self,
        _: &GoToSettings,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.change_page(Page::Settings, window, cx);
    }

    // === Rendering ===

    fn render_sidebar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let current = self.state.current_page();
        let unread = self.state.unread_count().unwrap_or_else(|e| {
            warn!("Unread count unavailable: {}", e);
            0
        });

        div()
            .w(px(240.))
            .h_full()
            .bg(theme.secondary)
            .border_r_1()
            .border_color(theme.border)
            .flex()
            .flex_col()
            .child(
                div().p_3().child(
                    Button::new("compose-button")
                        .icon(Icon::new(IconName::Plus))
                        .label("Compose")
                        .primary()
                        .w_full()
                        .cursor_pointer()
                        .on_click(cx.listener(|app, _event, window, cx| {
                            app.open_compose(window, cx);
                        })),
                ),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .flex_1()
                    .px_2()
                    .py_1()
                    .children(Page::NAVIGATION.into_iter().map(|page| {
                        let badge = if page == Page::Inbox { unread } else { 0 };

                        div()
                            .id(ElementId::Name(format!("nav-{}", page.title()).into()))
                            .on_click(cx.listener(move |app, _event, window, cx| {
                                app.change_page(page, window, cx);
                            }))
                            .child(SidebarItem::new(page, page == current).unread_count(badge))
                    })),
            )
    }

    fn render_content(&self) -> AnyElement {
        match self.state.current_page() {
            Page::Inbox => self.inbox_view.clone().into_any_element(),
            Page::Sent => self.render_page(PlaceholderView::sent()),
            Page::Spam => self.render_page(PlaceholderView::spam()),
            Page::Settings => self.render_page(SettingsView::new(self.settings.clone())),
            Page::MessageDetail => match &self.message_view {
                Some(view) => view.clone().into_any_element(),
                None => self.render_page(div().p_4().child("Message not found")),
            },
        }
    }

    /// Wrap a stateless page so browse shortcuts work while it has focus
    fn render_page(&self, page: impl IntoElement) -> AnyElement {
        div()
            .key_context(PAGE_CONTEXT)
            .track_focus(&self.page_focus_handle)
            .size_full()
            .child(page)
            .into_any_element()
    }
}

impl Render for McgApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let bg = theme.background;
        let fg = theme.foreground;

        let root = div()
            .key_context("McgApp")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::handle_dismiss))
            .on_action(cx.listener(Self::handle_toggle_theme))
            .relative()
            .size_full()
            .bg(bg)
            .text_color(fg);

        if !self.state.is_connected() {
            return root.child(ConnectScreen::new().on_connect(cx.listener(
                |app, _event, window, cx| {
                    app.connect(window, cx);
                },
            )));
        }

        let top_bar = TopBar::new(self.state.wallet().clone(), self.theme_preference)
            .on_toggle_theme(cx.listener(|app, _event, window, cx| {
                app.toggle_theme(window, cx);
            }));
        let sidebar = self.render_sidebar(cx);
        let content = self.render_content();

        root.on_action(cx.listener(Self::handle_show_shortcuts))
            .on_action(cx.listener(Self::handle_compose))
            .on_action(cx.listener(Self::handle_go_to_inbox))
            .on_action(cx.listener(Self::handle_go_to_sent))
            .on_action(cx.listener(Self::handle_go_to_spam))
            .on_action(cx.listener(Self::handle_go_to_settings))
            .flex()
            .flex_col()
            .child(top_bar)
            .child(
                div()
                    .flex()
                    .flex_row()
                    .flex_1()
                    .overflow_hidden()
                    .child(sidebar)
                    .child(div().flex().flex_1().overflow_hidden().child(content)),
            )
            .when_some(self.compose_view.clone(), |el, compose| el.child(compose))
            .when(self.show_shortcuts, |el| el.child(ShortcutsHelp::new()))
    }
}
