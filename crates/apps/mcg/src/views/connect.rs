//! Connect screen - shown until the wallet handshake completes

use gpui::prelude::*;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{ActiveTheme, Icon, Sizable};
use std::rc::Rc;

use crate::assets::icons::Wallet;

type ClickHandler = Rc<dyn Fn(&ClickEvent, &mut Window, &mut App)>;

#[derive(IntoElement)]
pub struct ConnectScreen {
    on_connect: Option<ClickHandler>,
}

impl ConnectScreen {
    pub fn new() -> Self {
        Self { on_connect: None }
    }

    pub fn on_connect(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_connect = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for ConnectScreen {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let on_connect = self.on_connect;

        div()
            .size_full()
            .bg(theme.background)
            .flex()
            .items_center()
            .justify_center()
            .p_4()
            .child(
                div()
                    .w(px(420.))
                    .flex()
                    .flex_col()
                    .items_center()
                    .child(
                        div()
                            .mb_12()
                            .size_16()
                            .rounded_full()
                            .bg(theme.primary)
                            .flex()
                            .items_center()
                            .justify_center()
                            .child(
                                Icon::new(Wallet)
                                    .large()
                                    .text_color(theme.primary_foreground),
                            ),
                    )
                    .child(
                        div()
                            .mb_4()
                            .text_3xl()
                            .text_color(theme.foreground)
                            .child("mcg.mail"),
                    )
                    .child(
                        div()
                            .mb_16()
                            .text_color(theme.muted_foreground)
                            .child("Truly private, on-chain mail."),
                    )
                    .child(
                        Button::new("connect-wallet")
                            .label("Connect Wallet")
                            .primary()
                            .large()
                            .w_full()
                            .cursor_pointer()
                            .on_click(move |event, window, cx| {
                                if let Some(handler) = &on_connect {
                                    handler(event, window, cx);
                                }
                            }),
                    )
                    // Informational only; there is nothing to open
                    .child(
                        div()
                            .mt_12()
                            .text_xs()
                            .text_color(theme.muted_foreground)
                            .child("Learn about MCG Protocol"),
                    ),
            )
    }
}
