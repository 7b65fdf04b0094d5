//! Top bar with the app mark, theme toggle and wallet identity

use gpui::prelude::*;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{ActiveTheme, Icon, IconName, Sizable};
use mcg_mail::{ThemePreference, WalletConnection};
use std::rc::Rc;

use crate::assets::icons::Wallet;

type ClickHandler = Rc<dyn Fn(&ClickEvent, &mut Window, &mut App)>;

#[derive(IntoElement)]
pub struct TopBar {
    wallet: WalletConnection,
    theme: ThemePreference,
    on_toggle_theme: Option<ClickHandler>,
}

impl TopBar {
    pub fn new(wallet: WalletConnection, theme: ThemePreference) -> Self {
        Self {
            wallet,
            theme,
            on_toggle_theme: None,
        }
    }

    pub fn on_toggle_theme(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_toggle_theme = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for TopBar {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        let theme_icon = match self.theme {
            ThemePreference::Light => IconName::Sun,
            ThemePreference::Dark | ThemePreference::System => IconName::Moon,
        };
        let on_toggle = self.on_toggle_theme;

        div()
            .w_full()
            .h(px(48.))
            .px_4()
            .border_b_1()
            .border_color(theme.border)
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.foreground)
                    .child("<mcg_mail/>"),
            )
            // Search is not implemented; the field is decoration
            .child(
                div()
                    .w(px(320.))
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .border_1()
                    .border_color(theme.border)
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        Icon::new(IconName::Search)
                            .small()
                            .text_color(theme.muted_foreground),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(theme.muted_foreground)
                            .child("Search messages..."),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        Button::new("theme-toggle")
                            .icon(Icon::new(theme_icon).small())
                            .label(self.theme.label())
                            .small()
                            .ghost()
                            .cursor_pointer()
                            .on_click(move |event, window, cx| {
                                if let Some(handler) = &on_toggle {
                                    handler(event, window, cx);
                                }
                            }),
                    )
                    // Wallet chip
                    .child(
                        div()
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .bg(theme.secondary)
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                Icon::new(Wallet)
                                    .small()
                                    .text_color(theme.secondary_foreground),
                            )
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .child(
                                        div()
                                            .text_xs()
                                            .font_weight(FontWeight::MEDIUM)
                                            .text_color(theme.secondary_foreground)
                                            .child(self.wallet.sol_name.clone()),
                                    )
                                    .child(
                                        div()
                                            .text_xs()
                                            .text_color(theme.muted_foreground)
                                            .child(self.wallet.short_key()),
                                    ),
                            ),
                    )
                    // Avatar
                    .child(
                        div()
                            .size_8()
                            .rounded_full()
                            .bg(theme.primary)
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_xs()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(theme.primary_foreground)
                            .child(self.wallet.avatar_initials()),
                    ),
            )
    }
}
