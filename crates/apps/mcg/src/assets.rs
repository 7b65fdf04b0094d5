//! Custom assets for mcg.mail
//!
//! Extends gpui-component with the Lucide icons used by the message and
//! compose views.

use gpui::{AssetSource, SharedString};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/icons"]
#[include = "*.svg"]
struct CustomIcons;

/// Asset source that checks custom icons first, then gpui-component-assets
pub struct McgAssets;

impl AssetSource for McgAssets {
    fn load(&self, path: &str) -> gpui::Result<Option<std::borrow::Cow<'static, [u8]>>> {
        if let Some(icon_name) = path.strip_prefix("icons/") {
            if let Some(file) = CustomIcons::get(icon_name) {
                return Ok(Some(file.data));
            }
        }

        gpui_component_assets::Assets.load(path)
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        let mut results = Vec::new();

        if path.is_empty() || path == "icons" || path == "icons/" {
            for file in CustomIcons::iter() {
                results.push(format!("icons/{}", file).into());
            }
        }

        results.extend(gpui_component_assets::Assets.list(path)?);

        Ok(results)
    }
}

/// Icon names for the embedded SVGs
pub mod icons {
    use gpui::SharedString;
    use gpui_component::IconNamed;

    macro_rules! custom_icon {
        ($name:ident, $file:literal) => {
            #[derive(Clone, Copy)]
            pub struct $name;

            impl IconNamed for $name {
                fn path(self) -> SharedString {
                    concat!("icons/", $file).into()
                }
            }
        };
    }

    custom_icon!(Reply, "reply.svg");
    custom_icon!(Forward, "forward.svg");
    custom_icon!(Send, "send.svg");
    custom_icon!(Wallet, "wallet.svg");
    custom_icon!(Shield, "shield.svg");
    custom_icon!(Sparkles, "sparkles.svg");
}
