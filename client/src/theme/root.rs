//! Root element theme marker.
//!
//! The marker is the `dark` class, the `data-theme` attribute, and the
//! `--background`/`--foreground` custom properties on `<html>`. The pre-paint
//! script writes the same three things, so mounting never changes what the
//! first paint showed.

use super::mode::ThemeMode;

/// Class present on `<html>` while dark.
pub const DARK_CLASS: &str = "dark";
/// Attribute carrying `"dark"` / `"light"` on `<html>`.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Something that can reflect a theme mode visually.
pub trait RootMarker {
    fn mark(&self, mode: ThemeMode);
}

/// Marker applied to `document.documentElement`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl RootMarker for DocumentRoot {
    fn mark(&self, mode: ThemeMode) {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };

            let class_list = el.class_list();
            let toggled = if mode.is_dark() { class_list.add_1(DARK_CLASS) } else { class_list.remove_1(DARK_CLASS) };
            if let Err(e) = toggled {
                log::debug!("root class not updated: {e:?}");
            }
            if let Err(e) = el.set_attribute(THEME_ATTRIBUTE, mode.as_str()) {
                log::debug!("root theme attribute not updated: {e:?}");
            }

            if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
                let palette = mode.palette();
                let style = html.style();
                for (name, value) in [("--background", palette.background), ("--foreground", palette.foreground)] {
                    if let Err(e) = style.set_property(name, value) {
                        log::debug!("root property {name} not updated: {e:?}");
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = mode;
        }
    }
}
