//! Inline pre-paint script.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle loads after the first paint, so the SSR shell inlines this
//! script in `<head>`. It applies the root marker synchronously using the same
//! precedence rule and palette as [`ThemePreference::resolve`] and
//! [`DocumentRoot`], then runs once more on `DOMContentLoaded` if the document
//! was still loading. Both runs produce the same marker.
//!
//! DESIGN
//! ======
//! The storage read and the `matchMedia` read each sit in their own guard. A
//! throwing read leaves `stored` null, which defers to the OS signal exactly
//! like [`StorageError`] does in the mounted manager. The stored-value branch
//! chain is generated from [`STORED_OVERRIDES`], the table behind
//! [`ThemeMode::from_stored`].
//!
//! [`ThemePreference::resolve`]: super::mode::ThemePreference::resolve
//! [`DocumentRoot`]: super::root::DocumentRoot
//! [`StorageError`]: super::storage::StorageError

use super::mode::{STORED_OVERRIDES, StoredMatch, ThemeMode};
use super::root::{DARK_CLASS, THEME_ATTRIBUTE};
use super::storage::THEME_STORAGE_KEY;
use super::system::DARK_SCHEME_QUERY;

#[cfg(test)]
#[path = "prepaint_test.rs"]
mod prepaint_test;

/// JavaScript source for the inline `<script>` element.
pub fn script() -> String {
    format!(
        "(function(){{function apply(){{{read_stored}{read_os}{resolve}{mark}}}\
apply();\
if(document.readyState==='loading'){{document.addEventListener('DOMContentLoaded',apply);}}\
}})();",
        read_stored = read_stored_js(),
        read_os = read_os_js(),
        resolve = resolve_js(),
        mark = mark_js(),
    )
}

/// Sets `stored`; null when nothing is stored or storage throws.
fn read_stored_js() -> String {
    format!("var stored=null;try{{stored=localStorage.getItem('{THEME_STORAGE_KEY}');}}catch(e){{stored=null;}}")
}

/// Sets `os`; false when `matchMedia` is missing or throws.
fn read_os_js() -> String {
    format!("var os=false;try{{os=window.matchMedia('{DARK_SCHEME_QUERY}').matches===true;}}catch(e){{os=false;}}")
}

/// Sets `dark` from `stored`, falling back to `os`.
fn resolve_js() -> String {
    let mut js = String::from("var dark=os;");
    for (index, (check, mode)) in STORED_OVERRIDES.iter().enumerate() {
        if index > 0 {
            js.push_str("else ");
        }
        let condition = match check {
            StoredMatch::Is(value) => format!("stored==='{}'", value.as_str()),
            StoredMatch::NonEmpty => "stored".to_owned(),
        };
        js.push_str(&format!("if({condition}){{dark={};}}", mode.is_dark()));
    }
    js
}

fn mark_js() -> String {
    let dark = ThemeMode::Dark.palette();
    let light = ThemeMode::Light.palette();
    format!(
        "var root=document.documentElement;\
if(dark){{root.classList.add('{class}');}}else{{root.classList.remove('{class}');}}\
root.setAttribute('{attr}',dark?'{dark_value}':'{light_value}');\
root.style.setProperty('--background',dark?'{dark_bg}':'{light_bg}');\
root.style.setProperty('--foreground',dark?'{dark_fg}':'{light_fg}');",
        class = DARK_CLASS,
        attr = THEME_ATTRIBUTE,
        dark_value = ThemeMode::Dark.as_str(),
        light_value = ThemeMode::Light.as_str(),
        dark_bg = dark.background,
        light_bg = light.background,
        dark_fg = dark.foreground,
        light_fg = light.foreground,
    )
}
