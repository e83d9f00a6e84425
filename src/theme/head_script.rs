//! Inline `<head>` script applying the theme before first paint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM module is fetched and instantiated asynchronously, so it cannot
//! run before the first paint. The page therefore embeds this classic,
//! blocking script in `<head>`; it applies the same derivation as
//! [`ThemePreference::resolve`](super::ThemePreference::resolve) to the root element. Once the module starts,
//! the controller re-applies the identical state (a no-op) and takes over.

use super::EffectiveTheme;
use crate::config::ThemeConfig;

/// JavaScript source of the pre-paint script, without `<script>` tags.
pub fn head_script(config: &ThemeConfig) -> String {
    let key = js_string(&config.storage_key);
    let query = js_string(&config.color_scheme_query);
    let class = js_string(&config.dark_class);
    let dark = js_string(EffectiveTheme::Dark.as_stored());
    let light = js_string(EffectiveTheme::Light.as_stored());
    format!(
        "(function(){{\
var d=false,s=null;\
try{{d=window.matchMedia({query}).matches}}catch(e){{}}\
try{{s=window.localStorage.getItem({key})}}catch(e){{}}\
var t=(s==={dark}||s==={light})?s:(d?{dark}:{light});\
var r=document.documentElement;\
r.classList.toggle({class},t==={dark});\
r.style.colorScheme=t==={dark}?{dark}:\"\";\
}})();"
    )
}

/// [`head_script`] wrapped in a `<script>` element.
pub fn head_script_tag(config: &ThemeConfig) -> String {
    format!("<script>{}</script>", head_script(config))
}

/// Quote `value` as a JS string literal that cannot close the script element.
fn js_string(value: &str) -> String {
    // JSON string literals are valid JS; a serialized `&str` cannot fail.
    serde_json::to_string(value).unwrap_or_default().replace("</", "<\\/")
}

#[cfg(test)]
#[path = "head_script_test.rs"]
mod tests;
