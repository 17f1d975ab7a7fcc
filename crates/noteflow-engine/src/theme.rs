//! # Style Table
//!
//! Inline CSS for every element the WeChat renderer emits, grouped into named
//! themes. The article editor strips stylesheets, so every element carries its
//! style in a `style` attribute.
//!
//! Style strings must not contain `*`, `_`, `~`, `` ` `` or `[`: inline
//! substitution runs over text that already contains emitted code spans.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier of the theme used when a lookup misses.
pub const DEFAULT_THEME: &str = "default";

/// One style string per element role.
///
/// Deserializing a partial bundle fills the missing roles from the default
/// theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleBundle {
    /// Display name shown in theme pickers.
    pub name: String,
    /// The `<section>` wrapping the whole article.
    pub container: String,
    pub paragraph: String,
    /// H1 and H4 to H6.
    pub heading: String,
    pub h2: String,
    pub h3: String,
    pub blockquote: String,
    pub pre: String,
    /// The `<code>` element inside `<pre>`.
    pub pre_code: String,
    /// Inline code spans.
    pub code: String,
    pub table: String,
    pub th: String,
    pub td: String,
    pub ul: String,
    pub ol: String,
    pub li: String,
    pub hr: String,
}

impl StyleBundle {
    /// Style for a heading tag of the given (already shifted) level.
    pub fn heading_style(&self, level: u8) -> &str {
        match level {
            2 => &self.h2,
            3 => &self.h3,
            _ => &self.heading,
        }
    }

    pub fn default_theme() -> Self {
        Self {
            name: "Default".into(),
            container: "font-size:16px;color:#333;line-height:1.7;word-break:break-word".into(),
            paragraph: "margin:8px 0;line-height:1.7".into(),
            heading: "font-size:1em;font-weight:bold;margin:16px 0 8px".into(),
            h2: "font-size:1.4em;font-weight:bold;margin:16px 0 8px".into(),
            h3: "font-size:1.2em;font-weight:bold;margin:16px 0 8px".into(),
            blockquote: "border-left:3px solid #ccc;margin:8px 0;padding:4px 12px;color:#666"
                .into(),
            pre: "background:#f5f5f5;padding:12px;border-radius:4px;overflow-x:auto".into(),
            pre_code: "font-family:monospace;font-size:0.9em".into(),
            code: "font-family:monospace;background:#f5f5f5;padding:2px 4px;border-radius:3px"
                .into(),
            table: "border-collapse:collapse;width:100%".into(),
            th: "border:1px solid #ddd;padding:6px 10px;background:#f0f0f0".into(),
            td: "border:1px solid #ddd;padding:6px 10px".into(),
            ul: "padding-left:1.5em;margin:8px 0".into(),
            ol: "padding-left:1.5em;margin:8px 0".into(),
            li: "margin:4px 0".into(),
            hr: "border:none;border-top:1px solid #ddd;margin:16px 0".into(),
        }
    }

    /// Serif body text with warm accents.
    pub fn elegant() -> Self {
        Self {
            name: "Elegant".into(),
            container: "font-size:15px;color:#3f3f3f;line-height:1.9;letter-spacing:0.5px;font-family:Georgia,'Songti SC',serif".into(),
            paragraph: "margin:12px 0;line-height:1.9;text-align:justify".into(),
            heading: "font-size:1.05em;font-weight:bold;color:#8c6b4f;margin:20px 0 10px".into(),
            h2: "font-size:1.35em;font-weight:bold;color:#8c6b4f;text-align:center;margin:28px 0 14px;padding-bottom:6px;border-bottom:1px solid #e3d5c6".into(),
            h3: "font-size:1.15em;font-weight:bold;color:#8c6b4f;margin:22px 0 10px;padding-left:8px;border-left:3px solid #c9a27e".into(),
            blockquote: "border-left:3px solid #c9a27e;background:#faf6f1;margin:12px 0;padding:8px 14px;color:#7a6a5a;font-style:italic".into(),
            pre: "background:#faf6f1;padding:12px;border-radius:6px;overflow-x:auto;border:1px solid #eee3d6".into(),
            pre_code: "font-family:Menlo,Consolas,monospace;font-size:0.85em;color:#5a4a3a".into(),
            code: "font-family:Menlo,Consolas,monospace;background:#f5ede4;color:#8c6b4f;padding:2px 4px;border-radius:3px".into(),
            table: "border-collapse:collapse;width:100%;margin:12px 0".into(),
            th: "border:1px solid #e3d5c6;padding:6px 10px;background:#f5ede4;color:#8c6b4f".into(),
            td: "border:1px solid #e3d5c6;padding:6px 10px".into(),
            ul: "padding-left:1.5em;margin:12px 0".into(),
            ol: "padding-left:1.5em;margin:12px 0".into(),
            li: "margin:6px 0;line-height:1.8".into(),
            hr: "border:none;border-top:1px dashed #c9a27e;margin:24px 0".into(),
        }
    }

    /// Sans-serif with a blue accent and dark code blocks.
    pub fn tech() -> Self {
        Self {
            name: "Tech".into(),
            container: "font-size:15px;color:#2c3e50;line-height:1.75;font-family:-apple-system,'PingFang SC','Helvetica Neue',sans-serif".into(),
            paragraph: "margin:10px 0;line-height:1.75".into(),
            heading: "font-size:1em;font-weight:bold;color:#1e6bb8;margin:18px 0 8px".into(),
            h2: "font-size:1.4em;font-weight:bold;color:#fff;background:#1e6bb8;display:inline-block;padding:4px 12px;border-radius:4px;margin:24px 0 12px".into(),
            h3: "font-size:1.2em;font-weight:bold;color:#1e6bb8;margin:20px 0 10px;padding-bottom:4px;border-bottom:2px solid #1e6bb8".into(),
            blockquote: "border-left:4px solid #1e6bb8;background:#f0f6fc;margin:10px 0;padding:8px 14px;color:#4a5b6c".into(),
            pre: "background:#282c34;padding:14px;border-radius:6px;overflow-x:auto".into(),
            pre_code: "font-family:'Fira Code',Consolas,monospace;font-size:0.85em;color:#abb2bf".into(),
            code: "font-family:'Fira Code',Consolas,monospace;background:#eef3f8;color:#d14;padding:2px 4px;border-radius:3px".into(),
            table: "border-collapse:collapse;width:100%;margin:10px 0".into(),
            th: "border:1px solid #c8d6e5;padding:6px 10px;background:#1e6bb8;color:#fff".into(),
            td: "border:1px solid #c8d6e5;padding:6px 10px".into(),
            ul: "padding-left:1.5em;margin:10px 0".into(),
            ol: "padding-left:1.5em;margin:10px 0".into(),
            li: "margin:4px 0".into(),
            hr: "border:none;border-top:2px solid #1e6bb8;margin:20px 0".into(),
        }
    }
}

impl Default for StyleBundle {
    fn default() -> Self {
        Self::default_theme()
    }
}

/// Immutable mapping from theme id to [`StyleBundle`].
///
/// Always holds a default bundle, so [`ThemeRegistry::resolve`] is total.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    default: StyleBundle,
    themes: BTreeMap<String, StyleBundle>,
}

impl ThemeRegistry {
    /// A registry holding only the default theme.
    pub fn new() -> Self {
        Self {
            default: StyleBundle::default_theme(),
            themes: BTreeMap::new(),
        }
    }

    /// The themes shipped with the engine: `default`, `elegant` and `tech`.
    pub fn builtin() -> Self {
        Self::new()
            .with_theme("elegant", StyleBundle::elegant())
            .with_theme("tech", StyleBundle::tech())
    }

    /// Adds a theme, replacing any theme with the same id (including the
    /// default).
    pub fn with_theme(mut self, id: impl Into<String>, bundle: StyleBundle) -> Self {
        let id = id.into();
        if id == DEFAULT_THEME {
            self.default = bundle;
        } else {
            self.themes.insert(id, bundle);
        }
        self
    }

    pub fn get(&self, id: &str) -> Option<&StyleBundle> {
        if id == DEFAULT_THEME {
            Some(&self.default)
        } else {
            self.themes.get(id)
        }
    }

    /// Looks up a theme, falling back to the default bundle on a miss.
    pub fn resolve(&self, id: &str) -> &StyleBundle {
        self.get(id).unwrap_or_else(|| {
            log::debug!("unknown theme {id:?}, using {DEFAULT_THEME:?}");
            &self.default
        })
    }

    /// All theme ids with their bundles, default first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleBundle)> {
        std::iter::once((DEFAULT_THEME, &self.default))
            .chain(self.themes.iter().map(|(id, b)| (id.as_str(), b)))
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let themes = ThemeRegistry::builtin();
        assert_eq!(themes.resolve("no-such-theme"), &StyleBundle::default_theme());
    }

    #[test]
    fn builtin_themes_resolve_to_themselves() {
        let themes = ThemeRegistry::builtin();
        assert_eq!(themes.resolve("elegant").name, "Elegant");
        assert_eq!(themes.resolve("tech").name, "Tech");
        assert_eq!(themes.resolve(DEFAULT_THEME).name, "Default");
    }

    #[test]
    fn iter_lists_default_first() {
        let themes = ThemeRegistry::builtin();
        let ids: Vec<&str> = themes.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["default", "elegant", "tech"]);
    }

    #[test]
    fn with_theme_can_replace_default() {
        let custom = StyleBundle {
            name: "Mine".into(),
            ..StyleBundle::default_theme()
        };
        let themes = ThemeRegistry::new().with_theme(DEFAULT_THEME, custom);
        assert_eq!(themes.resolve("missing").name, "Mine");
    }

    #[test]
    fn styles_never_contain_inline_delimiters() {
        for (id, bundle) in ThemeRegistry::builtin().iter() {
            let json = serde_json::to_value(bundle).unwrap();
            for (role, style) in json.as_object().unwrap() {
                let style = style.as_str().unwrap();
                assert!(
                    !style.contains(['*', '_', '~', '`', '[']),
                    "{id}.{role} contains an inline delimiter: {style}"
                );
                assert!(!style.contains('"'), "{id}.{role} would break the attribute");
            }
        }
    }

    #[test]
    fn partial_bundle_fills_from_default() {
        let bundle: StyleBundle = serde_json::from_str(r#"{"name":"Red","h2":"color:red"}"#).unwrap();
        assert_eq!(bundle.h2, "color:red");
        assert_eq!(bundle.paragraph, StyleBundle::default_theme().paragraph);
    }
}
