//! The HTML note form served at `/`.

use crate::flash::{Flash, FlashCategory};
use notes_core::ConfigStatus;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Render the index page with the configuration banner and any pending flash message.
///
/// The form is disabled while the configuration is invalid.
pub fn render_index(config: &ConfigStatus, flash: Option<&Flash>) -> String {
    let config_banner = if config.valid {
        String::new()
    } else {
        format!(
            r#"<div class="banner warning">Notion is not configured: {}</div>"#,
            escape_html(&config.message)
        )
    };

    let flash = flash
        .map(|f| {
            let class = match f.category {
                FlashCategory::Success => "success",
                FlashCategory::Error => "error",
            };
            format!(
                r#"<div class="banner {class}">{}</div>"#,
                escape_html(&f.message)
            )
        })
        .unwrap_or_default();

    INDEX_TEMPLATE
        .replace("{{config_banner}}", &config_banner)
        .replace("{{flash}}", &flash)
        .replace("{{disabled}}", if config.valid { "" } else { "disabled" })
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ConfigStatus {
        ConfigStatus {
            valid: true,
            message: "Configuration valid".into(),
        }
    }

    #[test]
    fn test_valid_config_renders_enabled_form() {
        let html = render_index(&valid(), None);

        assert!(html.contains(r#"action="/write""#));
        assert!(html.contains(r#"name="content""#));
        assert!(!html.contains("disabled"));
        assert!(!html.contains("not configured"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_invalid_config_shows_message_and_disables_form() {
        let status = ConfigStatus {
            valid: false,
            message: "NOTION_TOKEN environment variable is required".into(),
        };
        let html = render_index(&status, None);

        assert!(html.contains("NOTION_TOKEN environment variable is required"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn test_flash_is_rendered_escaped() {
        let flash = Flash::error("Error: <script>alert('x')</script>");
        let html = render_index(&valid(), Some(&flash));

        assert!(html.contains(r#"<div class="banner error">"#));
        assert!(html.contains("Error: &lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"a & "b""#), "a &amp; &quot;b&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
