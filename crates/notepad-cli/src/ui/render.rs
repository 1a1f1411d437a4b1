//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    let text = text.trim_start_matches("Hint:").trim();
    if ctx.mode.is_pretty() {
        format!("{} {}", styled("Hint:", styles::dim(), ctx.color), text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: Badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, String)]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

/// Render key-value rows: a two-column table in pretty mode, `key=value`
/// lines otherwise.
pub fn kv_table(ctx: &UiContext, title: &str, rows: &[(&str, String)]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|(key, value)| kv(ctx, key, value))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = ComfyTable::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(ctx.width.min(u16::MAX as usize) as u16)
        .set_header(vec![styled(title, styles::bold(), ctx.color), String::new()]);
    for (key, value) in rows {
        table.add_row(vec![key.to_string(), value.clone()]);
    }
    table.to_string()
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
///
/// A `notice` is a user-correctable failure (missing input, wrong
/// passphrase, no wallet); it renders as a warning instead.
pub fn error_message(
    ctx: &UiContext,
    message: &str,
    error_hint: Option<&str>,
    notice: bool,
) -> String {
    let mut lines = Vec::new();

    match (ctx.mode.is_pretty(), notice) {
        (true, true) => lines.push(badge(ctx, Badge::Warn, message)),
        (true, false) => lines.push(badge(ctx, Badge::Err, message)),
        (false, true) => lines.push(format!("notice={}", message)),
        (false, false) => lines.push(format!("error={}", message)),
    }
    if let Some(h) = error_hint {
        lines.push(hint(ctx, h));
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>, notice: bool) {
    eprintln!("{}", error_message(ctx, message, error_hint, notice));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mode::OutputMode;

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            mode: OutputMode::Pretty,
            is_tty: true,
            ..plain_ctx()
        }
    }

    #[test]
    fn test_kv_plain_snake_cases_key() {
        assert_eq!(kv(&plain_ctx(), "Saved At", "now"), "saved_at=now");
    }

    #[test]
    fn test_kv_pretty() {
        assert_eq!(kv(&pretty_ctx(), "Hash", "ab12"), "Hash: ab12");
    }

    #[test]
    fn test_receipt_plain() {
        let out = receipt(
            &plain_ctx(),
            "Note saved",
            &[("Id", "0190".to_string()), ("Hash", "ab".to_string())],
        );
        assert_eq!(out, "status=ok\nid=0190\nhash=ab");
    }

    #[test]
    fn test_receipt_pretty() {
        let out = receipt(&pretty_ctx(), "Note saved", &[("Id", "0190".to_string())]);
        assert_eq!(out, "[OK] Note saved\n  Id: 0190");
    }

    #[test]
    fn test_hint_strips_prefix() {
        assert_eq!(
            hint(&plain_ctx(), "Hint: Run `notepad connect`"),
            "hint=Run `notepad connect`"
        );
    }

    #[test]
    fn test_error_message_plain() {
        let out = error_message(&plain_ctx(), "Disk full", Some("Hint: free space"), false);
        assert_eq!(out, "error=Disk full\nhint=free space");
    }

    #[test]
    fn test_notice_message() {
        let out = error_message(&plain_ctx(), "Wallet not connected", None, true);
        assert_eq!(out, "notice=Wallet not connected");
        let out = error_message(&pretty_ctx(), "Wallet not connected", None, true);
        assert_eq!(out, "[WARN] Wallet not connected");
    }

    #[test]
    fn test_kv_table_pretty_contains_rows() {
        let out = kv_table(&pretty_ctx(), "Status", &[("Wallet", "connected".to_string())]);
        assert!(out.contains("Wallet"));
        assert!(out.contains("connected"));
    }
}
