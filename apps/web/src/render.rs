use crate::models::{Message, Stats};

pub const EMPTY_PLACEHOLDER: &str = "<div class='text-center text-blue-200'>No messages</div>";

/// Counter element ids, in the order total / suspicious / safe.
pub const COUNTER_IDS: [&str; 3] = ["totalMessages", "suspiciousMessages", "safeMessages"];

pub fn counter_values(stats: &Stats) -> [(&'static str, String); 3] {
    [
        (COUNTER_IDS[0], stats.total.to_string()),
        (COUNTER_IDS[1], stats.suspicious.to_string()),
        (COUNTER_IDS[2], stats.safe.to_string()),
    ]
}

/// Markup for the message list. Backend text is escaped before interpolation.
pub fn messages_html(messages: &[Message]) -> String {
    if messages.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    messages.iter().fold(String::new(), |mut html, message| {
        push_card(&mut html, message);
        html
    })
}

fn push_card(html: &mut String, message: &Message) {
    html.push_str(&format!(
        "<div class=\"glass rounded-xl p-4 {border}\"><p class=\"text-white mb-2\">{text}</p><p class=\"text-blue-200 text-sm\">From: {sender}</p>",
        border = message.label.border_class(),
        text = html_escape(message.text()),
        sender = html_escape(message.sender()),
    ));
    if let Some(timestamp) = message.timestamp.as_deref() {
        html.push_str(&format!(
            "<p class=\"text-blue-300 text-xs\">{}</p>",
            html_escape(timestamp)
        ));
    }
    html.push_str("</div>");
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
