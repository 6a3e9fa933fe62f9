use std::time::Duration;

pub fn ban_notice(display_name: &str, window: Duration, admin_contact: &str) -> String {
    format!(
        "Hello {display_name},\n\n\
         You have been automatically banned from the server for leaving within {} of joining.\n\n\
         If you think this was a mistake, please contact the admin: {admin_contact}",
        format_window(window)
    )
}

/// Renders a grace window as "5 minutes", "45 seconds" or "1 minute 30 seconds".
pub fn format_window(window: Duration) -> String {
    let total = window.as_secs();
    let (minutes, seconds) = (total / 60, total % 60);
    match (minutes, seconds) {
        (0, s) => plural(s, "second"),
        (m, 0) => plural(m, "minute"),
        (m, s) => format!("{} {}", plural(m, "minute"), plural(s, "second")),
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 { format!("1 {unit}") } else { format!("{n} {unit}s") }
}

#[cfg(test)]
#[path = "tests/notice.rs"]
mod tests;
