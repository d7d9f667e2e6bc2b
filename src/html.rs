//! Server-rendered HTML for the form UI.
//!
//! Pages are plain strings; every user-supplied value goes through [`escape`].

use std::fmt::Write;

use crate::constants::{MAX_PERIODS, MIN_PERIODS};
use crate::models::{ClassStatus, Day, Period, WeekTimetable};

const APP_TITLE: &str = "📚 College Timetable App";

/// Message banner shown above a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
    Warning(String),
    Info(String),
}

impl Notice {
    fn render(&self) -> String {
        let (class, icon, text) = match self {
            Notice::Success(t) => ("success", "✅", t),
            Notice::Error(t) => ("error", "❌", t),
            Notice::Warning(t) => ("warning", "⚠️", t),
            Notice::Info(t) => ("info", "", t),
        };
        let icon = if icon.is_empty() {
            String::new()
        } else {
            format!("{icon} ")
        };
        format!(r#"<p class="notice {class}">{icon}{}</p>"#, escape(text))
    }
}

/// Escape text for use in element content and quoted attribute values
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn notices(notice: Option<&Notice>) -> String {
    notice.map(Notice::render).unwrap_or_default()
}

/// Bare document shell
pub fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>College Timetable App</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }}
nav a {{ margin-right: 1rem; }}
.notice {{ padding: .5rem; border-radius: 4px; }}
.success {{ background: #e6f4ea; }}
.error {{ background: #fce8e6; }}
.warning {{ background: #fef7e0; }}
.info {{ background: #e8f0fe; }}
table {{ border-collapse: collapse; }}
td, th {{ border: 1px solid #ccc; padding: .25rem .75rem; }}
</style>
</head>
<body>
<h1>{APP_TITLE}</h1>
{body}
</body>
</html>
"#
    )
}

/// Document shell with the logged-in menu
pub fn app_page(username: &str, body: &str) -> String {
    page(&format!(
        r#"<nav>
<a href="/">Home</a>
<a href="/timetable/edit">Add / Edit Timetable</a>
<a href="/timetable">Full Week Timetable</a>
<form action="/logout" method="post" style="display:inline"><button type="submit">Logout</button></form>
<span>Signed in as {}</span>
</nav>
{body}"#,
        escape(username)
    ))
}

pub fn error_page(message: &str) -> String {
    page(&format!(
        r#"{}
<p><a href="/">Back</a></p>"#,
        Notice::Error(message.to_string()).render()
    ))
}

// =============================================================================
// Auth screens
// =============================================================================

fn auth_menu() -> &'static str {
    r#"<nav><a href="/login">Login</a><a href="/register">Register</a></nav>"#
}

fn credentials_form(action: &str, button: &str, username: &str) -> String {
    format!(
        r#"<form action="{action}" method="post">
<label>Username <input type="text" name="username" value="{}"></label><br>
<label>Password <input type="password" name="password"></label><br>
<button type="submit">{button}</button>
</form>"#,
        escape(username)
    )
}

pub fn login_page(notice: Option<&Notice>, username: &str) -> String {
    page(&format!(
        "{}\n<h2>🔐 Login</h2>\n{}\n{}",
        auth_menu(),
        notices(notice),
        credentials_form("/login", "Login", username)
    ))
}

pub fn register_page(notice: Option<&Notice>, username: &str) -> String {
    page(&format!(
        "{}\n<h2>📝 Register</h2>\n{}\n{}",
        auth_menu(),
        notices(notice),
        credentials_form("/register", "Register", username)
    ))
}

// =============================================================================
// Home
// =============================================================================

/// `status` is `None` when today has no periods
pub fn home_page(username: &str, status: Option<&ClassStatus>) -> String {
    let mut body = format!(
        "<h2>👋 Welcome, {}</h2>\n<h2>📅 Today</h2>\n",
        escape(username)
    );
    match status {
        None => body.push_str(
            &Notice::Warning(crate::constants::MSG_NO_TIMETABLE_TODAY.to_string()).render(),
        ),
        Some(status) => {
            body.push_str(
                &Notice::Info(format!("🕒 Current: {}", status.current)).render(),
            );
            body.push('\n');
            body.push_str(&Notice::Info(format!("➡️ Next: {}", status.next)).render());
        }
    }
    app_page(username, &body)
}

// =============================================================================
// Edit
// =============================================================================

/// Day selector and period count; submitting reloads the form with that many rows
fn edit_selector(day: Day, periods: usize) -> String {
    let mut options = String::new();
    for d in Day::ALL {
        let selected = if d == day { " selected" } else { "" };
        let _ = writeln!(
            options,
            r#"<option value="{}"{selected}>{}</option>"#,
            d.as_str(),
            d.as_str()
        );
    }
    format!(
        r#"<form action="/timetable/edit" method="get">
<label>Select Day <select name="day">
{options}</select></label>
<label>Number of periods (including breaks)
<input type="number" name="periods" min="{MIN_PERIODS}" max="{MAX_PERIODS}" step="1" value="{periods}"></label>
<button type="submit">Load</button>
</form>"#
    )
}

/// Per-period inputs, prefilled from `rows` where available
pub fn edit_page(
    username: &str,
    day: Day,
    rows: &[Period],
    periods: usize,
    notice: Option<&Notice>,
) -> String {
    let mut fields = String::new();
    for i in 0..periods {
        let (start, end, subject) = rows
            .get(i)
            .map(|p| (p.start.as_str(), p.end.as_str(), p.subject.as_str()))
            .unwrap_or(("", "", ""));
        let _ = write!(
            fields,
            r#"<fieldset>
<legend>Period {}</legend>
<label>Start Time (HH:MM) <input type="text" name="start_{i}" value="{}"></label>
<label>End Time (HH:MM) <input type="text" name="end_{i}" value="{}"></label>
<label>Subject (Use 'Break' for breaks) <input type="text" name="subject_{i}" value="{}"></label>
</fieldset>
"#,
            i + 1,
            escape(start),
            escape(end),
            escape(subject)
        );
    }

    let body = format!(
        r#"<h2>➕ Add / Edit Timetable</h2>
{}
{}
<form action="/timetable/edit" method="post">
<input type="hidden" name="day" value="{}">
<input type="hidden" name="periods" value="{periods}">
{fields}<button type="submit">💾 Save Timetable</button>
</form>"#,
        notices(notice),
        edit_selector(day, periods),
        day.as_str()
    );
    app_page(username, &body)
}

// =============================================================================
// Full week
// =============================================================================

pub fn week_page(username: &str, week: &WeekTimetable) -> String {
    let mut body = String::from("<h2>📅 Full Week Timetable</h2>\n");

    if week.is_empty() {
        body.push_str(
            &Notice::Warning(crate::constants::MSG_NO_TIMETABLE_DATA.to_string()).render(),
        );
        return app_page(username, &body);
    }

    for (day, periods) in week.iter() {
        let _ = writeln!(body, "<h3>{}</h3>", day.display_name());
        body.push_str("<table>\n<tr><th>Start</th><th>End</th><th>Subject</th></tr>\n");
        for period in periods {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&period.start),
                escape(&period.end),
                escape(&period.subject)
            );
        }
        body.push_str("</table>\n");
    }

    app_page(username, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("Math"), "Math");
    }

    #[test]
    fn test_week_page_escapes_subjects() {
        let mut week = WeekTimetable::default();
        week.push(Day::Monday, Period::new("08:00", "09:00", "<script>"));
        let html = week_page("alice", &week);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<td><script>"));
        assert!(html.contains("<h3>Monday</h3>"));
    }

    #[test]
    fn test_edit_page_prefills_and_pads_rows() {
        let rows = vec![Period::new("08:00", "09:00", "Math")];
        let html = edit_page("alice", Day::Tuesday, &rows, 2, None);
        assert!(html.contains(r#"name="start_0" value="08:00""#));
        assert!(html.contains(r#"name="subject_1" value="""#));
        assert!(!html.contains("start_2"));
        assert!(html.contains(r#"<option value="tuesday" selected>"#));
    }
}
