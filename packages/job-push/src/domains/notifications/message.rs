//! Rendering a job list into the chat message body.
//!
//! Output uses Telegram's HTML parse mode: `<b>`, `<i>` and `<a href>` only.
//! Job fields are escaped so a title like "R&D <Lead>" cannot break the
//! markup.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::common::utils::escape_html;
use crate::domains::jobs::Job;

pub const MESSAGE_TITLE: &str = "LinkedIn Jobs Daily Push";
pub const NO_JOBS_NOTICE: &str = "No new jobs matching your filters today.";

/// Render the digest for `jobs`, stamped with `now`.
pub fn render(jobs: &[Job], keyword_label: &str, now: DateTime<Tz>) -> String {
    let mut lines = vec![
        format!("<b>{}</b>", MESSAGE_TITLE),
        format!("<i>{}</i>", now.format("%Y-%m-%d %H:%M %Z")),
        format!("Keywords: {}", escape_html(keyword_label)),
        format!("New jobs found: {}", jobs.len()),
        String::new(),
    ];

    for (i, job) in jobs.iter().enumerate() {
        lines.push(format!(
            "{}. <a href=\"{}\">{}</a>",
            i + 1,
            escape_html(&job.url),
            escape_html(&job.title)
        ));
        lines.push(format!(
            "   {} | {}",
            escape_html(&job.company),
            escape_html(&job.location)
        ));
        if !job.posted.is_empty() {
            lines.push(format!("   Posted: {}", escape_html(&job.posted)));
        }
        lines.push(String::new());
    }

    if jobs.is_empty() {
        lines.push(NO_JOBS_NOTICE.to_string());
    }

    lines.join("\n")
}

/// [`render`] using the current time in `tz`.
pub fn render_now(jobs: &[Job], keyword_label: &str, tz: Tz) -> String {
    render(jobs, keyword_label, Utc::now().with_timezone(&tz))
}
