//! Human-readable durations and encodings shared by the renderers

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left alone by `encodeURIComponent`; everything else is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Format a millisecond span as `"2 h 5 m 30 s"`.
///
/// Hours are shown only when non-zero, minutes when they or the hours are
/// non-zero; seconds are always shown. Negative spans render as `"N/A"`.
#[must_use]
pub fn format_duration(millis: i64) -> String {
    if millis < 0 {
        log::debug!("negative duration: {millis} ms");
        return "N/A".to_string();
    }

    let total_seconds = millis / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{hours} h"));
    }
    if minutes > 0 || hours > 0 {
        parts.push(format!("{minutes} m"));
    }
    parts.push(format!("{seconds} s"));

    parts.join(" ")
}

/// Percent-encode one URI component the way browsers' `encodeURIComponent` does.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Target of the download affordance for a listing entry path.
#[must_use]
pub fn download_href(path: &str) -> String {
    format!("/download/{}", encode_component(path))
}
