// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML rendering for highlighted segments.
//!
//! Post text is escaped: a title containing `<script>` renders as text.

use super::{Excerpt, Segment, ELLIPSIS};

/// Escape the five HTML-significant chars.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render segments, wrapping highlights in `<span class="...">`.
pub fn to_html(segments: &[Segment], class_name: &str) -> String {
    let class_name = escape_html(class_name);
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Plain(text) => out.push_str(&escape_html(text)),
            Segment::Highlighted(text) => {
                out.push_str("<span class=\"");
                out.push_str(&class_name);
                out.push_str("\">");
                out.push_str(&escape_html(text));
                out.push_str("</span>");
            }
        }
    }
    out
}

impl Excerpt<'_> {
    /// [`to_html`] with ellipsis markers.
    pub fn to_html(&self, class_name: &str) -> String {
        let body = to_html(&self.segments, class_name);
        match (self.leading, self.trailing) {
            (false, false) => body,
            (leading, trailing) => format!(
                "{}{}{}",
                if leading { ELLIPSIS } else { "" },
                body,
                if trailing { ELLIPSIS } else { "" }
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape_html("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_to_html() {
        let segments = [Segment::Plain("a "), Segment::Highlighted("<b>"), Segment::Plain(" c")];
        assert_eq!(
            to_html(&segments, "hl"),
            "a <span class=\"hl\">&lt;b&gt;</span> c"
        );
    }

    #[test]
    fn test_excerpt_html_markers() {
        let excerpt = Excerpt {
            start: 4,
            end: 9,
            leading: true,
            trailing: false,
            segments: vec![Segment::Highlighted("match")],
        };
        assert_eq!(excerpt.to_html("m"), "...<span class=\"m\">match</span>");
    }
}
