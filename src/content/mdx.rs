// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! MDX source to searchable plain text.
//!
//! MDX is markdown plus ESM lines and JSX. The ESM lines (`import`/`export`)
//! are dropped before parsing; JSX parses as HTML, which is skipped along
//! with fenced and indented code. What survives is prose, headings, list
//! items, link text, and inline code, joined with single spaces.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markup from an MDX body.
pub fn plain_text(mdx: &str) -> String {
    let source = strip_esm(mdx);
    let parser = Parser::new_ext(&source, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);

    let mut out = String::new();
    let mut in_code_block = false;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::Text(text) | Event::Code(text) if !in_code_block => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => push_space(&mut out),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item | TagEnd::TableCell) => {
                push_space(&mut out)
            }
            // JSX components and raw HTML fall through here
            _ => {}
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop top-level `import`/`export` statements. A statement ends on a line
/// ending in `;`, on a blank line, or once its brackets balance.
fn strip_esm(mdx: &str) -> String {
    let mut kept = Vec::new();
    // Unclosed brackets of the statement being skipped
    let mut open: Option<i32> = None;

    for line in mdx.lines() {
        let trimmed = line.trim_end();
        if let Some(depth) = open {
            let depth = depth + bracket_balance(trimmed);
            let done = trimmed.is_empty() || trimmed.ends_with(';') || depth <= 0;
            open = if done { None } else { Some(depth) };
            continue;
        }
        if trimmed.starts_with("import ") || trimmed.starts_with("export ") {
            let depth = bracket_balance(trimmed);
            let complete = trimmed.ends_with(';')
                || is_single_line_import(trimmed)
                || (depth <= 0 && !trimmed.ends_with(['=', ',']));
            open = if complete { None } else { Some(depth.max(1)) };
            continue;
        }
        kept.push(line);
    }
    kept.join("\n")
}

/// `import X from "y"` without a trailing semicolon.
fn is_single_line_import(line: &str) -> bool {
    line.starts_with("import ") && (line.ends_with('"') || line.ends_with('\''))
}

/// Openers minus closers of `{`, `[`, and `(` on one line.
fn bracket_balance(line: &str) -> i32 {
    line.chars()
        .map(|c| match c {
            '{' | '[' | '(' => 1,
            '}' | ']' | ')' => -1,
            _ => 0,
        })
        .sum()
}

fn push_space(out: &mut String) {
    if !out.is_empty() && !out.ends_with(' ') {
        out.push(' ');
    }
}
