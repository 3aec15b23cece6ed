//! Markup normalization for loosely styled plan text.
//!
//! Generated plans use a loose markdown dialect: `**bold**` spans, bullet
//! glyphs, numbered items and the occasional heading. [`normalize`] turns that
//! into a small structural markup of `<p>` paragraphs, `<ul>`/`<li>` lists and
//! `<strong>` spans, one element per output line. The output is stable under
//! re-normalization, so stored markup can be run through the normalizer again
//! without changing.
//!
//! ```rust
//! use dayplan_core::markup::normalize;
//!
//! let markup = normalize("**Breakfast:** oats\n- banana\n- milk");
//! assert_eq!(
//!     markup,
//!     "<p><strong>Breakfast:</strong> oats</p>\n<ul>\n<li>banana</li>\n<li>milk</li>\n</ul>"
//! );
//! assert_eq!(normalize(&markup), markup);
//! ```

use std::sync::LazyLock;

use regex::Regex;

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static LIST_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:\*|-|•|\d+\.)\s+").unwrap());
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6}(?:\s+|$)").unwrap());
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:-{3,}|\*{3,}|_{3,})$").unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Returns true for a horizontal separator line such as `---`.
pub fn is_separator(line: &str) -> bool {
    SEPARATOR_RE.is_match(line.trim())
}

/// Converts loosely styled text into paragraph/list markup.
///
/// Rules, in order: bold spans become `<strong>`; consecutive list lines
/// (`*`, `-`, `•` or `<n>.` followed by whitespace) form one `<ul>`; any other
/// non-empty line becomes a `<p>`; blank lines close an open list. Stray `**`
/// markers, heading hashes and separator lines are dropped.
pub fn normalize(text: &str) -> String {
    let text = text.trim().replace("\r\n", "\n").replace('\r', "\n");
    if text.is_empty() {
        return String::new();
    }

    let text = BOLD_RE.replace_all(&text, "<strong>$1</strong>");
    let mut out: Vec<String> = Vec::new();
    let mut in_list = false;

    for raw in text.split('\n') {
        let line = raw.trim();
        if line.is_empty() || is_separator(line) {
            close_list(&mut out, &mut in_list);
            continue;
        }

        if let Some(kind) = Structural::classify(line) {
            match kind {
                Structural::Item => {}
                Structural::ListClose => in_list = false,
                Structural::ListOpen | Structural::Paragraph => {
                    close_list(&mut out, &mut in_list)
                }
            }
            out.push(line.to_string());
            continue;
        }

        let line = line.replace("**", "");
        let line = line.trim();

        if let Some(marker) = LIST_RE.find(line) {
            let item = line[marker.end()..].trim();
            if item.is_empty() {
                continue;
            }
            if !in_list {
                out.push("<ul>".to_string());
                in_list = true;
            }
            out.push(format!("<li>{item}</li>"));
        } else {
            let line = HEADING_RE.replace(line, "");
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            close_list(&mut out, &mut in_list);
            out.push(format!("<p>{line}</p>"));
        }
    }

    close_list(&mut out, &mut in_list);
    out.join("\n")
}

/// Removes markup tags, leaving the plain text lines behind.
pub fn strip_tags(markup: &str) -> String {
    TAG_RE.replace_all(markup, "").trim().to_string()
}

/// Renders normalized markup back as markdown for terminal display.
///
/// Paragraphs are separated by blank lines, list items become `- ` bullets and
/// `<strong>` spans become `**` emphasis.
pub fn to_markdown(markup: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut prev_item = false;

    for line in markup.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match Structural::classify(line) {
            Some(Structural::ListOpen | Structural::ListClose) => continue,
            Some(Structural::Item) => {
                if !prev_item && !out.is_empty() {
                    out.push(String::new());
                }
                out.push(format!("- {}", inline_markdown(&line[4..line.len() - 5])));
                prev_item = true;
            }
            Some(Structural::Paragraph) => {
                if !out.is_empty() {
                    out.push(String::new());
                }
                out.push(inline_markdown(&line[3..line.len() - 4]));
                prev_item = false;
            }
            None => {
                if !out.is_empty() {
                    out.push(String::new());
                }
                out.push(inline_markdown(line));
                prev_item = false;
            }
        }
    }

    out.join("\n")
}

fn inline_markdown(text: &str) -> String {
    let text = text.replace("<strong>", "**").replace("</strong>", "**");
    TAG_RE.replace_all(&text, "").into_owned()
}

fn close_list(out: &mut Vec<String>, in_list: &mut bool) {
    if *in_list {
        out.push("</ul>".to_string());
        *in_list = false;
    }
}

/// A line that is already normalized markup.
enum Structural {
    Paragraph,
    ListOpen,
    ListClose,
    Item,
}

impl Structural {
    fn classify(line: &str) -> Option<Self> {
        if line == "<ul>" {
            Some(Self::ListOpen)
        } else if line == "</ul>" {
            Some(Self::ListClose)
        } else if line.starts_with("<p>") && line.ends_with("</p>") {
            Some(Self::Paragraph)
        } else if line.starts_with("<li>") && line.ends_with("</li>") {
            Some(Self::Item)
        } else {
            None
        }
    }
}
