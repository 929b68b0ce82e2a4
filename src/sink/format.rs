// src/sink/format.rs
// =============================================================================
// Turns a record into the text that gets appended to the output file.
//
// Output is one pretty-printed JSON object per record, no surrounding array:
//
//   {
//     "url": "...",
//     "pageType": "UserGuidePage",
//     "title": "...",
//     "body": "...",
//     "code": "[{\"code\":...}]",
//     "table": "[{...}]",
//     "images": "[{...}]"
//   }
//
// Prose fields (title, body) are wrapped at a fixed width first; quotes and
// control characters are escaped by the JSON serializer.
// =============================================================================

use crate::record::CrawlRecord;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct PersistedRecord<'a> {
    url: &'a str,
    #[serde(rename = "pageType")]
    page_type: &'a str,
    title: String,
    body: String,
    code: &'a str,
    table: &'a str,
    images: &'a str,
}

/// Renders one record as a JSON object followed by a newline.
pub fn render_record(record: &CrawlRecord, wrap_width: usize) -> serde_json::Result<String> {
    let persisted = PersistedRecord {
        url: record.url(),
        page_type: record.page_type().as_str(),
        title: wrap_text(record.title(), wrap_width),
        body: wrap_text(record.text_content(), wrap_width),
        code: record.code_content(),
        table: record.table_content(),
        images: record.image_content(),
    };

    let mut rendered = serde_json::to_string_pretty(&persisted)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Wraps every line longer than `width` at word boundaries.
///
/// Existing line breaks (and blank lines between paragraphs) are kept.
/// A width of 0 disables wrapping.
pub fn wrap_text(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    text.split('\n')
        .map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
    if line.chars().count() <= width {
        return line.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}
