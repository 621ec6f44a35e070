use std::fs;
use std::path::Path;
use std::time::SystemTime;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph, Widget};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::state::AppState;

/// Details of the selected directory entry: name, kind, size, word/line
/// counts for files, and timestamps. Re-read from disk on every draw; the
/// listing itself is a snapshot, the metadata is live.
pub(super) struct MetadataPaneWidget {
    lines: Vec<String>,
}

impl MetadataPaneWidget {
    pub(super) fn from_state(state: &AppState) -> Self {
        let lines = state
            .active()
            .dir
            .selected()
            .filter(|selected| selected.exists())
            .map(|selected| describe(selected))
            .unwrap_or_else(|| vec!["No file selected".to_string()]);
        Self { lines }
    }
}

impl Widget for MetadataPaneWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines.join("\n"))
            .block(
                Block::bordered()
                    .title(" Metadata ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

fn describe(path: &Path) -> Vec<String> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let (kind, words, lines) = if path.is_dir() {
        ("Directory".to_string(), 0, 0)
    } else {
        let kind = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_else(|| "No extension".to_string());
        let (words, lines) = match fs::read(path) {
            Ok(bytes) => {
                let text = String::from_utf8_lossy(&bytes);
                let words = text.split_whitespace().count();
                let lines = if text.is_empty() {
                    0
                } else {
                    text.matches('\n').count() + 1
                };
                (words, lines)
            }
            Err(_) => (0, 0),
        };
        (kind, words, lines)
    };

    let metadata = fs::metadata(path).ok();
    let size = metadata.as_ref().map(|meta| meta.len()).unwrap_or(0);
    let created = metadata
        .as_ref()
        .and_then(|meta| meta.created().ok())
        .map(fmt_time)
        .unwrap_or_else(|| "unknown".to_string());
    let modified = metadata
        .as_ref()
        .and_then(|meta| meta.modified().ok())
        .map(fmt_time)
        .unwrap_or_else(|| "unknown".to_string());

    vec![
        format!("Name: {}", name),
        format!("Type: {}", kind),
        format!("Size: {} bytes", size),
        format!("Words: {}", words),
        format!("Lines: {}", lines),
        format!("Created: {}", created),
        format!("Modified: {}", modified),
    ]
}

fn fmt_time(timestamp: SystemTime) -> String {
    OffsetDateTime::from(timestamp)
        .format(&format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ))
        .unwrap_or_else(|_| "unknown".to_string())
}
