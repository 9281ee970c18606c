//! Rendering of command results as text or JSON.

use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;

use mailport_core::{Email, EmailDtoMapper, Folder, FolderDtoMapper, FolderStats, Mapper, Page};

const FROM_WIDTH: usize = 30;
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Aligned, human-readable text.
    Text,
    /// Pretty-printed JSON in the external DTO shape.
    Json,
}

impl Format {
    /// Render a page of folders.
    pub fn folders(self, page: Page<Folder>) -> Result<String> {
        match self {
            Self::Json => json(&page.try_map(|folder| FolderDtoMapper.map_to(folder))?),
            Self::Text => {
                let mut out = format!("{:<12} {:<16} {}\n", "ID", "NAME", "TYPE");
                for folder in &page.items {
                    let _ = writeln!(
                        out,
                        "{:<12} {:<16} {}",
                        folder.id.as_str(),
                        folder.name,
                        folder.folder_type.as_str()
                    );
                }
                out.push_str(&summary(&page, "folder"));
                Ok(out)
            }
        }
    }

    /// Render a page of emails.
    pub fn emails(self, page: Page<Email>) -> Result<String> {
        match self {
            Self::Json => json(&page.try_map(|email| EmailDtoMapper.map_to(email))?),
            Self::Text => {
                let mut out = format!(
                    "{:>5} {:<2} {:<16} {:<FROM_WIDTH$} {}\n",
                    "ID", "", "RECEIVED", "FROM", "SUBJECT"
                );
                for email in &page.items {
                    let _ = writeln!(
                        out,
                        "{:>5} {}{} {:<16} {:<FROM_WIDTH$} {}",
                        email.id.get(),
                        if email.is_read { ' ' } else { 'N' },
                        if email.is_flagged { '!' } else { ' ' },
                        email.received_at.format(TIME_FORMAT),
                        truncate(&email.from, FROM_WIDTH),
                        email.subject
                    );
                }
                out.push_str(&summary(&page, "email"));
                Ok(out)
            }
        }
    }

    /// Render a single email with its body.
    pub fn email(self, email: Email) -> Result<String> {
        match self {
            Self::Json => json(&EmailDtoMapper.map_to(email)?),
            Self::Text => {
                let mut state = vec![if email.is_read { "read" } else { "unread" }];
                if email.is_flagged {
                    state.push("flagged");
                }

                let mut out = String::new();
                let _ = writeln!(out, "Id:       {}", email.id);
                let _ = writeln!(out, "Folder:   {}", email.folder_id);
                let _ = writeln!(out, "From:     {}", email.from);
                let _ = writeln!(out, "To:       {}", email.to.join(", "));
                let _ = writeln!(
                    out,
                    "Date:     {} UTC",
                    email.received_at.format(TIME_FORMAT)
                );
                let _ = writeln!(out, "Subject:  {}", email.subject);
                let _ = writeln!(out, "Status:   {}", state.join(", "));
                if !email.body.is_empty() {
                    let _ = write!(out, "\n{}", email.body);
                }
                Ok(out)
            }
        }
    }

    /// Render folder statistics.
    pub fn stats(self, stats: &[FolderStats]) -> Result<String> {
        match self {
            Self::Json => json(&stats),
            Self::Text => {
                let mut out = format!(
                    "{:<12} {:>6} {:>7} {:>8}",
                    "FOLDER", "TOTAL", "UNREAD", "FLAGGED"
                );
                for entry in stats {
                    let _ = write!(
                        out,
                        "\n{:<12} {:>6} {:>7} {:>8}",
                        entry.folder_id.as_str(), entry.total, entry.unread, entry.flagged
                    );
                }
                Ok(out)
            }
        }
    }
}

fn json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn summary<T>(page: &Page<T>, noun: &str) -> String {
    let pagination = &page.pagination;
    let plural = if pagination.total_items == 1 { "" } else { "s" };
    if pagination.total_items == 0 {
        return format!("no {noun}s");
    }

    let mut line = format!(
        "page {} of {}, {} {noun}{plural}",
        pagination.page, pagination.total_pages, pagination.total_items
    );
    if page.is_empty() {
        line.push_str(" (past the last page)");
    } else if pagination.has_next() {
        let _ = write!(line, "; next: --page {}", u64::from(pagination.page) + 1);
    }
    line
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width.saturating_sub(3)).collect();
    short.push_str("...");
    short
}
