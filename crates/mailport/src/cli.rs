//! Command-line interface.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use mailport_core::{
    EmailFilter, EmailId, EmailPatch, EmailSort, FolderId, GetEmailRequest, GetEmailsRequest,
    GetFolderStatsRequest, GetFoldersRequest, MarkEmailReadRequest, UpdateEmailRequest, UseCase,
};

use crate::output::Format;
use crate::wiring::Services;

#[derive(Debug, Parser)]
#[command(name = "mailport", version)]
#[command(about = "Browse a mailbox through pluggable backends", long_about = None)]
pub struct Cli {
    /// Config file (default: <config dir>/mailport/config.json)
    #[arg(long, env = "MAILPORT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List folders
    Folders {
        #[command(flatten)]
        page: PageArgs,
    },

    /// List emails
    Emails(EmailsArgs),

    /// Show one email
    Show { id: u64 },

    /// Mark an email as read
    MarkRead {
        id: u64,

        /// Mark as unread instead
        #[arg(long)]
        unread: bool,
    },

    /// Flag an email
    Flag {
        id: u64,

        /// Clear the flag instead
        #[arg(long)]
        off: bool,
    },

    /// Move an email to another folder
    Move { id: u64, folder: String },

    /// Total, unread and flagged counts per folder
    Stats {
        /// Only this folder
        #[arg(long)]
        folder: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct PageArgs {
    /// 1-based page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Items per page (default from config)
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct EmailsArgs {
    /// Only emails in this folder
    #[arg(long)]
    pub folder: Option<String>,

    /// Case-insensitive text in subject, sender or body
    #[arg(long)]
    pub search: Option<String>,

    /// Only unread emails
    #[arg(long, conflicts_with = "read")]
    pub unread: bool,

    /// Only read emails
    #[arg(long)]
    pub read: bool,

    /// Only flagged emails
    #[arg(long)]
    pub flagged: bool,

    /// Oldest first
    #[arg(long)]
    pub oldest_first: bool,

    #[command(flatten)]
    pub page: PageArgs,
}

impl EmailsArgs {
    fn into_request(self) -> GetEmailsRequest {
        let is_read = match (self.read, self.unread) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        GetEmailsRequest {
            filter: EmailFilter {
                folder_id: self.folder.map(FolderId::new),
                search: self.search,
                is_read,
                is_flagged: self.flagged.then_some(true),
            },
            sort: if self.oldest_first {
                EmailSort::OldestFirst
            } else {
                EmailSort::NewestFirst
            },
            page: self.page.page,
            limit: self.page.limit,
        }
    }
}

impl Command {
    /// Run the command and render its result.
    pub async fn run(self, services: &Services, format: Format) -> Result<String> {
        match self {
            Self::Folders { page } => {
                let folders = services
                    .get_folders
                    .execute(GetFoldersRequest {
                        page: page.page,
                        limit: page.limit,
                    })
                    .await?;
                format.folders(folders)
            }
            Self::Emails(args) => {
                let emails = services.get_emails.execute(args.into_request()).await?;
                format.emails(emails)
            }
            Self::Show { id } => {
                let email = services
                    .get_email
                    .execute(GetEmailRequest { id: EmailId(id) })
                    .await?;
                format.email(email)
            }
            Self::MarkRead { id, unread } => {
                let email = services
                    .mark_email_read
                    .execute(MarkEmailReadRequest {
                        id: EmailId(id),
                        read: !unread,
                    })
                    .await?;
                format.email(email)
            }
            Self::Flag { id, off } => {
                let patch = EmailPatch {
                    is_flagged: Some(!off),
                    ..EmailPatch::default()
                };
                update(services, id, patch, format).await
            }
            Self::Move { id, folder } => {
                let patch = EmailPatch {
                    folder_id: Some(FolderId::new(folder)),
                    ..EmailPatch::default()
                };
                update(services, id, patch, format).await
            }
            Self::Stats { folder } => {
                let stats = services
                    .get_folder_stats
                    .execute(GetFolderStatsRequest {
                        folder_id: folder.map(FolderId::new),
                    })
                    .await?;
                format.stats(&stats)
            }
        }
    }
}

async fn update(
    services: &Services,
    id: u64,
    patch: EmailPatch,
    format: Format,
) -> Result<String> {
    let email = services
        .update_email
        .execute(UpdateEmailRequest {
            id: Some(EmailId(id)),
            patch,
        })
        .await?;
    format.email(email)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::config::AppConfig;
    use crate::wiring::build_services;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mailport").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_emails_flags_build_request() {
        let cli = parse(&[
            "emails",
            "--folder",
            "inbox",
            "--unread",
            "--flagged",
            "--oldest-first",
            "--limit",
            "3",
            "--json",
        ]);
        assert!(cli.json);

        let Command::Emails(args) = cli.command else {
            panic!("expected emails command");
        };
        let request = args.into_request();
        assert_eq!(request.filter.folder_id, Some(FolderId::new("inbox")));
        assert_eq!(request.filter.is_read, Some(false));
        assert_eq!(request.filter.is_flagged, Some(true));
        assert_eq!(request.sort, EmailSort::OldestFirst);
        assert_eq!((request.page, request.limit), (None, Some(3)));
    }

    #[test]
    fn test_read_and_unread_conflict() {
        let result = Cli::try_parse_from(["mailport", "emails", "--read", "--unread"]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_zero_limit_is_reported() {
        let services = build_services(&AppConfig::default()).await.unwrap();
        let cli = parse(&["emails", "--limit", "0"]);

        let err = cli.command.run(&services, Format::Text).await.unwrap_err();
        assert!(err.to_string().starts_with("Invalid request"));
    }

    #[tokio::test]
    async fn test_mark_read_then_filter() {
        let services = build_services(&AppConfig::default()).await.unwrap();

        parse(&["mark-read", "3"])
            .command
            .run(&services, Format::Text)
            .await
            .unwrap();

        let request = match parse(&["emails", "--folder", "inbox", "--unread"]).command {
            Command::Emails(args) => args.into_request(),
            other => panic!("unexpected {other:?}"),
        };
        let page = services.get_emails.execute(request).await.unwrap();
        let ids: Vec<u64> = page.items.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[tokio::test]
    async fn test_move_to_unknown_folder() {
        let services = build_services(&AppConfig::default()).await.unwrap();
        let err = parse(&["move", "1", "nowhere"])
            .command
            .run(&services, Format::Text)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "folder not found: nowhere");
    }
}
