//! Behaviour of the in-memory adapter through the gateway ports and use cases.

#![allow(clippy::unwrap_used, missing_docs)]

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use mailport_core::{
    CreateEmail, CreateEmailRequest, Email, EmailFilter, EmailGateway, EmailId, EmailPatch,
    EmailQuery, EmailSort, Error, Folder, FolderGateway, FolderId, GetEmails, GetEmailsRequest,
    GetFolderStats, GetFolderStatsRequest, MappingError, MarkEmailRead, MarkEmailReadRequest,
    NewEmail, PageRequest, UpdateEmail, UpdateEmailRequest, UseCase,
};
use mailport_memory::InMemoryMailbox;

fn base_time() -> DateTime<Utc> {
    "2025-03-01T08:00:00Z".parse().unwrap()
}

fn email(id: u64, folder: &str, minutes: i64) -> Email {
    Email {
        id: EmailId(id),
        folder_id: FolderId::new(folder),
        from: format!("sender{id}@example.com"),
        to: vec!["me@example.com".to_string()],
        subject: format!("Message {id}"),
        body: String::new(),
        received_at: base_time() + Duration::minutes(minutes),
        is_read: false,
        is_flagged: false,
    }
}

/// Five inbox emails (id 5 newest) and two sent ones.
fn scenario_mailbox() -> InMemoryMailbox {
    let folders = vec![Folder::new("inbox", "Inbox"), Folder::new("sent", "Sent")];
    let emails = vec![
        email(1, "inbox", 10),
        email(2, "inbox", 20),
        email(3, "inbox", 30),
        email(4, "inbox", 40),
        email(5, "inbox", 50),
        email(6, "sent", 60),
        email(7, "sent", 70),
    ];
    InMemoryMailbox::with_dataset(folders, emails).unwrap()
}

fn inbox_query(page: u32, limit: u32) -> EmailQuery {
    EmailQuery {
        filter: EmailFilter::folder("inbox"),
        sort: EmailSort::NewestFirst,
        page: PageRequest::new(page, limit).unwrap(),
    }
}

fn ids(emails: &[Email]) -> Vec<u64> {
    emails.iter().map(|e| e.id.get()).collect()
}

fn new_email(folder: &str, subject: &str) -> NewEmail {
    NewEmail {
        folder_id: FolderId::new(folder),
        from: "me@example.com".to_string(),
        to: vec![],
        subject: subject.to_string(),
        body: String::new(),
        received_at: base_time(),
        is_read: false,
        is_flagged: false,
    }
}

#[tokio::test]
async fn test_inbox_pages() {
    let mailbox = scenario_mailbox();

    let first = mailbox.get_emails(inbox_query(1, 3)).await.unwrap();
    assert_eq!(ids(&first.items), vec![5, 4, 3]);
    assert_eq!(first.pagination.page, 1);
    assert_eq!(first.pagination.limit, 3);
    assert_eq!(first.pagination.total_items, 5);
    assert_eq!(first.pagination.total_pages, 2);

    let second = mailbox.get_emails(inbox_query(2, 3)).await.unwrap();
    assert_eq!(ids(&second.items), vec![2, 1]);
    assert_eq!(second.pagination.total_pages, 2);

    let third = mailbox.get_emails(inbox_query(3, 3)).await.unwrap();
    assert!(third.items.is_empty());
    assert_eq!(third.pagination.total_items, 5);
    assert_eq!(third.pagination.total_pages, 2);
}

#[tokio::test]
async fn test_folder_filter_only_returns_that_folder() {
    let mailbox = scenario_mailbox();
    let mut query = inbox_query(1, 10);
    query.filter = EmailFilter::folder("sent");

    let page = mailbox.get_emails(query).await.unwrap();
    assert_eq!(ids(&page.items), vec![7, 6]);
    assert!(page.items.iter().all(|e| e.folder_id.as_str() == "sent"));
}

#[tokio::test]
async fn test_unknown_folder_filter_is_empty() {
    let mailbox = scenario_mailbox();
    let mut query = inbox_query(1, 10);
    query.filter = EmailFilter::folder("does-not-exist");

    let page = mailbox.get_emails(query).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.pagination.total_items, 0);
    assert_eq!(page.pagination.total_pages, 0);
}

#[tokio::test]
async fn test_repeated_queries_are_stable() {
    let mailbox = InMemoryMailbox::seeded();
    let query = EmailQuery {
        page: PageRequest::new(1, 50).unwrap(),
        ..EmailQuery::default()
    };

    let first = mailbox.get_emails(query.clone()).await.unwrap();
    let second = mailbox.get_emails(query).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.items.len(), 9);
}

#[tokio::test]
async fn test_create_is_visible_to_next_query() {
    let mailbox = scenario_mailbox();

    let created = mailbox
        .create_email(new_email("sent", "Weekly sync notes"))
        .await
        .unwrap();
    assert_eq!(created.id, EmailId(8));

    let mut query = inbox_query(1, 10);
    query.filter = EmailFilter {
        search: Some("weekly SYNC".to_string()),
        ..EmailFilter::folder("sent")
    };
    let page = mailbox.get_emails(query).await.unwrap();
    assert_eq!(page.items, vec![created.clone()]);

    assert_eq!(mailbox.get_email(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn test_update_is_visible_to_next_query() {
    let mailbox = scenario_mailbox();

    let moved = mailbox
        .update_email(
            EmailId(5),
            EmailPatch {
                folder_id: Some(FolderId::new("sent")),
                is_flagged: Some(true),
                ..EmailPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.folder_id.as_str(), "sent");
    assert!(moved.is_flagged);

    let inbox = mailbox.get_emails(inbox_query(1, 10)).await.unwrap();
    assert_eq!(ids(&inbox.items), vec![4, 3, 2, 1]);

    let mut query = inbox_query(1, 10);
    query.filter = EmailFilter {
        is_flagged: Some(true),
        ..EmailFilter::default()
    };
    let flagged = mailbox.get_emails(query).await.unwrap();
    assert_eq!(ids(&flagged.items), vec![5]);
}

#[tokio::test]
async fn test_missing_email_and_folder_are_not_found() {
    let mailbox = scenario_mailbox();

    let err = mailbox.get_email(EmailId(99)).await.unwrap_err();
    assert!(matches!(err, Error::NotFound { resource: "email", .. }));

    let err = mailbox
        .update_email(EmailId(99), EmailPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { resource: "email", .. }));

    let err = mailbox
        .create_email(new_email("spam", "Win a prize"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { resource: "folder", .. }));

    let err = mailbox
        .update_email(
            EmailId(1),
            EmailPatch {
                folder_id: Some(FolderId::new("spam")),
                is_read: Some(true),
                ..EmailPatch::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { resource: "folder", .. }));

    // The failed update left the email untouched.
    let email = mailbox.get_email(EmailId(1)).await.unwrap();
    assert!(!email.is_read);
    assert_eq!(email.folder_id.as_str(), "inbox");
}

#[tokio::test]
async fn test_exhausted_id_space_is_an_error() {
    let mailbox = InMemoryMailbox::with_dataset(
        vec![Folder::new("inbox", "Inbox")],
        vec![email(u64::MAX, "inbox", 0)],
    )
    .unwrap();

    let err = mailbox
        .create_email(new_email("inbox", "One too many"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Backend(_)), "{err:?}");
    assert_eq!(mailbox.email_count().await, 1);
}

#[test]
fn test_dataset_rejects_duplicate_ids() {
    let folders = vec![Folder::new("inbox", "Inbox")];
    let err = InMemoryMailbox::with_dataset(
        folders.clone(),
        vec![email(1, "inbox", 0), email(1, "inbox", 5)],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::Mapping(MappingError::InvalidField { field: "id", .. })
    ));

    let err = InMemoryMailbox::with_dataset(
        vec![Folder::new("inbox", "Inbox"), Folder::new("inbox", "Other")],
        vec![],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::Mapping(MappingError::InvalidField {
            field: "folder id",
            ..
        })
    ));
}

#[test]
fn test_dataset_rejects_email_without_folder() {
    let err = InMemoryMailbox::with_dataset(
        vec![Folder::new("inbox", "Inbox")],
        vec![email(1, "inbox", 0), email(2, "", 5)],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::Mapping(MappingError::MissingField("folder"))
    ));
}

#[test]
fn test_dataset_rejects_unknown_folder_reference() {
    let err = InMemoryMailbox::with_dataset(
        vec![Folder::new("inbox", "Inbox")],
        vec![email(1, "spam", 0)],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::NotFound {
            resource: "folder",
            ..
        }
    ));
    assert_eq!(err.to_string(), "folder not found: spam");
}

#[tokio::test]
async fn test_returned_copies_do_not_alias_dataset() {
    let mailbox = scenario_mailbox();

    let mut email = mailbox.get_email(EmailId(1)).await.unwrap();
    email.subject = "changed locally".to_string();

    assert_eq!(
        mailbox.get_email(EmailId(1)).await.unwrap().subject,
        "Message 1"
    );
}

#[tokio::test]
async fn test_folders_and_stats() {
    let mailbox = InMemoryMailbox::seeded();

    let page = mailbox
        .get_folders(PageRequest::new(1, 2).unwrap())
        .await
        .unwrap();
    let names: Vec<&str> = page.items.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Inbox", "Sent"]);
    assert_eq!(page.pagination.total_items, 5);
    assert_eq!(page.pagination.total_pages, 3);

    let stats = mailbox.get_folder_stats(None).await.unwrap();
    assert_eq!(stats.len(), 5);
    let inbox = &stats[0];
    assert_eq!(inbox.folder_id.as_str(), "inbox");
    assert_eq!((inbox.total, inbox.unread, inbox.flagged), (5, 3, 2));
    let trash = &stats[4];
    assert_eq!((trash.total, trash.unread, trash.flagged), (0, 0, 0));

    let sent = mailbox
        .get_folder_stats(Some(FolderId::new("sent")))
        .await
        .unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].total, 2);

    let err = mailbox
        .get_folder_stats(Some(FolderId::new("nope")))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_empty_mailbox() {
    let mailbox = InMemoryMailbox::empty();
    let page = mailbox.get_emails(EmailQuery::default()).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.pagination.total_pages, 0);
    assert!(mailbox.get_folder_stats(None).await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_unique_ids() {
    let mailbox = Arc::new(scenario_mailbox());

    let handles: Vec<_> = (0..50)
        .map(|n| {
            let mailbox = Arc::clone(&mailbox);
            tokio::spawn(async move {
                mailbox
                    .create_email(new_email("inbox", &format!("Burst {n}")))
                    .await
                    .unwrap()
                    .id
            })
        })
        .collect();

    let mut created = HashSet::new();
    for handle in handles {
        assert!(created.insert(handle.await.unwrap()));
    }

    assert_eq!(created.len(), 50);
    assert_eq!(mailbox.email_count().await, 57);

    let page = mailbox.get_emails(inbox_query(1, 3)).await.unwrap();
    assert_eq!(page.pagination.total_items, 55);
    assert_eq!(page.pagination.total_pages, 19);
}

#[tokio::test]
async fn test_use_cases_over_adapter() {
    let mailbox = Arc::new(scenario_mailbox());
    let get_emails = GetEmails::new(mailbox.clone());
    let create = CreateEmail::new(mailbox.clone());
    let update = UpdateEmail::new(mailbox.clone());
    let mark_read = MarkEmailRead::new(mailbox.clone());
    let stats = GetFolderStats::new(mailbox.clone());

    let created = create
        .execute(CreateEmailRequest {
            folder_id: FolderId::new("inbox"),
            from: "Dana <dana@example.org>".to_string(),
            subject: "Launch checklist".to_string(),
            received_at: Some(base_time() + Duration::hours(5)),
            ..CreateEmailRequest::default()
        })
        .await
        .unwrap();

    let page = get_emails
        .execute(GetEmailsRequest {
            filter: EmailFilter::folder("inbox"),
            limit: Some(3),
            ..GetEmailsRequest::default()
        })
        .await
        .unwrap();
    assert_eq!(page.items[0], created);
    assert_eq!(page.pagination.total_items, 6);

    let read = mark_read
        .execute(MarkEmailReadRequest {
            id: created.id,
            read: true,
        })
        .await
        .unwrap();
    assert!(read.is_read);

    let err = update
        .execute(UpdateEmailRequest {
            id: None,
            patch: EmailPatch::default(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidRequest(_)));

    let inbox = stats
        .execute(GetFolderStatsRequest {
            folder_id: Some(FolderId::new("inbox")),
        })
        .await
        .unwrap();
    assert_eq!((inbox[0].total, inbox[0].unread), (6, 5));
}
