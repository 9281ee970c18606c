//! Fixed sample dataset for new [`crate::InMemoryMailbox`] instances.
//!
//! Five inbox emails, two sent, one draft and one archived message. Emails 3
//! and 4 share a receive time.

use crate::record::{EmailRecord, FLAG_FLAGGED, FLAG_READ, FolderRecord};

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Address the sample account sends from.
pub const ACCOUNT_ADDRESS: &str = "me@example.com";

const fn at(unix_secs: i64) -> i64 {
    unix_secs * NANOS_PER_SEC
}

fn folder(id: &str, name: &str, kind: &str) -> FolderRecord {
    FolderRecord {
        id: id.to_string(),
        name: name.to_string(),
        kind: kind.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn email(
    id: u64,
    folder: &str,
    from: &str,
    to: &[&str],
    subject: &str,
    body: &str,
    received_at_ns: i64,
    flags: u8,
) -> EmailRecord {
    EmailRecord {
        id,
        folder: folder.to_string(),
        from: from.to_string(),
        to: to.iter().map(ToString::to_string).collect(),
        subject: subject.to_string(),
        body: body.to_string(),
        received_at_ns,
        flags,
    }
}

/// Sample folders, in display order.
#[must_use]
pub fn folders() -> Vec<FolderRecord> {
    vec![
        folder("inbox", "Inbox", "inbox"),
        folder("sent", "Sent", "sent"),
        folder("drafts", "Drafts", "drafts"),
        folder("archive", "Archive", "archive"),
        folder("trash", "Trash", "trash"),
    ]
}

/// Sample emails, in insertion order.
#[must_use]
pub fn emails() -> Vec<EmailRecord> {
    vec![
        email(
            1,
            "inbox",
            "Priya Natarajan <priya@acme.io>",
            &[ACCOUNT_ADDRESS],
            "Q1 roadmap review",
            "Can we walk through the roadmap before Thursday's planning session?",
            at(1_740_989_700),
            FLAG_READ,
        ),
        email(
            2,
            "inbox",
            "GitHub <noreply@github.com>",
            &[ACCOUNT_ADDRESS],
            "[mailport] CI failed on main",
            "The workflow run for commit 4f2a9c1 failed in the test job.",
            at(1_741_263_600),
            FLAG_FLAGGED,
        ),
        email(
            3,
            "inbox",
            "Marco Bellini <marco@bellini.it>",
            &[ACCOUNT_ADDRESS],
            "Dinner on Friday?",
            "We found a new place near the river. Are you free at eight?",
            at(1_741_192_800),
            0,
        ),
        email(
            4,
            "inbox",
            "CloudHost Billing <billing@cloudhost.com>",
            &[ACCOUNT_ADDRESS],
            "Your March invoice",
            "Your invoice for March is available. Amount due: 24.00 EUR.",
            at(1_741_192_800),
            FLAG_READ,
        ),
        email(
            5,
            "inbox",
            "Lena Vogel <lena@vogel.de>",
            &[ACCOUNT_ADDRESS],
            "Draft contract attached",
            "Please review the draft contract and send comments by Monday.",
            at(1_741_247_700),
            FLAG_FLAGGED,
        ),
        email(
            6,
            "sent",
            ACCOUNT_ADDRESS,
            &["priya@acme.io"],
            "Re: Q1 roadmap review",
            "Wednesday afternoon works for me.",
            at(1_740_992_520),
            FLAG_READ,
        ),
        email(
            7,
            "sent",
            ACCOUNT_ADDRESS,
            &["marco@bellini.it"],
            "Re: Dinner on Friday?",
            "Count me in!",
            at(1_741_194_600),
            FLAG_READ,
        ),
        email(
            8,
            "drafts",
            ACCOUNT_ADDRESS,
            &[],
            "Notes for the offsite",
            "Agenda: retro, hiring plan, on-call rotation.",
            at(1_741_285_800),
            FLAG_READ,
        ),
        email(
            9,
            "archive",
            "CloudHost <welcome@cloudhost.com>",
            &[ACCOUNT_ADDRESS],
            "Welcome to CloudHost",
            "Thanks for signing up. Your account is ready.",
            at(1_740_049_200),
            FLAG_READ,
        ),
    ]
}
