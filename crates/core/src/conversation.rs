//! Conversation derivation over application message threads.
//!
//! The messages page presents one conversation per application. This
//! module derives those summaries from a fetched application list:
//! applications without messages are dropped, the last message is always
//! the tail of the thread (the server keeps threads chronological; the
//! assembler never re-sorts them), and the resulting list is ordered by
//! the recency of that tail.
//!
//! Unread counts are real or absent, never invented: the platform API
//! carries no per-message read-state, so counting requires a
//! caller-supplied [`ReadCursors`], typically persisted by the embedding
//! UI. Without cursors every conversation reports zero unread.

use std::collections::HashMap;

use crate::model::{Application, Message, UserRef};
use crate::status::ApplicationStatus;
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Options and cursors
// ---------------------------------------------------------------------------

/// Ordering of the derived conversation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversationOrder {
    /// Most recent last message first.
    #[default]
    Recent,
    /// Oldest last message first.
    Oldest,
}

/// Filters applied while assembling conversations.
#[derive(Debug, Clone, Default)]
pub struct AssembleOptions {
    pub order: ConversationOrder,
    /// Case-insensitive substring match over the application title and
    /// the last message content.
    pub search: Option<String>,
    /// Keep only conversations whose application has this status.
    pub status: Option<ApplicationStatus>,
}

/// Per-conversation read positions for one viewer.
#[derive(Debug, Clone)]
pub struct ReadCursors {
    viewer: EntityId,
    last_read: HashMap<EntityId, Timestamp>,
}

impl ReadCursors {
    /// Cursors for `viewer`, with nothing read yet.
    pub fn new(viewer: impl Into<EntityId>) -> Self {
        Self {
            viewer: viewer.into(),
            last_read: HashMap::new(),
        }
    }

    /// Record that the viewer has read `application_id` up to `at`.
    /// Cursors only advance; an older timestamp is ignored.
    pub fn mark_read(&mut self, application_id: impl Into<EntityId>, at: Timestamp) {
        let cursor = self.last_read.entry(application_id.into()).or_insert(at);
        if *cursor < at {
            *cursor = at;
        }
    }

    pub fn viewer(&self) -> &str {
        &self.viewer
    }

    /// Messages in `thread` the viewer has not read: newer than their
    /// cursor and not authored by them.
    fn unread_in(&self, application_id: &str, thread: &[Message]) -> usize {
        let cursor = self.last_read.get(application_id).copied();
        thread
            .iter()
            .filter(|message| message.sender.id() != self.viewer)
            .filter(|message| match cursor {
                Some(at) => message.created_at > at,
                None => true,
            })
            .count()
    }
}

// ---------------------------------------------------------------------------
// Conversation summary
// ---------------------------------------------------------------------------

/// One row of the messages page: an application's thread, summarized.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub application_id: EntityId,
    pub title: String,
    pub status: ApplicationStatus,
    pub applicant: UserRef,
    /// Tail of the thread. Threads are chronological, so this is also
    /// the newest message.
    pub last_message: Message,
    pub message_count: usize,
    /// Unread messages for the viewer; zero without read cursors.
    pub unread_count: usize,
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Derive conversation summaries from `applications`.
///
/// Applications with empty threads are dropped. Output order follows
/// `options.order`; the sort is stable, so ties keep input order.
pub fn assemble(
    applications: &[Application],
    options: &AssembleOptions,
    cursors: Option<&ReadCursors>,
) -> Vec<Conversation> {
    let needle = options.search.as_deref().map(str::to_lowercase);

    let mut conversations: Vec<Conversation> = applications
        .iter()
        .filter_map(|application| summarize(application, cursors))
        .filter(|conversation| match options.status {
            Some(status) => conversation.status == status,
            None => true,
        })
        .filter(|conversation| match &needle {
            Some(needle) => matches_search(conversation, needle),
            None => true,
        })
        .collect();

    match options.order {
        ConversationOrder::Recent => conversations
            .sort_by(|a, b| b.last_message.created_at.cmp(&a.last_message.created_at)),
        ConversationOrder::Oldest => conversations
            .sort_by(|a, b| a.last_message.created_at.cmp(&b.last_message.created_at)),
    }

    conversations
}

/// Summarize one application, or `None` when its thread is empty.
fn summarize(application: &Application, cursors: Option<&ReadCursors>) -> Option<Conversation> {
    let last_message = application.messages.last()?.clone();
    let unread_count = cursors
        .map(|cursors| cursors.unread_in(&application.id, &application.messages))
        .unwrap_or(0);

    Some(Conversation {
        application_id: application.id.clone(),
        title: application.title.clone(),
        status: application.status,
        applicant: application.user.clone(),
        last_message,
        message_count: application.messages.len(),
        unread_count,
    })
}

fn matches_search(conversation: &Conversation, needle: &str) -> bool {
    conversation.title.to_lowercase().contains(needle)
        || conversation.last_message.content.to_lowercase().contains(needle)
}

/// Append `message` to `application`'s thread, returning the new value.
///
/// The input is untouched; the thread stays append-only. `updated_at`
/// advances to the message's timestamp, matching what the server records
/// when it persists the message.
pub fn append_message(application: &Application, message: Message) -> Application {
    let mut updated = application.clone();
    updated.updated_at = message.created_at;
    updated.messages.push(message);
    updated
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::types::Timestamp;

    fn ts(secs: i64) -> Timestamp {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn message(id: &str, sender: &str, content: &str, secs: i64) -> Message {
        Message {
            id: id.into(),
            sender: UserRef::Id(sender.into()),
            content: content.into(),
            is_admin_message: false,
            created_at: ts(secs),
        }
    }

    fn application(
        id: &str,
        title: &str,
        status: ApplicationStatus,
        messages: Vec<Message>,
    ) -> Application {
        let updated_at = messages.last().map(|m| m.created_at).unwrap_or_else(|| ts(0));
        Application {
            id: id.into(),
            title: title.into(),
            description: "details".into(),
            status,
            user: UserRef::Id("u1".into()),
            campaign: None,
            messages,
            documents: Vec::new(),
            created_at: ts(0),
            updated_at,
        }
    }

    fn sample() -> Vec<Application> {
        vec![
            application(
                "a1",
                "Medical support",
                ApplicationStatus::Pending,
                vec![
                    message("m1", "u1", "Sent the invoice", 100),
                    message("m2", "admin1", "Received, reviewing now", 200),
                ],
            ),
            application("a2", "School fees", ApplicationStatus::Pending, Vec::new()),
            application(
                "a3",
                "Rent assistance",
                ApplicationStatus::Approved,
                vec![message("m3", "u1", "Thank you so much", 300)],
            ),
            application(
                "a4",
                "Food support",
                ApplicationStatus::Rejected,
                vec![message("m4", "admin1", "Missing documents", 50)],
            ),
        ]
    }

    #[test]
    fn empty_threads_are_dropped() {
        let conversations = assemble(&sample(), &AssembleOptions::default(), None);
        assert_eq!(conversations.len(), 3);
        assert!(conversations.iter().all(|c| c.application_id != "a2"));
    }

    #[test]
    fn last_message_is_the_thread_tail() {
        let conversations = assemble(&sample(), &AssembleOptions::default(), None);
        let medical = conversations
            .iter()
            .find(|c| c.application_id == "a1")
            .unwrap();

        assert_eq!(medical.last_message.id, "m2");
        assert_eq!(medical.message_count, 2);
    }

    #[test]
    fn recent_order_is_newest_first() {
        let conversations = assemble(&sample(), &AssembleOptions::default(), None);
        let ids: Vec<&str> = conversations.iter().map(|c| c.application_id.as_str()).collect();
        assert_eq!(ids, ["a3", "a1", "a4"]);

        for pair in conversations.windows(2) {
            assert!(pair[0].last_message.created_at >= pair[1].last_message.created_at);
        }
    }

    #[test]
    fn oldest_order_is_reversed() {
        let options = AssembleOptions {
            order: ConversationOrder::Oldest,
            ..AssembleOptions::default()
        };
        let conversations = assemble(&sample(), &options, None);
        let ids: Vec<&str> = conversations.iter().map(|c| c.application_id.as_str()).collect();
        assert_eq!(ids, ["a4", "a1", "a3"]);
    }

    #[test]
    fn search_matches_title_and_last_message_case_insensitively() {
        let options = AssembleOptions {
            search: Some("MEDICAL".into()),
            ..AssembleOptions::default()
        };
        let conversations = assemble(&sample(), &options, None);
        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].application_id, "a1");

        // Matches in the last message content, not the title.
        let options = AssembleOptions {
            search: Some("missing".into()),
            ..AssembleOptions::default()
        };
        let conversations = assemble(&sample(), &options, None);
        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].application_id, "a4");
    }

    #[test]
    fn search_does_not_match_earlier_messages() {
        // "invoice" appears only in m1, which is not the tail of a1.
        let options = AssembleOptions {
            search: Some("invoice".into()),
            ..AssembleOptions::default()
        };
        let conversations = assemble(&sample(), &options, None);
        assert!(conversations.is_empty());
    }

    #[test]
    fn status_filter_keeps_only_matching_applications() {
        let options = AssembleOptions {
            status: Some(ApplicationStatus::Approved),
            ..AssembleOptions::default()
        };
        let conversations = assemble(&sample(), &options, None);
        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].application_id, "a3");
    }

    #[test]
    fn unread_is_zero_without_cursors() {
        let conversations = assemble(&sample(), &AssembleOptions::default(), None);
        assert!(conversations.iter().all(|c| c.unread_count == 0));
    }

    #[test]
    fn unread_counts_messages_after_cursor_from_others() {
        let mut cursors = ReadCursors::new("u1");
        cursors.mark_read("a1", ts(150));

        let conversations = assemble(&sample(), &AssembleOptions::default(), Some(&cursors));
        let medical = conversations
            .iter()
            .find(|c| c.application_id == "a1")
            .unwrap();

        // m2 (admin, t=200) is after the cursor; m1 is the viewer's own.
        assert_eq!(medical.unread_count, 1);

        let food = conversations
            .iter()
            .find(|c| c.application_id == "a4")
            .unwrap();
        // No cursor for a4: the admin message counts as unread.
        assert_eq!(food.unread_count, 1);
    }

    #[test]
    fn own_messages_are_never_unread() {
        let cursors = ReadCursors::new("u1");
        let conversations = assemble(&sample(), &AssembleOptions::default(), Some(&cursors));
        let rent = conversations
            .iter()
            .find(|c| c.application_id == "a3")
            .unwrap();

        assert_eq!(rent.unread_count, 0);
    }

    #[test]
    fn cursors_only_advance() {
        let mut cursors = ReadCursors::new("u1");
        cursors.mark_read("a1", ts(500));
        cursors.mark_read("a1", ts(100));

        assert_eq!(cursors.viewer(), "u1");
        assert_eq!(cursors.unread_in("a1", &sample()[0].messages), 0);
    }

    #[test]
    fn append_produces_new_tail_and_leaves_input_alone() {
        let applications = sample();
        let incoming = message("m9", "admin1", "Approved, funds on the way", 400);

        let updated = append_message(&applications[0], incoming.clone());

        assert_eq!(applications[0].messages.len(), 2);
        assert_eq!(updated.messages.len(), 3);
        assert_eq!(updated.messages.last().unwrap().id, "m9");
        assert_eq!(updated.updated_at, incoming.created_at);
    }

    #[test]
    fn append_then_reassemble_shows_message_once_and_resorts() {
        let mut applications = sample();
        let incoming = message("m9", "admin1", "Approved, funds on the way", 400);
        applications[0] = append_message(&applications[0], incoming);

        let conversations = assemble(&applications, &AssembleOptions::default(), None);

        assert_eq!(conversations.len(), 3);
        // a1 now owns the newest tail and moves to the front.
        assert_eq!(conversations[0].application_id, "a1");
        assert_eq!(conversations[0].last_message.id, "m9");
        assert_eq!(conversations[0].message_count, 3);

        let occurrences = conversations
            .iter()
            .filter(|c| c.last_message.id == "m9")
            .count();
        assert_eq!(occurrences, 1);
    }
}
