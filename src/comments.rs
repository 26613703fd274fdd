//! Session-local discussion thread: top-level comments with one level of
//! replies. Demo state only; nothing is persisted.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::ValidationError;

#[derive(Debug, Clone)]
pub struct Reply {
    pub id: Uuid,
    pub author: String,
    pub body: String,
    pub posted_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: Uuid,
    pub author: String,
    pub body: String,
    pub posted_at: DateTime<Utc>,
    pub replies: Vec<Reply>,
}

/// In-memory thread, comments in insertion order with replies under their
/// parent.
#[derive(Debug, Default)]
pub struct CommentThread {
    comments: Vec<Comment>,
}

impl CommentThread {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_comment(&mut self, author: &str, body: &str) -> Result<Uuid, ValidationError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(ValidationError::Required { field: "comment" });
        }
        let comment = Comment {
            id: Uuid::new_v4(),
            author: author.to_string(),
            body: body.to_string(),
            posted_at: Utc::now(),
            replies: Vec::new(),
        };
        let id = comment.id;
        self.comments.push(comment);
        Ok(id)
    }

    /// Reply to an existing comment. Returns None when the parent is gone.
    pub fn add_reply(
        &mut self,
        parent: Uuid,
        author: &str,
        body: &str,
    ) -> Result<Option<Uuid>, ValidationError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(ValidationError::Required { field: "reply" });
        }
        let Some(comment) = self.comments.iter_mut().find(|c| c.id == parent) else {
            return Ok(None);
        };
        let reply = Reply {
            id: Uuid::new_v4(),
            author: author.to_string(),
            body: body.to_string(),
            posted_at: Utc::now(),
        };
        let id = reply.id;
        comment.replies.push(reply);
        Ok(Some(id))
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Comments plus replies.
    pub fn total_count(&self) -> usize {
        self.comments.len() + self.comments.iter().map(|c| c.replies.len()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_comment_rejects_blank_body() {
        let mut thread = CommentThread::new();
        assert_eq!(
            thread.add_comment("Ada", "  "),
            Err(ValidationError::Required { field: "comment" })
        );
    }

    #[test]
    fn test_comments_keep_insertion_order() {
        let mut thread = CommentThread::new();
        thread.add_comment("Ada", "first").unwrap();
        thread.add_comment("Grace", "second").unwrap();
        let bodies: Vec<&str> = thread.comments().iter().map(|c| c.body.as_str()).collect();
        assert_eq!(bodies, vec!["first", "second"]);
    }

    #[test]
    fn test_reply_lands_under_parent() {
        let mut thread = CommentThread::new();
        let first = thread.add_comment("Ada", "ship it?").unwrap();
        thread.add_comment("Grace", "unrelated").unwrap();
        let reply = thread.add_reply(first, "Grace", "yes").unwrap();
        assert!(reply.is_some());
        assert_eq!(thread.comments()[0].replies.len(), 1);
        assert_eq!(thread.comments()[0].replies[0].body, "yes");
        assert!(thread.comments()[1].replies.is_empty());
    }

    #[test]
    fn test_reply_to_unknown_parent_is_none() {
        let mut thread = CommentThread::new();
        let result = thread.add_reply(Uuid::new_v4(), "Ada", "hello").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_reply_rejects_blank_body() {
        let mut thread = CommentThread::new();
        let id = thread.add_comment("Ada", "topic").unwrap();
        assert_eq!(
            thread.add_reply(id, "Grace", ""),
            Err(ValidationError::Required { field: "reply" })
        );
    }

    #[test]
    fn test_total_count_spans_replies() {
        let mut thread = CommentThread::new();
        assert_eq!(thread.total_count(), 0);
        let id = thread.add_comment("Ada", "topic").unwrap();
        thread.add_reply(id, "Grace", "one").unwrap();
        thread.add_reply(id, "Ada", "two").unwrap();
        assert_eq!(thread.total_count(), 3);
    }
}
