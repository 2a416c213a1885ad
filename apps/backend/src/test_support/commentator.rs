use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::commentary::{Commentator, CommentaryError, CommentaryRequest};

/// Commentator that replays queued lines and records every request.
/// An empty queue answers with `RequestFailed`.
#[derive(Default)]
pub struct ScriptedCommentator {
    lines: Mutex<VecDeque<String>>,
    seen: Mutex<Vec<CommentaryRequest>>,
}

impl ScriptedCommentator {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CommentaryRequest> {
        self.seen.lock().clone()
    }
}

#[async_trait]
impl Commentator for ScriptedCommentator {
    async fn comment(&self, request: &CommentaryRequest) -> Result<String, CommentaryError> {
        self.seen.lock().push(request.clone());
        self.lines
            .lock()
            .pop_front()
            .ok_or_else(|| CommentaryError::RequestFailed("script exhausted".to_string()))
    }
}
