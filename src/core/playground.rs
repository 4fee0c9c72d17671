use crate::core::responder::{IntentResponder, Reply};
use crate::core::stages::{StageOutcome, StageSequence};
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaygroundReply {
    /// Blank input, nothing was run.
    Ignored,
    Cleared,
    /// A newer query took over before this one finished.
    Cancelled,
    Answer(String),
}

/// Runs queries through the responder behind the processing stages.
/// Only one query is in flight at a time; a new one abandons the old.
pub struct Playground {
    responder: IntentResponder,
    stages: StageSequence,
    next_id: AtomicU64,
    in_flight: Mutex<Option<(u64, CancellationToken)>>,
}

impl Playground {
    pub fn new(responder: IntentResponder, stage_delay: Duration) -> Self {
        Self {
            responder,
            stages: StageSequence::new(stage_delay),
            next_id: AtomicU64::new(0),
            in_flight: Mutex::new(None),
        }
    }

    pub fn responder(&self) -> &IntentResponder {
        &self.responder
    }

    pub async fn ask<F>(&self, query: &str, on_stage: F) -> PlaygroundReply
    where
        F: FnMut(&str),
    {
        let clean_query = query.trim();
        if clean_query.is_empty() {
            return PlaygroundReply::Ignored;
        }

        let (id, token) = self.begin();
        // 分類本身是同步的，延遲只是視覺效果
        let reply = self.responder.respond(clean_query);

        let outcome = match reply {
            Reply::Reset => self.stages.hold(&token).await,
            Reply::Text(_) => self.stages.run(&token, on_stage).await,
        };
        self.finish(id);

        match (outcome, reply) {
            (StageOutcome::Cancelled, _) => {
                tracing::debug!("Query abandoned: {}", clean_query);
                PlaygroundReply::Cancelled
            }
            (StageOutcome::Completed, Reply::Reset) => PlaygroundReply::Cleared,
            (StageOutcome::Completed, Reply::Text(text)) => PlaygroundReply::Answer(text),
        }
    }

    /// Like [`Playground::ask`], but abandons the query once `interrupt`
    /// resolves (the REPL passes Ctrl-C here).
    pub async fn ask_until<F, I>(&self, query: &str, on_stage: F, interrupt: I) -> PlaygroundReply
    where
        F: FnMut(&str),
        I: Future,
    {
        let ask = self.ask(query, on_stage);
        tokio::pin!(ask);

        tokio::select! {
            // 先輪詢 ask，確保取消權杖已登記
            biased;
            reply = &mut ask => reply,
            _ = interrupt => {
                self.cancel();
                ask.await
            }
        }
    }

    /// Abandons the in-flight query, if any.
    pub fn cancel(&self) {
        let mut slot = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        if let Some((_, token)) = slot.take() {
            token.cancel();
        }
    }

    fn begin(&self) -> (u64, CancellationToken) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let token = CancellationToken::new();

        let mut slot = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        if let Some((_, previous)) = slot.replace((id, token.clone())) {
            previous.cancel();
        }
        (id, token)
    }

    fn finish(&self, id: u64) {
        let mut slot = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        if matches!(slot.as_ref(), Some((current, _)) if *current == id) {
            *slot = None;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    System,
    User,
    Bot,
}

impl EntryKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            EntryKind::System => "[*]",
            EntryKind::User => "λ",
            EntryKind::Bot => ">>",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub kind: EntryKind,
    pub text: String,
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.prefix(), self.text)
    }
}

/// Terminal history for one playground session.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn push(&mut self, kind: EntryKind, text: impl Into<String>) -> &TranscriptEntry {
        self.entries.push(TranscriptEntry {
            kind,
            text: text.into(),
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.push(EntryKind::System, "Terminal cleared.");
        self.push(EntryKind::Bot, "Ready for new queries!");
    }

    /// Records a finished reply. Returns false when nothing was recorded.
    pub fn record(&mut self, reply: &PlaygroundReply) -> bool {
        match reply {
            PlaygroundReply::Answer(text) => {
                self.push(EntryKind::Bot, text.clone());
                true
            }
            PlaygroundReply::Cleared => {
                self.clear();
                true
            }
            PlaygroundReply::Ignored | PlaygroundReply::Cancelled => false,
        }
    }
}
