//! Chat widget session.
//!
//! Forwards user messages to the [`ResponseEngine`] and renders the answer
//! after a randomized "thinking" delay. Only one reply is ever pending: a new
//! submission aborts the previous reply task before scheduling its own.

use super::view::ChatView;
use crate::config::ReplyDelay;
use crate::engine::ResponseEngine;
use crate::knowledge::RandomSource;
use crate::models::{ChatResult, ConversationTranscript, Sender, Turn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, instrument};

/// Delay before the bot's opening message.
pub const WELCOME_DELAY: Duration = Duration::from_millis(500);

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct ChatSession {
    engine: Arc<ResponseEngine>,
    view: Arc<dyn ChatView>,
    random: Arc<dyn RandomSource>,
    reply_delay: ReplyDelay,
    transcript: Arc<Mutex<ConversationTranscript>>,
    pending_reply: Mutex<Option<JoinHandle<()>>>,
    welcome_task: Mutex<Option<JoinHandle<()>>>,
    open: AtomicBool,
}

impl ChatSession {
    pub fn new(
        engine: Arc<ResponseEngine>,
        view: Arc<dyn ChatView>,
        random: Arc<dyn RandomSource>,
        reply_delay: ReplyDelay,
    ) -> Self {
        Self {
            engine,
            view,
            random,
            reply_delay,
            transcript: Arc::new(Mutex::new(ConversationTranscript::new())),
            pending_reply: Mutex::new(None),
            welcome_task: Mutex::new(None),
            open: AtomicBool::new(false),
        }
    }

    /// Schedules the opening message. Must run inside a tokio runtime.
    pub fn start(&self) {
        let welcome = self.engine.welcome();
        let view = Arc::clone(&self.view);
        let transcript = Arc::clone(&self.transcript);

        let handle = tokio::spawn(async move {
            sleep(WELCOME_DELAY).await;
            render_bot_reply(view.as_ref(), &transcript, welcome);
        });
        if let Some(previous) = lock(&self.welcome_task).replace(handle) {
            previous.abort();
        }
    }

    /// Opens or closes the widget; returns the new state.
    pub fn toggle(&self) -> bool {
        let open = !self.open.fetch_xor(true, Ordering::SeqCst);
        self.view.set_open(open);
        debug!(open, "Chat window toggled");
        open
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Submits typed text. Blank input is ignored and returns `None`.
    #[instrument(skip(self, text), fields(len = text.len()))]
    pub fn submit(&self, text: &str) -> Option<Turn> {
        let message = text.trim();
        if message.is_empty() {
            debug!("Ignoring blank chat message");
            return None;
        }

        let turn = lock(&self.transcript).push(Sender::User, message);
        self.view.show_turn(&turn);
        self.view.clear_suggestions();
        self.view.set_typing(true);

        let delay = self.pick_delay();
        let engine = Arc::clone(&self.engine);
        let view = Arc::clone(&self.view);
        let transcript = Arc::clone(&self.transcript);
        let utterance = message.to_string();

        let handle = tokio::spawn(async move {
            sleep(delay).await;
            let result = engine.classify(&utterance);
            render_bot_reply(view.as_ref(), &transcript, result);
        });

        if let Some(previous) = lock(&self.pending_reply).replace(handle) {
            if !previous.is_finished() {
                info!("Superseding pending chat reply");
            }
            previous.abort();
        }

        Some(turn)
    }

    /// A suggestion chip click behaves exactly like typing its text.
    pub fn click_suggestion(&self, suggestion: &str) -> Option<Turn> {
        self.submit(suggestion)
    }

    /// True while a reply is scheduled but not yet rendered.
    pub fn reply_pending(&self) -> bool {
        lock(&self.pending_reply)
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }

    /// Snapshot of the transcript.
    pub fn transcript(&self) -> Vec<Turn> {
        lock(&self.transcript).turns().to_vec()
    }

    fn pick_delay(&self) -> Duration {
        let ReplyDelay { min, max } = self.reply_delay;
        let span_ms = max.saturating_sub(min).as_millis() as usize;
        let extra = if span_ms == 0 {
            0
        } else {
            self.random.index(span_ms.saturating_add(1))
        };
        min + Duration::from_millis(extra as u64)
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        for slot in [&self.pending_reply, &self.welcome_task] {
            if let Some(handle) = lock(slot).take() {
                handle.abort();
            }
        }
    }
}

fn render_bot_reply(view: &dyn ChatView, transcript: &Mutex<ConversationTranscript>, result: ChatResult) {
    view.set_typing(false);
    let turn = lock(transcript).push(Sender::Bot, result.text);
    view.show_turn(&turn);
    if !result.suggestions.is_empty() {
        view.show_suggestions(&result.suggestions);
    }
    debug!(topic = %result.topic, "Bot reply rendered");
}
