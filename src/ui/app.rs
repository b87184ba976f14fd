use crate::clipboard::LinkClipboard;
use crate::config::Config;
use crate::error::QuoteError;
use crate::random::RandomSource;
use crate::share::ShareLink;
use crate::store::{QuoteIntent, QuoteState, QuoteStore};

/// Transient one-line message under the quote (e.g. "Link copied").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

pub struct App {
    should_quit: bool,
    store: QuoteStore,
    random: Box<dyn RandomSource>,
    clipboard: Box<dyn LinkClipboard>,
    intent_url: String,
    /// Spinner animation frame, advanced on ticks while loading.
    spinner_tick: u8,
    notice: Option<Notice>,
}

impl App {
    pub fn new(
        config: &Config,
        random: Box<dyn RandomSource>,
        clipboard: Box<dyn LinkClipboard>,
    ) -> Self {
        Self {
            should_quit: false,
            store: QuoteStore::new(),
            random,
            clipboard,
            intent_url: config.share.intent_url.clone(),
            spinner_tick: 0,
            notice: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn state(&self) -> &QuoteState {
        self.store.state()
    }

    pub fn spinner_tick(&self) -> u8 {
        self.spinner_tick
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn on_tick(&mut self) {
        if self.state().is_loading() {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    /// Apply an intent delivered by the fetch orchestrator.
    pub fn on_store_intent(&mut self, intent: QuoteIntent) {
        if matches!(intent, QuoteIntent::BeginFetch) {
            self.spinner_tick = 0;
            self.notice = None;
        }
        self.store.dispatch(intent);
    }

    /// Show another random quote from the already loaded collection.
    ///
    /// No network access. Returns `false` if nothing is loaded.
    pub fn select_new_quote(&mut self) -> bool {
        self.notice = None;
        self.store.select_random(self.random.as_mut())
    }

    /// Share link for the quote on screen.
    pub fn share_link(&self) -> Option<Result<ShareLink, QuoteError>> {
        self.state()
            .current()
            .map(|quote| ShareLink::build(&self.intent_url, quote))
    }

    /// Copy the current share link to the clipboard and report the outcome.
    pub fn copy_share_link(&mut self) -> bool {
        let link = match self.share_link() {
            Some(Ok(link)) => link,
            Some(Err(err)) => {
                tracing::warn!(error = %err, "cannot build share link");
                self.notice = Some(Notice::Error(err.user_message().to_string()));
                return false;
            }
            None => return false,
        };

        match self.clipboard.copy(&link.url) {
            Ok(()) => {
                tracing::info!(chars = link.text.chars().count(), "share link copied");
                self.notice = Some(Notice::Info("Tweet link copied to clipboard".to_string()));
                true
            }
            Err(message) => {
                tracing::warn!(error = %message, "clipboard copy failed");
                self.notice = Some(Notice::Error(message));
                false
            }
        }
    }

    /// A new fetch may only be requested after a failure.
    pub fn can_retry(&self) -> bool {
        self.state().is_failed()
    }
}
