//! Page state
//!
//! Each user action carries its own tagged status instead of loose
//! loading/indexed/error fields, so combinations like "indexed and failed"
//! cannot be represented.

use crate::backend::IndexReceipt;
use crate::ui::result_card::ResultCard;

pub const EMPTY_URL_MESSAGE: &str = "Please enter a website URL to index.";
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search query.";
pub const INDEXING_FAILED_MESSAGE: &str = "Indexing failed. Please check the URL and try again.";
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";

/// Lifecycle of one user action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl ActionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Drop a finished outcome. An in-flight action stays pending.
    pub(super) fn settle(&mut self) {
        if !self.is_pending() {
            *self = Self::Idle;
        }
    }

    pub(super) fn clear_failure(&mut self) {
        if self.failure().is_some() {
            *self = Self::Idle;
        }
    }
}

/// Status of the index action
pub type IndexingStatus = ActionStatus;

/// Status of the search action
pub type SearchStatus = ActionStatus;

/// Everything the page shows. Owned by [`PageController`](super::PageController).
#[derive(Debug, Default)]
pub struct PageState {
    pub url_input: String,
    pub query_input: String,
    pub(super) cards: Vec<ResultCard>,
    pub(super) indexing: IndexingStatus,
    pub(super) searching: SearchStatus,
    pub(super) receipt: Option<IndexReceipt>,
}

impl PageState {
    pub fn indexing(&self) -> &IndexingStatus {
        &self.indexing
    }

    pub fn searching(&self) -> &SearchStatus {
        &self.searching
    }

    pub fn is_indexing(&self) -> bool {
        self.indexing.is_pending()
    }

    pub fn is_searching(&self) -> bool {
        self.searching.is_pending()
    }

    pub fn is_indexed(&self) -> bool {
        self.indexing.is_succeeded()
    }

    /// The single message shown in the error slot.
    pub fn error_message(&self) -> Option<&str> {
        self.indexing.failure().or_else(|| self.searching.failure())
    }

    /// Ranked results in backend order.
    pub fn cards(&self) -> &[ResultCard] {
        &self.cards
    }

    /// Backend's answer to the last successful indexing.
    pub fn receipt(&self) -> Option<&IndexReceipt> {
        self.receipt.as_ref()
    }

    /// Reset done by both actions before they validate their input.
    pub(super) fn clear_for_new_action(&mut self) {
        self.cards.clear();
        self.indexing.settle();
        self.searching.settle();
        self.receipt = None;
    }

    /// Results are left alone: they can only come from a newer search.
    pub(super) fn fail_indexing(&mut self, message: &str) {
        self.receipt = None;
        self.searching.clear_failure();
        self.indexing = ActionStatus::Failed(message.to_string());
    }

    pub(super) fn fail_search(&mut self, message: &str) {
        self.cards.clear();
        self.indexing.clear_failure();
        self.searching = ActionStatus::Failed(message.to_string());
    }
}
