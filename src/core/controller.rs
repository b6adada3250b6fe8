//! Page controller
//!
//! Owns the [`PageState`] and runs the two user actions against the backend.
//! Each action is split into a synchronous `begin_*` step, the network call,
//! and a synchronous `complete_*` step, so an event loop can keep both
//! actions in flight at once.

use serde_json::Value;
use tracing::{debug, error};

use super::state::{
    ActionStatus, PageState, EMPTY_QUERY_MESSAGE, EMPTY_URL_MESSAGE, INDEXING_FAILED_MESSAGE,
    SEARCH_FAILED_MESSAGE,
};
use crate::backend::{BackendClient, ClientError, IndexReceipt, SearchResponse};
use crate::ui::result_card::ResultCard;

/// Outcome of triggering an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Request should be sent with this (trimmed) input
    Started(String),
    /// Input was empty; the validation message is set
    Invalid,
    /// The same action is still pending; nothing changed
    Busy,
}

#[derive(Debug, Default)]
pub struct PageController {
    state: PageState,
}

impl PageController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn set_url_input(&mut self, url: impl Into<String>) {
        self.state.url_input = url.into();
    }

    pub fn set_query_input(&mut self, query: impl Into<String>) {
        self.state.query_input = query.into();
    }

    /// Flip the raw markup of the card at `index`. Returns false if there is
    /// no such card.
    pub fn toggle_html(&mut self, index: usize) -> bool {
        match self.state.cards.get_mut(index) {
            Some(card) => {
                card.toggle_html();
                true
            }
            None => false,
        }
    }

    /// Start the index action.
    pub fn begin_index(&mut self) -> Trigger {
        if self.state.is_indexing() {
            return Trigger::Busy;
        }

        self.state.clear_for_new_action();

        let url = self.state.url_input.trim();
        if url.is_empty() {
            self.state.indexing = ActionStatus::Failed(EMPTY_URL_MESSAGE.to_string());
            return Trigger::Invalid;
        }

        let url = url.to_string();
        self.state.indexing = ActionStatus::Pending;
        debug!("Indexing {}", url);
        Trigger::Started(url)
    }

    /// Apply the backend's answer to an index request.
    pub fn complete_index(&mut self, outcome: Result<Value, ClientError>) {
        match outcome {
            Ok(body) => {
                self.state.receipt = Some(IndexReceipt::from_value(&body));
                self.state.indexing = ActionStatus::Succeeded;
            }
            Err(e) => {
                error!("Indexing error: {:#}", anyhow::Error::from(e));
                self.state.fail_indexing(INDEXING_FAILED_MESSAGE);
            }
        }
    }

    /// Start the search action.
    pub fn begin_search(&mut self) -> Trigger {
        if self.state.is_searching() {
            return Trigger::Busy;
        }

        self.state.clear_for_new_action();

        let query = self.state.query_input.trim();
        if query.is_empty() {
            self.state.searching = ActionStatus::Failed(EMPTY_QUERY_MESSAGE.to_string());
            return Trigger::Invalid;
        }

        let query = query.to_string();
        self.state.searching = ActionStatus::Pending;
        debug!("Searching for {:?}", query);
        Trigger::Started(query)
    }

    /// Apply the backend's answer to a search request.
    pub fn complete_search(&mut self, outcome: Result<Value, ClientError>) {
        let response = match outcome {
            Ok(body) => SearchResponse::from_value(body),
            Err(e) => {
                error!("Search error: {:#}", anyhow::Error::from(e));
                self.state.fail_search(SEARCH_FAILED_MESSAGE);
                return;
            }
        };

        match response {
            Ok(response) => {
                debug!("Search returned {} results", response.results.len());
                self.state.cards = response.results.into_iter().map(ResultCard::new).collect();
                self.state.searching = ActionStatus::Succeeded;
            }
            Err(e) => {
                error!("Search error: unexpected response shape: {}", e);
                self.state.fail_search(SEARCH_FAILED_MESSAGE);
            }
        }
    }

    /// Run the index action to completion.
    pub async fn index(&mut self, client: &BackendClient) {
        if let Trigger::Started(url) = self.begin_index() {
            let outcome = client.submit_for_indexing(&url).await;
            self.complete_index(outcome);
        }
    }

    /// Run the search action to completion.
    pub async fn search(&mut self, client: &BackendClient) {
        if let Trigger::Started(query) = self.begin_search() {
            let outcome = client.submit_query(&query).await;
            self.complete_search(outcome);
        }
    }
}
