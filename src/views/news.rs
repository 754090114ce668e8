use crate::core::models::SearchResults;
use crate::core::services::MarketService;
use crate::views::history::History;
use crate::views::state::{RequestState, SubmitLabels};

pub const EMPTY_QUERY: &str = "Please enter a search query";
pub const SEARCH_HISTORY_CAP: usize = 5;
pub const SEARCH_LABELS: SubmitLabels = SubmitLabels {
    idle: "Search",
    busy: "Searching...",
};

pub struct NewsSearch<'a, S: MarketService + ?Sized> {
    service: &'a S,
    pub query: String,
    state: RequestState<SearchResults>,
    history: History<SearchResults>,
}

impl<'a, S: MarketService + ?Sized> NewsSearch<'a, S> {
    pub fn new(service: &'a S) -> Self {
        NewsSearch {
            service,
            query: String::new(),
            state: RequestState::Idle,
            history: History::new(SEARCH_HISTORY_CAP),
        }
    }

    pub fn state(&self) -> &RequestState<SearchResults> {
        &self.state
    }

    pub fn history(&self) -> &History<SearchResults> {
        &self.history
    }


    pub async fn submit(&mut self) {
        if self.state.is_loading() {
            return;
        }
        let query = self.query.trim().to_string();
        if query.is_empty() {
            self.state.fail(EMPTY_QUERY);
            return;
        }

        self.state.begin();
        match self.service.web_search(&query).await {
            Ok(results) => {
                let entry = SearchResults { query, ..results };
                self.history.push(entry.clone());
                self.state.succeed(entry);
                self.query.clear();
            }
            Err(e) => self.state.fail(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_doubles::FakeBackend;

    #[tokio::test]
    async fn test_empty_query() {
        let backend = FakeBackend::new();
        let mut search = NewsSearch::new(&backend);
        search.query = "  ".to_string();
        search.submit().await;
        assert_eq!(search.state().error(), Some(EMPTY_QUERY));
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_success_clears_query() {
        let backend = FakeBackend::new();
        let mut search = NewsSearch::new(&backend);
        search.query = "market trends".to_string();
        search.submit().await;

        assert!(search.query.is_empty());
        let latest = search.history().iter().next().unwrap();
        assert_eq!(latest.query, "market trends");
        assert_eq!(latest.results.len(), 1);
    }

    #[tokio::test]
    async fn test_history_keeps_last_five() {
        let backend = FakeBackend::new();
        let mut search = NewsSearch::new(&backend);
        for i in 0..8 {
            search.query = format!("query {i}");
            search.submit().await;
        }

        let queries: Vec<_> = search.history().iter().map(|s| s.query.clone()).collect();
        assert_eq!(
            queries,
            vec!["query 7", "query 6", "query 5", "query 4", "query 3"]
        );
    }
}
