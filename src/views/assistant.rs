use crate::core::services::AssistantService;
use crate::views::history::History;
use crate::views::state::{RequestState, SubmitLabels};

pub const EMPTY_QUESTION: &str = "Please enter a question";
pub const CHAT_HISTORY_CAP: usize = 10;
pub const ASK_LABELS: SubmitLabels = SubmitLabels {
    idle: "Ask",
    busy: "Thinking...",
};

/// One question and the agent's answer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub query: String,
    pub response: String,
    pub timestamp: String,
}

pub struct FinancialAssistant<'a, S: AssistantService + ?Sized> {
    service: &'a S,
    pub question: String,
    state: RequestState<ChatTurn>,
    history: History<ChatTurn>,
}

impl<'a, S: AssistantService + ?Sized> FinancialAssistant<'a, S> {
    pub fn new(service: &'a S) -> Self {
        FinancialAssistant {
            service,
            question: String::new(),
            state: RequestState::Idle,
            history: History::new(CHAT_HISTORY_CAP),
        }
    }

    pub fn state(&self) -> &RequestState<ChatTurn> {
        &self.state
    }

    pub fn history(&self) -> &History<ChatTurn> {
        &self.history
    }


    pub async fn submit(&mut self) {
        if self.state.is_loading() {
            return;
        }
        let query = self.question.trim().to_string();
        if query.is_empty() {
            self.state.fail(EMPTY_QUESTION);
            return;
        }

        self.state.begin();
        match self.service.ask(&query).await {
            Ok(reply) => {
                let turn = ChatTurn {
                    query,
                    response: reply.message,
                    timestamp: reply.timestamp,
                };
                self.history.push(turn.clone());
                self.state.succeed(turn);
                self.question.clear();
            }
            Err(e) => self.state.fail(e.to_string()),
        }
    }
}
