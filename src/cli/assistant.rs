use anyhow::Result;

use super::{ensure_settled, ui};
use crate::core::services::AssistantService;
use crate::views::assistant::{ASK_LABELS, ChatTurn, FinancialAssistant};

impl ChatTurn {
    pub fn display(&self) -> String {
        let mut output = format!(
            "{} {}\n{}",
            ui::style_text("You:", ui::StyleType::TotalLabel),
            self.query,
            self.response
        );
        if !self.timestamp.is_empty() {
            output.push('\n');
            output.push_str(&ui::style_text(&self.timestamp, ui::StyleType::Subtle));
        }
        output
    }
}

impl<S: AssistantService + ?Sized> FinancialAssistant<'_, S> {
    /// The conversation, oldest turn first so the latest answer ends up last.
    pub fn display(&self) -> String {
        let mut sections: Vec<String> = self
            .history()
            .iter()
            .rev()
            .map(ChatTurn::display)
            .collect();
        if sections.is_empty() {
            sections.push(ui::style_text(
                "Ask about budgeting, saving or markets.",
                ui::StyleType::Subtle,
            ));
        }
        if let Some(banner) = ui::error_banner(self.state()) {
            sections.push(banner);
        }
        sections.join("\n\n")
    }
}

pub async fn ask<S: AssistantService + ?Sized>(service: &S, question: &str) -> Result<()> {
    let mut assistant = FinancialAssistant::new(service);
    assistant.question = question.to_string();
    ui::while_loading(ASK_LABELS, assistant.submit()).await;
    ensure_settled(assistant.state())?;
    println!("{}", assistant.display());
    Ok(())
}
