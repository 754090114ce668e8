use anyhow::Result;

use super::ui;
use crate::core::services::{AssistantService, MarketService};
use crate::views::ToolsDashboard;
use crate::views::tools::ToolsInput;

impl<A, M> ToolsDashboard<'_, A, M>
where
    A: AssistantService + ?Sized,
    M: MarketService + ?Sized,
{
    pub fn display(&self) -> String {
        [
            ("Financial Assistant", self.assistant.display()),
            ("Stock Price Lookup", self.stock.display()),
            ("Financial News", self.news.display()),
            ("Currency Exchange", self.exchange.display()),
        ]
        .iter()
        .map(|(title, body)| format!("{}\n\n{body}", ui::style_text(title, ui::StyleType::Title)))
        .collect::<Vec<_>>()
        .join("\n\n")
    }
}

pub async fn tools<A, M>(assistant: &A, market: &M, input: ToolsInput) -> Result<()>
where
    A: AssistantService + ?Sized,
    M: MarketService + ?Sized,
{
    let mut dashboard = ToolsDashboard::new(assistant, market);
    ui::while_loading(ui::TOOLS_LABELS, dashboard.submit(input)).await;
    println!("{}", dashboard.display());
    Ok(())
}
