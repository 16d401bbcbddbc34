//! One-shot render: bootstrap the page, run a single refresh cycle,
//! and print the resulting element tree to stdout.

use std::sync::Arc;

use anyhow::Result;
use is_terminal::IsTerminal;

use crewfeed_api::HttpFeedSource;
use crewfeed_types::EmployeeId;
use crewfeed_view::ViewController;

use crate::config::Settings;
use crate::presentation::text::PageView;

pub fn handle(settings: &Settings, employee: Option<u64>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let source = HttpFeedSource::new(&settings.api_base, settings.timeout)?;
    let mut controller = ViewController::new(Arc::new(source));

    runtime.block_on(async {
        controller.init().await;
        controller
            .handle_selection_change(employee.map(EmployeeId::new))
            .await;
    });

    let color = std::io::stdout().is_terminal();
    print!("{}", PageView::new(controller.page()).with_color(color));

    Ok(())
}
