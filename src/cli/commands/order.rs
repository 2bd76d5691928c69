//! Order commands - list, quote, create, set-status and delete.

use crate::{
    cli::{CommandOutput, Desk, DraftArgs, OrderCommand, render},
    core::{forms::OrderDraft, line_item},
    errors::Result,
    panels::{OrderPanel, Outcome},
};
use std::sync::Arc;

/// Fills a draft's lines and discount from command-line arguments.
fn fill_draft(draft: &mut OrderDraft, args: &DraftArgs) -> Result<()> {
    for spec in &args.items {
        draft.push_line(line_item::parse_line(spec)?);
    }
    draft.discount_type = args.discount_type;
    draft.set_discount_value(&args.discount_value);
    Ok(())
}

/// Renders a draft's totals without touching the backend.
#[must_use]
pub fn quote(desk: &Desk, args: &DraftArgs) -> CommandOutput {
    let mut draft = OrderDraft::default();
    match fill_draft(&mut draft, args) {
        Ok(()) => CommandOutput::new(render::draft(&draft, &desk.currency), None, Outcome::Done),
        Err(e) => CommandOutput::new(String::new(), Some(&e.to_string()), Outcome::Failed),
    }
}

/// Runs an orders command against a freshly mounted panel.
pub async fn run(desk: &Desk, command: OrderCommand) -> CommandOutput {
    let mut panel = OrderPanel::new(Arc::clone(&desk.backend));
    let mut warning = None;

    let outcome = match command {
        OrderCommand::List => {
            panel.start_loading();
            (desk.notice)(&render::orders(&panel, &desk.currency));
            panel.refresh().await
        }
        OrderCommand::Quote(args) => return quote(desk, &args),
        OrderCommand::Create {
            customer,
            status,
            draft,
        } => {
            let pending = panel.draft_mut();
            pending.customer_id = Some(customer);
            pending.status = status;
            if let Err(e) = fill_draft(pending, &draft) {
                return CommandOutput::new(String::new(), Some(&e.to_string()), Outcome::Failed);
            }
            let preview = render::draft(panel.draft(), &desk.currency);
            match panel.create().await {
                Outcome::Done => {
                    warning = with_customer_names(&mut panel).await;
                    Outcome::Done
                }
                Outcome::Failed => {
                    return CommandOutput::new(preview, panel.error(), Outcome::Failed);
                }
                Outcome::Cancelled => Outcome::Cancelled,
            }
        }
        OrderCommand::SetStatus { id, status } => match panel.set_status(&id, status).await {
            Outcome::Done => {
                warning = with_customer_names(&mut panel).await;
                Outcome::Done
            }
            other => other,
        },
        OrderCommand::Delete { id } => {
            match panel.delete(&id, desk.confirm.as_ref()).await {
                Outcome::Done => {
                    warning = with_customer_names(&mut panel).await;
                    Outcome::Done
                }
                other => other,
            }
        }
    };

    let text = match outcome {
        Outcome::Done => render::orders(&panel, &desk.currency),
        Outcome::Cancelled => "Cancelled.\n".to_string(),
        Outcome::Failed if panel.orders().is_empty() => String::new(),
        Outcome::Failed => render::orders(&panel, &desk.currency),
    };

    CommandOutput::new(text, panel.error(), outcome).with_warning(warning)
}

/// Loads the customer selector so the order list can show names.
///
/// The mutation before it already succeeded, so a failure here only costs
/// the names: orders show as unknown customers and the message comes back
/// as a warning.
async fn with_customer_names(panel: &mut OrderPanel) -> Option<String> {
    match panel.fetch_customers().await {
        Outcome::Failed => panel.take_error(),
        Outcome::Done | Outcome::Cancelled => None,
    }
}
