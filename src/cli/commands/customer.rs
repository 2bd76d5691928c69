//! Customer commands - list, add, set-status and delete.

use crate::{
    cli::{CommandOutput, CustomerArgs, CustomerCommand, Desk, render},
    core::forms::CustomerForm,
    panels::{CustomerPanel, Outcome},
};
use std::sync::Arc;

/// Runs a customers command against a freshly mounted panel.
pub async fn run(desk: &Desk, command: CustomerCommand) -> CommandOutput {
    let mut panel = CustomerPanel::new(Arc::clone(&desk.backend));

    let outcome = match command {
        CustomerCommand::List => {
            panel.start_loading();
            (desk.notice)(&render::customers(&panel));
            panel.fetch().await
        }
        CustomerCommand::Add(args) => {
            *panel.form_mut() = form_from_args(args);
            panel.create().await
        }
        CustomerCommand::SetStatus { id, status } => panel.set_status(&id, status).await,
        CustomerCommand::Delete { id } => panel.delete(&id, desk.confirm.as_ref()).await,
    };

    // The panel was mounted empty, so after a failure there is no list to show
    let text = match outcome {
        Outcome::Done => render::customers(&panel),
        Outcome::Cancelled => "Cancelled.\n".to_string(),
        Outcome::Failed => String::new(),
    };

    CommandOutput::new(text, panel.error(), outcome)
}

fn form_from_args(args: CustomerArgs) -> CustomerForm {
    CustomerForm {
        name: args.name,
        email: args.email,
        phone: args.phone,
        address: args.address,
        status: args.status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::Backend,
        entities::{CustomerStatus, RecordId},
        errors::Result,
        panels::{AssumeYes, Confirm},
        test_utils::{MockBackend, seeded_backend},
    };
    use std::sync::Mutex;

    struct Decline;

    impl Confirm for Decline {
        fn confirm(&self, _prompt: &str) -> bool {
            false
        }
    }

    fn desk(backend: &Arc<MockBackend>, confirm: Box<dyn Confirm>) -> Desk {
        Desk::new(
            Arc::clone(backend) as Arc<dyn Backend>,
            confirm,
            "$".to_string(),
        )
    }

    #[tokio::test]
    async fn test_list() {
        let backend = Arc::new(seeded_backend());
        let notices = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&notices);
        let desk = desk(&backend, Box::new(AssumeYes)).with_notice(Box::new(move |text: &str| {
            if let Ok(mut seen) = sink.lock() {
                seen.push(text.to_string());
            }
        }));

        let output = run(&desk, CustomerCommand::List).await;

        assert_eq!(output.outcome, Outcome::Done);
        assert!(output.text.starts_with("[1] Ada (active)"));
        assert_eq!(output.error, None);
        assert_eq!(
            notices.lock().map(|seen| seen.clone()).unwrap_or_default(),
            vec!["Loading...\n".to_string()]
        );
    }

    #[tokio::test]
    async fn test_failed_list_shows_nothing() {
        let backend = Arc::new(seeded_backend());
        backend.fail("list_customers", 503, None).await;
        let output = run(&desk(&backend, Box::new(AssumeYes)), CustomerCommand::List).await;

        assert_eq!(output.outcome, Outcome::Failed);
        assert_eq!(output.error.as_deref(), Some("Failed to load customers"));
        assert!(output.text.is_empty());
    }

    #[tokio::test]
    async fn test_add_renders_refreshed_list() -> Result<()> {
        let backend = Arc::new(MockBackend::new());
        let args = CustomerArgs {
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
            phone: String::new(),
            address: String::new(),
            status: CustomerStatus::Active,
        };

        let output = run(
            &desk(&backend, Box::new(AssumeYes)),
            CustomerCommand::Add(args),
        )
        .await;
        assert_eq!(output.outcome, Outcome::Done);
        assert!(output.text.contains("Bob"));
        assert_eq!(backend.list_customers().await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_failed_update_reports_error() {
        let backend = Arc::new(seeded_backend());
        backend.fail("update_customer", 500, None).await;

        let output = run(
            &desk(&backend, Box::new(AssumeYes)),
            CustomerCommand::SetStatus {
                id: RecordId::Int(1),
                status: CustomerStatus::Inactive,
            },
        )
        .await;
        assert_eq!(output.outcome, Outcome::Failed);
        assert_eq!(output.error.as_deref(), Some("Update failed"));
        assert!(output.text.is_empty());
    }

    #[tokio::test]
    async fn test_declined_delete() {
        let backend = Arc::new(seeded_backend());
        let output = run(
            &desk(&backend, Box::new(Decline)),
            CustomerCommand::Delete {
                id: RecordId::Int(1),
            },
        )
        .await;

        assert_eq!(output.outcome, Outcome::Cancelled);
        assert_eq!(output.text, "Cancelled.\n");
        assert!(backend.calls().await.is_empty());
    }
}
