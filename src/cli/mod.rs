//! Command-line layer - argument parsing, command dispatch and rendering.
//!
//! Each invocation mounts the panel it needs, performs one action through it
//! and renders the resulting state.

/// Command implementations (customers, orders, general)
pub mod commands;
/// Text rendering of panel state
pub mod render;

use crate::{
    api::Backend,
    entities::{CustomerStatus, DiscountType, OrderStatus, RecordId},
    panels::{Confirm, Outcome},
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

/// Terminal front-end for the customer/order demo backend
#[derive(Debug, Parser)]
#[command(name = "order-desk", version)]
pub struct Cli {
    /// Backend base URL (overrides BACKEND_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub backend_url: Option<String>,

    /// Settings file (defaults to ./order-desk.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip delete confirmations
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Customers panel
    #[command(subcommand)]
    Customers(CustomerCommand),
    /// Orders panel
    #[command(subcommand)]
    Orders(OrderCommand),
    /// Ask the backend for its diagnostic status
    Check,
}

/// Customers panel actions
#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    /// List customers
    List,
    /// Create a customer
    Add(CustomerArgs),
    /// Change a customer's status
    SetStatus {
        /// Customer id
        id: RecordId,
        /// active or inactive
        status: CustomerStatus,
    },
    /// Delete a customer
    Delete {
        /// Customer id
        id: RecordId,
    },
}

/// Fields of the create-customer form
#[derive(Debug, Args)]
pub struct CustomerArgs {
    /// Customer name
    #[arg(long)]
    pub name: String,
    /// Customer email
    #[arg(long)]
    pub email: String,
    /// Phone number
    #[arg(long, default_value = "")]
    pub phone: String,
    /// Postal address
    #[arg(long, default_value = "")]
    pub address: String,
    /// active or inactive
    #[arg(long, default_value = "active")]
    pub status: CustomerStatus,
}

/// Orders panel actions
#[derive(Debug, Subcommand)]
pub enum OrderCommand {
    /// List orders
    List,
    /// Show the totals of a draft without sending it
    Quote(DraftArgs),
    /// Create an order
    Create {
        /// Customer id
        #[arg(long)]
        customer: RecordId,
        /// Initial status
        #[arg(long, default_value = "draft")]
        status: OrderStatus,
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Change an order's status
    SetStatus {
        /// Order id
        id: RecordId,
        /// draft, pending, paid, shipped or cancelled
        status: OrderStatus,
    },
    /// Delete an order
    Delete {
        /// Order id
        id: RecordId,
    },
}

/// Line items and discount of a draft order
#[derive(Debug, Args)]
pub struct DraftArgs {
    /// Line item, repeatable
    #[arg(long = "item", value_name = "NAME:PRICE[:QTY]")]
    pub items: Vec<String>,
    /// amount or percent (also $ or %)
    #[arg(long, default_value = "amount")]
    pub discount_type: DiscountType,
    /// Discount value; non-numeric input counts as 0
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub discount_value: String,
}

/// Receives transient text shown while a command waits, such as the loading placeholder
pub type Notice = Box<dyn Fn(&str) + Send + Sync>;

/// Shared state every command runs with
pub struct Desk {
    /// Backend the panels talk to
    pub backend: Arc<dyn Backend>,
    /// Asks before deletes
    pub confirm: Box<dyn Confirm>,
    /// Symbol printed in front of amounts
    pub currency: String,
    /// Where in-flight state goes; stderr unless replaced
    pub notice: Notice,
}

impl Desk {
    /// Creates the command context.
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>, confirm: Box<dyn Confirm>, currency: String) -> Self {
        Self {
            backend,
            confirm,
            currency,
            notice: Box::new(|text: &str| eprint!("{text}")),
        }
    }

    /// Replaces the sink for in-flight state.
    #[must_use]
    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = notice;
        self
    }
}

/// What a command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Rendered panel, for stdout
    pub text: String,
    /// Panel error message, for stderr
    pub error: Option<String>,
    /// A follow-up problem that does not change the outcome, for stderr
    pub warning: Option<String>,
    /// How the action ended
    pub outcome: Outcome,
}

impl CommandOutput {
    /// Output of an action, carrying the panel's error if it failed.
    #[must_use]
    pub fn new(text: String, error: Option<&str>, outcome: Outcome) -> Self {
        Self {
            text,
            error: error.map(str::to_string),
            warning: None,
            outcome,
        }
    }

    /// Attaches a warning to an otherwise finished action.
    #[must_use]
    pub fn with_warning(mut self, warning: Option<String>) -> Self {
        self.warning = warning;
        self
    }
}

/// Runs one parsed command.
pub async fn run(desk: &Desk, command: Command) -> CommandOutput {
    match command {
        Command::Customers(command) => commands::customer::run(desk, command).await,
        Command::Orders(command) => commands::order::run(desk, command).await,
        Command::Check => commands::general::check(desk).await,
    }
}
