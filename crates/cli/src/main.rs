//! Operations console for the givehub platform.
//!
//! A thin wrapper over `givehub-client` and `givehub-workflow` for
//! poking a deployment from a terminal: list campaigns, read the
//! dashboard, triage the notification feed, and decide applications.
//!
//! Configuration comes from the environment (a `.env` file is loaded
//! when present): `GIVEHUB_API_URL` for the deployment, plus
//! `GIVEHUB_EMAIL` / `GIVEHUB_PASSWORD` for commands that need a
//! session.

use anyhow::{bail, Context};
use givehub_client::{ApiClient, ApiError, ClientConfig};
use givehub_core::model::Credentials;
use givehub_core::status::ApplicationStatus;
use givehub_workflow::{Inbox, InboxScope, NotificationFeed, ReviewController};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "givehub=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ClientConfig::from_env();
    tracing::debug!(base_url = %config.base_url, "Loaded client configuration");
    let client = ApiClient::new(&config)?;

    // --- Dispatch ---
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first().map(String::as_str) else {
        usage();
        std::process::exit(2);
    };

    match command {
        "campaigns" => campaigns(&client).await,
        "stats" => stats(&signed_in(&client).await?).await,
        "notifications" => notifications(signed_in(&client).await?).await,
        "inbox" => inbox(signed_in(&client).await?).await,
        "review" => {
            let id = args
                .get(1)
                .context("Usage: givehub-cli review <application-id> approve|reject [note]")?;
            let decision = match args.get(2).map(String::as_str) {
                Some("approve") => ApplicationStatus::Approved,
                Some("reject") => ApplicationStatus::Rejected,
                _ => bail!("Usage: givehub-cli review <application-id> approve|reject [note]"),
            };
            let note = (args.len() > 3).then(|| args[3..].join(" "));
            review(signed_in(&client).await?, id, decision, note).await
        }
        other => {
            usage();
            bail!("Unknown command: {other}");
        }
    }
}

fn usage() {
    eprintln!("givehub-cli <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  campaigns        List active campaigns");
    eprintln!("  stats            Platform counters (admin session)");
    eprintln!("  notifications    The signed-in account's notification feed");
    eprintln!("  inbox            Conversations on the account's applications");
    eprintln!("  review <application-id> approve|reject [note]");
    eprintln!();
    eprintln!("Environment: GIVEHUB_API_URL, GIVEHUB_EMAIL, GIVEHUB_PASSWORD");
}

/// Sign in with the credentials from the environment and return an
/// authenticated copy of `client`.
async fn signed_in(client: &ApiClient) -> anyhow::Result<ApiClient> {
    let email =
        std::env::var("GIVEHUB_EMAIL").context("GIVEHUB_EMAIL must be set for this command")?;
    let password = std::env::var("GIVEHUB_PASSWORD")
        .context("GIVEHUB_PASSWORD must be set for this command")?;

    let session = client.login(&Credentials { email, password }).await?;
    Ok(client.with_session(session))
}

/// Hint at the fix when the server refused us for lack of privileges.
fn with_auth_hint(error: ApiError) -> anyhow::Error {
    if error.is_auth_error() {
        anyhow::Error::from(error).context("The signed-in account is not allowed to do this")
    } else {
        error.into()
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

async fn campaigns(client: &ApiClient) -> anyhow::Result<()> {
    let campaigns = client.active_campaigns().await?;
    if campaigns.is_empty() {
        println!("No active campaigns.");
        return Ok(());
    }

    for campaign in campaigns {
        println!(
            "{}  [{}]  {} (needs {:.2})",
            campaign.id, campaign.status, campaign.title, campaign.amount_needed
        );
    }
    Ok(())
}

async fn stats(client: &ApiClient) -> anyhow::Result<()> {
    let stats = client.dashboard_stats().await.map_err(with_auth_hint)?;

    println!("Users:        {}", stats.total_users);
    println!(
        "Campaigns:    {} ({} active, {} completed)",
        stats.total_campaigns, stats.active_campaigns, stats.completed_campaigns
    );
    println!(
        "Applications: {} ({} pending, {} approved, {} rejected)",
        stats.total_applications,
        stats.pending_applications,
        stats.approved_applications,
        stats.rejected_applications
    );
    println!("Amount asked: {:.2}", stats.total_amount_needed);
    Ok(())
}

async fn notifications(client: ApiClient) -> anyhow::Result<()> {
    let mut feed = NotificationFeed::new(client);
    feed.refresh().await?;

    println!("{} unread", feed.unread_count());
    for notification in feed.notifications() {
        let marker = if notification.is_read { ' ' } else { '*' };
        let link = NotificationFeed::link_for(notification).unwrap_or_default();
        println!(
            "{marker} {}  {}  {link}",
            notification.title, notification.message
        );
    }
    Ok(())
}

async fn inbox(client: ApiClient) -> anyhow::Result<()> {
    let mut inbox = Inbox::new(client, InboxScope::MyApplications);
    inbox.refresh().await?;

    let conversations = inbox.conversations();
    if conversations.is_empty() {
        println!("No conversations.");
        return Ok(());
    }

    for conversation in conversations {
        println!(
            "{}  [{}]  {} ({} messages)",
            conversation.application_id,
            conversation.status,
            conversation.title,
            conversation.message_count
        );
        println!("    last: {}", conversation.last_message.content);
    }
    Ok(())
}

async fn review(
    client: ApiClient,
    id: &str,
    decision: ApplicationStatus,
    note: Option<String>,
) -> anyhow::Result<()> {
    let application = client
        .application(id)
        .await
        .with_context(|| format!("Failed to load application {id}"))?;

    let controller = ReviewController::new(client);
    let updated = controller.set_status(&application, decision, note).await?;

    println!("{} is now {}", updated.id, updated.status);
    Ok(())
}
