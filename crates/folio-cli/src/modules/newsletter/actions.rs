use folio_client::ApiClient;

use super::http::{list_subscribers, subscribe, unsubscribe};
use crate::cli_args::{NewsletterArgs, NewsletterCommand};

pub(crate) async fn handle_newsletter(
    args: NewsletterArgs,
    api: &ApiClient,
) -> anyhow::Result<()> {
    match args.command {
        NewsletterCommand::Subscribers => {
            let subscribers = list_subscribers(api).await?;
            for subscriber in subscribers {
                println!(
                    "{}  {}  (since {})",
                    subscriber.id,
                    subscriber.email,
                    subscriber.subscribed_at.format("%Y-%m-%d")
                );
            }
        }
        NewsletterCommand::Subscribe(args) => {
            subscribe(api, &args.email).await?;
            println!("Subscribed {}", args.email);
        }
        NewsletterCommand::Unsubscribe(args) => {
            unsubscribe(api, &args.id).await?;
            println!("Subscriber removed");
        }
    }
    Ok(())
}
