use clap::{Args, Subcommand};

#[derive(Args)]
pub struct NewsletterArgs {
    #[command(subcommand)]
    pub command: NewsletterCommand,
}

#[derive(Subcommand)]
pub enum NewsletterCommand {
    Subscribers,
    Subscribe(SubscribeArgs),
    Unsubscribe(UnsubscribeArgs),
}

#[derive(Args)]
pub struct SubscribeArgs {
    pub email: String,
}

#[derive(Args)]
pub struct UnsubscribeArgs {
    pub id: String,
}
