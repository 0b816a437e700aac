use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ExperienceArgs {
    #[command(subcommand)]
    pub command: ExperienceCommand,
}

#[derive(Subcommand)]
pub enum ExperienceCommand {
    List,
    Create(ExperienceCreateArgs),
    Update(ExperienceUpdateArgs),
    Delete(ExperienceDeleteArgs),
}

#[derive(Args)]
pub struct ExperienceCreateArgs {
    #[arg(long)]
    pub company: String,
    #[arg(long)]
    pub position: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, value_name = "RFC3339")]
    pub start_date: String,
    #[arg(long, value_name = "RFC3339")]
    pub end_date: Option<String>,
    #[arg(long)]
    pub current: bool,
}

#[derive(Args)]
pub struct ExperienceUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, value_name = "RFC3339")]
    pub end_date: Option<String>,
    #[arg(long)]
    pub current: Option<bool>,
}

#[derive(Args)]
pub struct ExperienceDeleteArgs {
    pub id: String,
}
