use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    pub command: ProjectCommand,
}

#[derive(Subcommand)]
pub enum ProjectCommand {
    List(ProjectListArgs),
    Get(ProjectGetArgs),
    Create(ProjectCreateArgs),
    Update(ProjectUpdateArgs),
    Delete(ProjectDeleteArgs),
}

#[derive(Args)]
pub struct ProjectListArgs {
    #[arg(long)]
    pub featured: bool,
    #[arg(long)]
    pub limit: Option<i64>,
    #[arg(long)]
    pub offset: Option<i64>,
}

#[derive(Args)]
pub struct ProjectGetArgs {
    pub id: String,
}

#[derive(Args)]
pub struct ProjectCreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub slug: Option<String>,
    #[arg(long = "tech", value_name = "NAME")]
    pub technologies: Vec<String>,
    #[arg(long)]
    pub repository_url: Option<String>,
    #[arg(long)]
    pub live_url: Option<String>,
    #[arg(long)]
    pub featured: bool,
}

#[derive(Args)]
pub struct ProjectUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long = "tech", value_name = "NAME")]
    pub technologies: Vec<String>,
    #[arg(long)]
    pub repository_url: Option<String>,
    #[arg(long)]
    pub live_url: Option<String>,
    #[arg(long)]
    pub featured: Option<bool>,
}

#[derive(Args)]
pub struct ProjectDeleteArgs {
    pub id: String,
}
