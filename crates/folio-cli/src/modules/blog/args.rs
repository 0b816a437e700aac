use clap::{Args, Subcommand};

#[derive(Args)]
pub struct PostArgs {
    #[command(subcommand)]
    pub command: PostCommand,
}

#[derive(Subcommand)]
pub enum PostCommand {
    List(PostListArgs),
    Get(PostGetArgs),
    Create(PostCreateArgs),
    Update(PostUpdateArgs),
    Publish(PostPublishArgs),
    Delete(PostDeleteArgs),
}

#[derive(Args)]
pub struct PostListArgs {
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub tag: Option<String>,
    #[arg(long)]
    pub limit: Option<i64>,
    #[arg(long)]
    pub offset: Option<i64>,
}

#[derive(Args)]
pub struct PostGetArgs {
    pub id: String,
}

#[derive(Args)]
pub struct PostCreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub content: String,
    #[arg(long)]
    pub excerpt: Option<String>,
    #[arg(long, value_name = "NAME")]
    pub tag: Vec<String>,
}

#[derive(Args)]
pub struct PostUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long)]
    pub excerpt: Option<String>,
    #[arg(long, value_name = "NAME")]
    pub tag: Vec<String>,
}

#[derive(Args)]
pub struct PostPublishArgs {
    pub id: String,
}

#[derive(Args)]
pub struct PostDeleteArgs {
    pub id: String,
}
