use clap::{Args, Subcommand};

#[derive(Args)]
pub struct TestimonialArgs {
    #[command(subcommand)]
    pub command: TestimonialCommand,
}

#[derive(Subcommand)]
pub enum TestimonialCommand {
    List(TestimonialListArgs),
    Approve(TestimonialIdArgs),
    Reject(TestimonialIdArgs),
    Delete(TestimonialIdArgs),
}

#[derive(Args)]
pub struct TestimonialListArgs {
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args)]
pub struct TestimonialIdArgs {
    pub id: String,
}
