use clap::{Args, Subcommand};

#[derive(Args)]
pub struct AppointmentArgs {
    #[command(subcommand)]
    pub command: AppointmentCommand,
}

#[derive(Subcommand)]
pub enum AppointmentCommand {
    List(AppointmentListArgs),
    Get(AppointmentIdArgs),
    Confirm(AppointmentIdArgs),
    Cancel(AppointmentIdArgs),
    Delete(AppointmentIdArgs),
}

#[derive(Args)]
pub struct AppointmentListArgs {
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args)]
pub struct AppointmentIdArgs {
    pub id: String,
}
