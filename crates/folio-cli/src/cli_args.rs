use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::appointments::args::*;
pub use crate::modules::auth::args::*;
pub use crate::modules::blog::args::*;
pub use crate::modules::experiences::args::*;
pub use crate::modules::newsletter::args::*;
pub use crate::modules::projects::args::*;
pub use crate::modules::testimonials::args::*;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio portfolio admin CLI")]
pub struct Cli {
    #[arg(long, env = "FOLIO_ADDR")]
    pub addr: Option<String>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Login(LoginArgs),
    Logout,
    Whoami,
    Project(ProjectArgs),
    Experience(ExperienceArgs),
    Post(PostArgs),
    Testimonial(TestimonialArgs),
    Appointment(AppointmentArgs),
    Newsletter(NewsletterArgs),
}
