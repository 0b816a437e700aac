use folio_client::ApiClient;
use folio_core::User;

use crate::cli_args::Command;
use crate::modules::appointments::handle_appointment;
use crate::modules::blog::handle_post;
use crate::modules::experiences::handle_experience;
use crate::modules::newsletter::handle_newsletter;
use crate::modules::projects::handle_project;
use crate::modules::testimonials::handle_testimonial;

pub(crate) async fn handle_command(command: Command, api: &ApiClient) -> anyhow::Result<()> {
    match command {
        Command::Whoami => {
            let user: User = api.get("/users/me").await?;
            println!("{} ({:?})", user.email, user.role);
        }
        Command::Project(args) => handle_project(args, api).await?,
        Command::Experience(args) => handle_experience(args, api).await?,
        Command::Post(args) => handle_post(args, api).await?,
        Command::Testimonial(args) => handle_testimonial(args, api).await?,
        Command::Appointment(args) => handle_appointment(args, api).await?,
        Command::Newsletter(args) => handle_newsletter(args, api).await?,
        Command::Login(_) | Command::Logout => {
            unreachable!()
        }
    }

    Ok(())
}
