use folio_client::ApiClient;

use super::http::{delete_testimonial, list_testimonials, set_testimonial_status};
use crate::cli_args::{TestimonialArgs, TestimonialCommand};

pub(crate) async fn handle_testimonial(
    args: TestimonialArgs,
    api: &ApiClient,
) -> anyhow::Result<()> {
    match args.command {
        TestimonialCommand::List(args) => {
            let testimonials = list_testimonials(api, args.status).await?;
            for item in testimonials {
                let title = item.author_title.as_deref().unwrap_or("-");
                println!("{}  [{:?}]  {} ({title})", item.id, item.status, item.author_name);
            }
        }
        TestimonialCommand::Approve(args) => {
            let item = set_testimonial_status(api, &args.id, "approved").await?;
            println!("Testimonial from {} is now {:?}", item.author_name, item.status);
        }
        TestimonialCommand::Reject(args) => {
            let item = set_testimonial_status(api, &args.id, "rejected").await?;
            println!("Testimonial from {} is now {:?}", item.author_name, item.status);
        }
        TestimonialCommand::Delete(args) => {
            delete_testimonial(api, &args.id).await?;
            println!("Testimonial deleted");
        }
    }
    Ok(())
}
