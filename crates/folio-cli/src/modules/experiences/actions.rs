use chrono::{DateTime, Utc};

use folio_client::ApiClient;

use super::http::{create_experience, delete_experience, list_experiences, update_experience};
use super::types::{CreateExperienceRequest, UpdateExperienceRequest};
use crate::cli_args::{ExperienceArgs, ExperienceCommand};
use crate::modules::system::print_payload;

fn parse_date(value: &str) -> anyhow::Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)
        .map_err(|err| anyhow::anyhow!("invalid date '{value}': {err}"))?
        .with_timezone(&Utc))
}

pub(crate) async fn handle_experience(args: ExperienceArgs, api: &ApiClient) -> anyhow::Result<()> {
    match args.command {
        ExperienceCommand::List => {
            let experiences = list_experiences(api).await?;
            for experience in experiences {
                let until = match (experience.current, experience.end_date) {
                    (true, _) => "present".to_string(),
                    (false, Some(end)) => end.format("%Y-%m").to_string(),
                    (false, None) => "?".to_string(),
                };
                println!(
                    "{}  {} @ {}  ({} - {})",
                    experience.id,
                    experience.position,
                    experience.company,
                    experience.start_date.format("%Y-%m"),
                    until
                );
            }
        }
        ExperienceCommand::Create(args) => {
            let payload = CreateExperienceRequest {
                company: args.company,
                position: args.position,
                description: args.description,
                start_date: parse_date(&args.start_date)?,
                end_date: args.end_date.as_deref().map(parse_date).transpose()?,
                current: args.current,
            };
            let experience = create_experience(api, payload).await?;
            print_payload(&experience)?;
        }
        ExperienceCommand::Update(args) => {
            let payload = UpdateExperienceRequest {
                company: args.company,
                position: args.position,
                description: args.description,
                end_date: args.end_date.as_deref().map(parse_date).transpose()?,
                current: args.current,
            };
            let experience = update_experience(api, &args.id, payload).await?;
            print_payload(&experience)?;
        }
        ExperienceCommand::Delete(args) => {
            delete_experience(api, &args.id).await?;
            println!("Experience deleted");
        }
    }
    Ok(())
}
