use folio_client::ApiClient;

use super::http::{create_project, delete_project, get_project, list_projects, update_project};
use super::types::{CreateProjectRequest, UpdateProjectRequest};
use crate::cli_args::{ProjectArgs, ProjectCommand};
use crate::modules::system::print_payload;

pub(crate) async fn handle_project(args: ProjectArgs, api: &ApiClient) -> anyhow::Result<()> {
    match args.command {
        ProjectCommand::List(args) => {
            let projects = list_projects(api, args.featured, args.limit, args.offset).await?;
            for project in projects {
                let marker = if project.featured { "*" } else { " " };
                println!("{marker} {}  {}  {}", project.id, project.slug, project.title);
            }
        }
        ProjectCommand::Get(args) => {
            let project = get_project(api, &args.id).await?;
            print_payload(&project)?;
        }
        ProjectCommand::Create(args) => {
            let payload = CreateProjectRequest {
                title: args.title,
                description: args.description,
                slug: args.slug,
                technologies: args.technologies,
                repository_url: args.repository_url,
                live_url: args.live_url,
                featured: args.featured,
            };
            let project = create_project(api, payload).await?;
            print_payload(&project)?;
        }
        ProjectCommand::Update(args) => {
            let payload = UpdateProjectRequest {
                title: args.title,
                description: args.description,
                technologies: args.technologies,
                repository_url: args.repository_url,
                live_url: args.live_url,
                featured: args.featured,
            };
            let project = update_project(api, &args.id, payload).await?;
            print_payload(&project)?;
        }
        ProjectCommand::Delete(args) => {
            delete_project(api, &args.id).await?;
            println!("Project deleted");
        }
    }
    Ok(())
}
