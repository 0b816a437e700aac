use folio_client::ApiClient;

use super::http::{create_post, delete_post, get_post, list_posts, publish_post, update_post};
use super::types::{CreatePostRequest, UpdatePostRequest};
use crate::cli_args::{PostArgs, PostCommand};
use crate::modules::system::print_payload;

pub(crate) async fn handle_post(args: PostArgs, api: &ApiClient) -> anyhow::Result<()> {
    match args.command {
        PostCommand::List(args) => {
            let posts = list_posts(api, args.status, args.tag, args.limit, args.offset).await?;
            for post in posts {
                println!("{}  [{:?}]  {}  {}", post.id, post.status, post.slug, post.title);
            }
        }
        PostCommand::Get(args) => {
            let post = get_post(api, &args.id).await?;
            print_payload(&post)?;
        }
        PostCommand::Create(args) => {
            let payload = CreatePostRequest {
                title: args.title,
                content: args.content,
                excerpt: args.excerpt,
                tags: args.tag,
            };
            let post = create_post(api, payload).await?;
            print_payload(&post)?;
        }
        PostCommand::Update(args) => {
            let payload = UpdatePostRequest {
                title: args.title,
                content: args.content,
                excerpt: args.excerpt,
                tags: args.tag,
            };
            let post = update_post(api, &args.id, payload).await?;
            print_payload(&post)?;
        }
        PostCommand::Publish(args) => {
            let post = publish_post(api, &args.id).await?;
            println!("Published {} ({:?})", post.slug, post.status);
        }
        PostCommand::Delete(args) => {
            delete_post(api, &args.id).await?;
            println!("Post deleted");
        }
    }
    Ok(())
}
