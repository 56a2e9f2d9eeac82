//! `procompare user ...`: backend user management.

use crate::cli::types::Username;
use crate::cli::UserCmd;
use crate::error::Result;

use super::common::CommandContext;

pub async fn handle_user(cmd: UserCmd) -> Result<()> {
    let ctx = CommandContext::new(None);

    match cmd {
        UserCmd::Create { username } => {
            let username = Username::new(username);
            ctx.client.create_user(&username).await?;
            println!("Created user {username}");
        }
        UserCmd::Delete { username } => {
            let username = Username::new(username);
            ctx.client.delete_user(&username).await?;
            println!("Deleted user {username}");
        }
    }
    Ok(())
}
