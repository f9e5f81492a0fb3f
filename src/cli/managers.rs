use clap::{Args, Subcommand};

use crate::db::Database;
use crate::error::Result;
use crate::forms::ManagerForm;

use super::opt;

#[derive(Subcommand)]
pub enum ManagerCommand {
    /// Add a manager for a client
    Add(ManagerArgs),
    /// Update a manager by id
    Update {
        pm_id: i32,
        #[command(flatten)]
        args: ManagerArgs,
    },
    /// Delete a manager by id
    Delete { pm_id: i32 },
    /// List managers, optionally for one client
    List {
        #[arg(long)]
        client: Option<String>,
    },
}

#[derive(Args)]
pub struct ManagerArgs {
    #[arg(long)]
    pub client: String,
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl ManagerArgs {
    fn into_form(self) -> ManagerForm {
        ManagerForm {
            client_id: self.client,
            manager_name: self.name,
            notes: self.notes,
        }
    }
}

pub async fn run(db: &Database, cmd: ManagerCommand) -> Result<()> {
    match cmd {
        ManagerCommand::Add(args) => {
            let manager = args.into_form().validate()?;
            let pm_id = db.create_manager(&manager).await?;
            println!("manager #{pm_id} '{}' added", manager.manager_name);
        }
        ManagerCommand::Update { pm_id, args } => {
            let mut manager = args.into_form().validate()?;
            manager.pm_id = pm_id;
            db.update_manager(&manager).await?;
            println!("manager #{pm_id} updated");
        }
        ManagerCommand::Delete { pm_id } => {
            if db.delete_manager(pm_id).await? {
                println!("manager #{pm_id} deleted");
            } else {
                println!("no manager #{pm_id}");
            }
        }
        ManagerCommand::List { client } => {
            let managers = db.list_managers(client.as_deref()).await?;
            if managers.is_empty() {
                println!("no managers yet");
                return Ok(());
            }
            println!("{:<8} {:<12} {:<28} NOTES", "PM ID", "CLIENT ID", "MANAGER");
            for m in &managers {
                println!(
                    "{:<8} {:<12} {:<28} {}",
                    m.pm_id,
                    m.client_id,
                    m.manager_name,
                    opt(&m.notes)
                );
            }
        }
    }

    Ok(())
}
