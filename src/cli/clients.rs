use clap::{Args, Subcommand};

use crate::db::Database;
use crate::error::Result;
use crate::forms::ClientForm;

use super::opt;

#[derive(Subcommand)]
pub enum ClientCommand {
    /// Add a new client
    Add(ClientArgs),
    /// Update an existing client
    Update(ClientArgs),
    /// Delete a client and everything owned by it
    Delete { client_id: String },
    /// Show one client in full
    Show { client_id: String },
    /// List all clients
    List,
}

#[derive(Args)]
pub struct ClientArgs {
    /// Unique client id
    pub client_id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub address: String,
    #[arg(long, default_value = "")]
    pub state: String,
    #[arg(long, default_value = "")]
    pub city: String,
    #[arg(long, default_value = "")]
    pub zip: String,
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl ClientArgs {
    fn into_form(self) -> ClientForm {
        ClientForm {
            client_id: self.client_id,
            client_name: self.name,
            client_address: self.address,
            state: self.state,
            city: self.city,
            zip_code: self.zip,
            notes: self.notes,
        }
    }
}

pub async fn run(db: &Database, cmd: ClientCommand) -> Result<()> {
    match cmd {
        ClientCommand::Add(args) => {
            let client = args.into_form().validate()?;
            db.create_client(&client).await?;
            println!("client '{}' added", client.client_name);
        }
        ClientCommand::Update(args) => {
            let client = args.into_form().validate()?;
            db.update_client(&client).await?;
            println!("client '{}' updated", client.client_name);
        }
        ClientCommand::Delete { client_id } => {
            if db.delete_client(&client_id).await? {
                println!("client '{client_id}' deleted");
            } else {
                println!("no client with id '{client_id}'");
            }
        }
        ClientCommand::Show { client_id } => match db.get_client(&client_id).await? {
            Some(client) => {
                println!("id:      {}", client.client_id);
                println!("name:    {}", client.client_name);
                println!("address: {}", opt(&client.client_address));
                println!("state:   {}", opt(&client.state));
                println!("city:    {}", opt(&client.city));
                println!("zip:     {}", opt(&client.zip_code));
                println!("notes:   {}", opt(&client.notes));
            }
            None => println!("no client with id '{client_id}'"),
        },
        ClientCommand::List => {
            let clients = db.list_clients().await?;
            if clients.is_empty() {
                println!("no clients yet");
                return Ok(());
            }
            println!("{:<12} {:<28} {:<16} {:<16}", "CLIENT ID", "NAME", "STATE", "CITY");
            for c in &clients {
                println!(
                    "{:<12} {:<28} {:<16} {:<16}",
                    c.client_id,
                    c.client_name,
                    opt(&c.state),
                    opt(&c.city)
                );
            }
        }
    }

    Ok(())
}
