use clap::{Args, Subcommand};

use crate::db::Database;
use crate::error::Result;
use crate::forms::StaffForm;
use crate::models::StaffKind;

/// Shared command set for the employ and subconsultant tables; the
/// kind picked at the top level decides which table is addressed.
#[derive(Subcommand)]
pub enum StaffCommand {
    /// Add a new record
    Add(StaffArgs),
    /// Update an existing record
    Update(StaffArgs),
    /// Delete a record by id
    Delete { id: String },
    /// Show one record in full
    Show { id: String },
    /// List all records
    List,
}

#[derive(Args)]
pub struct StaffArgs {
    /// Unique id
    pub id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub contact: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub rate: String,
}

impl StaffArgs {
    fn into_form(self) -> StaffForm {
        StaffForm {
            id: self.id,
            name: self.name,
            contact_number: self.contact,
            email_address: self.email,
            hourly_rate: self.rate,
        }
    }
}

pub async fn run(db: &Database, kind: StaffKind, cmd: StaffCommand) -> Result<()> {
    let label = kind.table();
    match cmd {
        StaffCommand::Add(args) => {
            let staff = args.into_form().validate(label)?;
            db.create_staff(kind, &staff).await?;
            println!("{label} '{}' added", staff.name);
        }
        StaffCommand::Update(args) => {
            let staff = args.into_form().validate(label)?;
            db.update_staff(kind, &staff).await?;
            println!("{label} '{}' updated", staff.name);
        }
        StaffCommand::Delete { id } => {
            if db.delete_staff(kind, &id).await? {
                println!("{label} '{id}' deleted");
            } else {
                println!("no {label} with id '{id}'");
            }
        }
        StaffCommand::Show { id } => match db.get_staff(kind, &id).await? {
            Some(staff) => {
                println!("id:      {}", staff.id);
                println!("name:    {}", staff.name);
                println!("contact: {}", staff.contact_number);
                println!("email:   {}", staff.email_address);
                println!("rate:    {:.2}", staff.hourly_rate);
            }
            None => println!("no {label} with id '{id}'"),
        },
        StaffCommand::List => {
            let staff = db.list_staff(kind).await?;
            if staff.is_empty() {
                println!("no {label} records yet");
                return Ok(());
            }
            println!(
                "{:<12} {:<28} {:<16} {:<28} {:>8}",
                "ID", "NAME", "CONTACT", "EMAIL", "RATE"
            );
            for s in &staff {
                println!(
                    "{:<12} {:<28} {:<16} {:<28} {:>8.2}",
                    s.id, s.name, s.contact_number, s.email_address, s.hourly_rate
                );
            }
        }
    }

    Ok(())
}
