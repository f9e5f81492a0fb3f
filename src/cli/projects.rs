use clap::{Args, Subcommand};

use crate::db::Database;
use crate::error::Result;
use crate::forms::ProjectForm;

use super::opt;

#[derive(Subcommand)]
pub enum ProjectCommand {
    /// Add a new project
    Add(ProjectArgs),
    /// Update an existing project
    Update(ProjectArgs),
    /// Delete a project and its tasks
    Delete { project_no: String },
    /// Show one project in full
    Show { project_no: String },
    /// List projects, optionally for one client
    List {
        #[arg(long)]
        client: Option<String>,
    },
}

#[derive(Args)]
pub struct ProjectArgs {
    /// Unique project number
    pub project_no: String,
    #[arg(long)]
    pub client: String,
    #[arg(long)]
    pub name: String,
    /// Assigned manager name (free text, not a manager id)
    #[arg(long, default_value = "")]
    pub manager: String,
    /// Estimatic or Scheduling
    #[arg(long = "type", default_value = "")]
    pub project_type: String,
    /// Completed, In Progress, or Not Started
    #[arg(long = "status", default_value = "")]
    pub project_status: String,
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl ProjectArgs {
    fn into_form(self) -> ProjectForm {
        ProjectForm {
            project_no: self.project_no,
            client_id: self.client,
            project_name: self.name,
            manager: self.manager,
            project_type: self.project_type,
            project_status: self.project_status,
            notes: self.notes,
        }
    }
}

pub async fn run(db: &Database, cmd: ProjectCommand) -> Result<()> {
    match cmd {
        ProjectCommand::Add(args) => {
            let project = args.into_form().validate()?;
            db.create_project(&project).await?;
            println!("project '{}' added", project.project_no);
        }
        ProjectCommand::Update(args) => {
            let project = args.into_form().validate()?;
            db.update_project(&project).await?;
            println!("project '{}' updated", project.project_no);
        }
        ProjectCommand::Delete { project_no } => {
            if db.delete_project(&project_no).await? {
                println!("project '{project_no}' deleted");
            } else {
                println!("no project with no '{project_no}'");
            }
        }
        ProjectCommand::Show { project_no } => match db.get_project(&project_no).await? {
            Some(project) => {
                println!("project no: {}", project.project_no);
                println!("client:     {}", project.client_id);
                println!("name:       {}", project.project_name);
                println!("manager:    {}", opt(&project.client_project_manager));
                println!("type:       {}", opt(&project.project_type));
                println!("status:     {}", opt(&project.project_status));
                println!("notes:      {}", opt(&project.notes));
            }
            None => println!("no project with no '{project_no}'"),
        },
        ProjectCommand::List { client } => {
            let projects = db.list_projects(client.as_deref()).await?;
            if projects.is_empty() {
                println!("no projects yet");
                return Ok(());
            }
            println!(
                "{:<12} {:<12} {:<28} {:<20} {:<12} {:<12}",
                "PROJECT NO", "CLIENT ID", "NAME", "MANAGER", "TYPE", "STATUS"
            );
            for p in &projects {
                println!(
                    "{:<12} {:<12} {:<28} {:<20} {:<12} {:<12}",
                    p.project_no,
                    p.client_id,
                    p.project_name,
                    opt(&p.client_project_manager),
                    opt(&p.project_type),
                    opt(&p.project_status)
                );
            }
        }
    }

    Ok(())
}
