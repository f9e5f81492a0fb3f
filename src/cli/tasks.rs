use clap::{Args, Subcommand};

use crate::db::Database;
use crate::error::Result;
use crate::forms::TaskForm;

use super::{opt, yes_no};

#[derive(Subcommand)]
pub enum TaskCommand {
    /// Add a new task
    Add(TaskArgs),
    /// Update a task by id
    Update {
        task_id: i32,
        #[command(flatten)]
        args: TaskArgs,
    },
    /// Delete a task by id
    Delete { task_id: i32 },
    /// Show one task in full
    Show { task_id: i32 },
    /// List tasks, optionally for one project
    List {
        #[arg(long)]
        project: Option<String>,
    },
}

#[derive(Args)]
pub struct TaskArgs {
    #[arg(long)]
    pub client: String,
    #[arg(long)]
    pub project: String,
    #[arg(long)]
    pub name: String,
    /// Yes or No
    #[arg(long)]
    pub billable: String,
    /// Hourly rate; only used when billable
    #[arg(long, default_value = "")]
    pub rate: String,
    /// Fixed fee that replaces hourly billing; only used when billable
    #[arg(long, default_value = "")]
    pub lumpsum: String,
    /// Completed, In Progress, or Not Done
    #[arg(long = "status", default_value = "")]
    pub task_status: String,
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl TaskArgs {
    fn into_form(self) -> TaskForm {
        TaskForm {
            client_id: self.client,
            project_no: self.project,
            task_name: self.name,
            billable: self.billable,
            hourly_rate: self.rate,
            lumpsum: self.lumpsum,
            task_status: self.task_status,
            notes: self.notes,
        }
    }
}

fn rate(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

pub async fn run(db: &Database, cmd: TaskCommand) -> Result<()> {
    match cmd {
        TaskCommand::Add(args) => {
            let task = args.into_form().validate()?;
            let task_id = db.create_task(&task).await?;
            println!("task #{task_id} '{}' added", task.task_name);
        }
        TaskCommand::Update { task_id, args } => {
            let mut task = args.into_form().validate()?;
            task.task_id = task_id;
            db.update_task(&task).await?;
            println!("task #{task_id} updated");
        }
        TaskCommand::Delete { task_id } => {
            if db.delete_task(task_id).await? {
                println!("task #{task_id} deleted");
            } else {
                println!("no task #{task_id}");
            }
        }
        TaskCommand::Show { task_id } => match db.get_task(task_id).await? {
            Some(task) => {
                println!("task id:     {}", task.task_id);
                println!("client:      {}", task.client_id);
                println!("project no:  {}", task.project_no);
                println!("name:        {}", task.task_name);
                println!("billable:    {}", yes_no(task.billable));
                println!("hourly rate: {}", rate(task.hourly_rate));
                println!("lumpsum:     {}", rate(task.lumpsum));
                println!("status:      {}", opt(&task.task_status));
                println!("notes:       {}", opt(&task.notes));
            }
            None => println!("no task #{task_id}"),
        },
        TaskCommand::List { project } => {
            let tasks = db.list_tasks(project.as_deref()).await?;
            if tasks.is_empty() {
                println!("no tasks yet");
                return Ok(());
            }
            println!(
                "{:<8} {:<12} {:<12} {:<24} {:<8} {:>10} {:>10} {:<12}",
                "TASK ID", "CLIENT ID", "PROJECT NO", "NAME", "BILL", "RATE", "LUMPSUM", "STATUS"
            );
            for t in &tasks {
                println!(
                    "{:<8} {:<12} {:<12} {:<24} {:<8} {:>10} {:>10} {:<12}",
                    t.task_id,
                    t.client_id,
                    t.project_no,
                    t.task_name,
                    yes_no(t.billable),
                    rate(t.hourly_rate),
                    rate(t.lumpsum),
                    opt(&t.task_status)
                );
            }
        }
    }

    Ok(())
}
