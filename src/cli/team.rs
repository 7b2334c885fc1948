//! Team roster subcommands.

use std::path::Path;

use clap::{Args, Subcommand};
use tabled::{Table, Tabled};
use uuid::Uuid;

use toolcrib::store::{FileBackend, TeamMember, TeamStore};

#[derive(Debug, Args)]
pub(crate) struct TeamCommand {
    #[command(subcommand)]
    command: TeamSubcommand,
}

#[derive(Debug, Subcommand)]
enum TeamSubcommand {
    /// List the roster
    List,

    /// Add a team member
    Add(AddArgs),

    /// Remove a team member by id
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Display name
    name: String,

    /// Role label, e.g. "Technician"
    #[arg(long, default_value = "Technician")]
    role: String,

    /// Contact email
    #[arg(long)]
    email: Option<String>,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    /// Record id to delete
    id: Uuid,
}

#[derive(Debug, Tabled)]
struct MemberRow {
    #[tabled(rename = "Id")]
    id: Uuid,

    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Role")]
    role: String,

    #[tabled(rename = "Email")]
    email: String,
}

pub(crate) fn run(command: TeamCommand, data_dir: &Path) -> Result<(), String> {
    let mut store = TeamStore::new(FileBackend::new(data_dir));

    match command.command {
        TeamSubcommand::List => {
            let rows: Vec<MemberRow> = store
                .get_all()
                .map_err(|error| error.to_string())?
                .into_iter()
                .map(|member| MemberRow {
                    id: member.id,
                    name: member.name,
                    role: member.role,
                    email: member.email.unwrap_or_default(),
                })
                .collect();

            println!("{}", Table::new(rows));
            Ok(())
        }
        TeamSubcommand::Add(args) => {
            let mut member = TeamMember::new(args.name, args.role);
            member.email = args.email;
            let name = member.name.clone();

            store.save(member).map_err(|error| error.to_string())?;

            println!("added {name}");
            Ok(())
        }
        TeamSubcommand::Delete(args) => {
            store.delete(args.id).map_err(|error| error.to_string())?;

            println!("removed {}", args.id);
            Ok(())
        }
    }
}
