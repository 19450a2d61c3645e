//! Major directory command

use anyhow::Result;
use clap::Args;

use client::views::MajorDirectory;

use super::Context;

#[derive(Args)]
pub struct MajorsArgs {
    /// Case-insensitive substring filter on the major name
    #[arg(long)]
    pub search: Option<String>,
}

pub async fn majors(ctx: &Context, args: MajorsArgs) -> Result<()> {
    let session = ctx.require_session()?;

    let mut directory = MajorDirectory::new(ctx.api.clone());
    directory.load(&session).await?;
    if let Some(term) = args.search {
        directory.search = term;
    }

    let entries = directory.filtered();
    if entries.is_empty() {
        println!("No majors found matching \"{}\"", directory.search);
        return Ok(());
    }

    for entry in entries {
        let difficulty = if entry.stats.average_difficulty > 0.0 {
            format!("avg difficulty {:.1}/10", entry.stats.average_difficulty)
        } else {
            "no difficulty data".to_string()
        };
        let marker = if entry.name == session.user.major {
            "  (your major)"
        } else {
            ""
        };
        println!(
            "{:<28} {:>3} classes  {:>4} students  {}{}",
            entry.name, entry.stats.total_classes, entry.stats.total_users, difficulty, marker
        );
    }
    Ok(())
}
