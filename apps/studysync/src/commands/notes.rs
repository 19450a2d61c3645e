//! Shared notes commands

use std::io::{BufRead, Read, Write};

use anyhow::Result;
use clap::{Args, Subcommand};

use client::api::NotesApi;
use client::models::Note;
use client::views::NotesView;

use super::Context;

#[derive(Subcommand)]
pub enum NotesCommand {
    /// List shared notes
    List(ListArgs),
    /// Create a note
    Create(CreateArgs),
    /// Delete one of your notes by id
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive filter on title, course, or tags
    #[arg(long)]
    pub filter: Option<String>,
    /// Only show notes for one course, e.g. "CHEM 101"
    #[arg(long)]
    pub course: Option<String>,
}

#[derive(Args)]
pub struct CreateArgs {
    /// Note title
    #[arg(long)]
    pub title: String,
    /// Note content; read from stdin when omitted
    #[arg(long)]
    pub content: Option<String>,
    /// Course the note belongs to, e.g. "CHEM 101"
    #[arg(long, default_value = "")]
    pub course: String,
    /// Comma-separated tags
    #[arg(long, default_value = "")]
    pub tags: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Id of the note to delete
    pub id: u64,
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

pub async fn run(ctx: &Context, command: NotesCommand) -> Result<()> {
    match command {
        NotesCommand::List(args) => list(ctx, args).await,
        NotesCommand::Create(args) => create(ctx, args).await,
        NotesCommand::Delete(args) => delete(ctx, args).await,
    }
}

async fn list(ctx: &Context, args: ListArgs) -> Result<()> {
    if let Some(course) = args.course {
        let notes = ctx.api.notes_for_course(&course).await?;
        print_notes(notes.iter());
        return Ok(());
    }

    let mut view = NotesView::new(ctx.api.clone());
    view.load().await?;
    if let Some(filter) = args.filter {
        view.filter = filter;
    }

    let notes = view.filtered();
    if notes.is_empty() {
        if view.filter.is_empty() {
            println!("No notes available. Create the first one!");
        } else {
            println!("No notes match your search");
        }
        return Ok(());
    }
    print_notes(notes.into_iter());
    Ok(())
}

fn print_notes<'a>(notes: impl Iterator<Item = &'a Note>) {
    for note in notes {
        println!("[{}] {}", note.id, note.title);
        if !note.course.is_empty() {
            println!("    course: {}", note.course);
        }
        if !note.tags.is_empty() {
            println!("    tags: {}", note.tags.join(", "));
        }
        let preview: String = note.content.chars().take(200).collect();
        let ellipsis = if note.content.chars().count() > 200 {
            "..."
        } else {
            ""
        };
        println!("    {}{}", preview, ellipsis);
        println!("    {}", note.created_at.format("%b %e, %Y %H:%M"));
    }
}

async fn create(ctx: &Context, args: CreateArgs) -> Result<()> {
    let content = match args.content {
        Some(content) => content,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut view = NotesView::new(ctx.api.clone());
    view.form.title = args.title;
    view.form.content = content;
    view.form.course = args.course;
    view.form.tags = args.tags;

    if view.create().await?.is_some() {
        println!("Note created.");
    }
    Ok(())
}

async fn delete(ctx: &Context, args: DeleteArgs) -> Result<()> {
    let confirmed = args.yes || confirm("Are you sure you want to delete this note?")?;

    let mut view = NotesView::new(ctx.api.clone());
    if view.delete(args.id, confirmed).await? {
        println!("Note deleted.");
    } else {
        println!("Aborted.");
    }
    Ok(())
}

/// Ask a yes/no question on the terminal; only an explicit "y" confirms
fn confirm(question: &str) -> Result<bool> {
    eprint!("{} [y/N] ", question);
    std::io::stderr().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
