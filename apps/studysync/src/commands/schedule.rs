//! Schedule generation commands
//!
//! The shopping cart text is read from a file or stdin and sent to the
//! scheduling endpoints as-is; all parsing happens server-side.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use client::views::ScheduleView;

use super::Context;
use crate::output;

#[derive(Subcommand)]
pub enum ScheduleCommand {
    /// Generate a schedule from the pasted cart
    Generate(GenerateArgs),
    /// Generate rating-optimized candidate schedules
    Optimize(GenerateArgs),
    /// Generate a schedule, then add one more course to it
    AddCourse(AddCourseArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// File holding the pasted shopping cart; `-` or omitted reads stdin
    #[arg(long)]
    pub cart: Option<PathBuf>,
    /// Earliest acceptable start time, HH:MM
    #[arg(long, default_value = "08:00")]
    pub earliest: String,
    /// Latest acceptable end time, HH:MM
    #[arg(long, default_value = "18:00")]
    pub latest: String,
}

#[derive(Args)]
pub struct AddCourseArgs {
    /// Title of the course to add, e.g. "MATH 231"
    pub course: String,
    #[command(flatten)]
    pub generate: GenerateArgs,
}

pub async fn run(ctx: &Context, command: ScheduleCommand) -> Result<()> {
    match command {
        ScheduleCommand::Generate(args) => generate(ctx, args).await,
        ScheduleCommand::Optimize(args) => optimize(ctx, args).await,
        ScheduleCommand::AddCourse(args) => add_course(ctx, args).await,
    }
}

async fn generate(ctx: &Context, args: GenerateArgs) -> Result<()> {
    let mut view = prepare_view(ctx, &args)?;
    view.generate().await?;
    print_schedule(view.schedule());
    Ok(())
}

async fn optimize(ctx: &Context, args: GenerateArgs) -> Result<()> {
    let mut view = prepare_view(ctx, &args)?;
    view.optimize().await?;

    if view.candidates().is_empty() {
        println!("No conflict-free schedules found.");
        return Ok(());
    }

    for (index, candidate) in view.candidates().iter().enumerate() {
        println!("Candidate schedule #{}:", index + 1);
        for meeting in candidate {
            println!("{}", output::format_meeting(meeting));
        }
        println!();
    }
    Ok(())
}

async fn add_course(ctx: &Context, args: AddCourseArgs) -> Result<()> {
    let mut view = prepare_view(ctx, &args.generate)?;

    // Establish the base schedule first, then let the server fit the
    // extra course against the regenerated candidate pool
    view.generate().await?;
    view.add_course(&args.course).await?;

    print_schedule(view.schedule());
    Ok(())
}

fn prepare_view(ctx: &Context, args: &GenerateArgs) -> Result<ScheduleView> {
    let mut view = ScheduleView::new(ctx.api.clone());
    view.pasted_text = read_cart(args.cart.clone())?;
    view.preferences.earliest_time = args.earliest.clone();
    view.preferences.latest_time = args.latest.clone();
    Ok(view)
}

fn read_cart(path: Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(&path)
            .with_context(|| format!("reading cart file {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn print_schedule(meetings: &[client::models::CourseMeeting]) {
    if meetings.is_empty() {
        println!("No course meetings returned.");
        return;
    }
    for meeting in meetings {
        println!("{}", output::format_meeting(meeting));
    }
}
