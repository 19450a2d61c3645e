//! Class rankings and rating submission commands

use anyhow::Result;
use chrono::Local;
use clap::Args;

use client::views::RankingsView;

use super::Context;
use crate::output;

#[derive(Args)]
pub struct ClassesArgs {
    /// The major to show rankings for
    pub major: String,
    /// Case-insensitive substring filter on class code or name
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct RateClassArgs {
    /// Class code, e.g. "COMP 550"
    #[arg(long)]
    pub class_code: String,
    /// Full class name
    #[arg(long)]
    pub class_name: String,
    /// Professor who taught the class
    #[arg(long)]
    pub professor: String,
    /// Difficulty rating from 1 (easy) to 10 (very hard)
    #[arg(long)]
    pub rating: u8,
    /// Semester, e.g. "Fall 2025" (defaults to the current one)
    #[arg(long)]
    pub semester: Option<String>,
}

#[derive(Args)]
pub struct RateProfessorArgs {
    /// Professor name
    #[arg(long)]
    pub professor: String,
    /// Class code, e.g. "COMP 550"
    #[arg(long)]
    pub class_code: String,
    /// Rating from 1.0 (poor) to 5.0 (excellent)
    #[arg(long)]
    pub rating: f64,
    /// Optional free-text review
    #[arg(long)]
    pub review: Option<String>,
    /// Semester, e.g. "Fall 2025" (defaults to the current one)
    #[arg(long)]
    pub semester: Option<String>,
}

pub async fn classes(ctx: &Context, args: ClassesArgs) -> Result<()> {
    let session = ctx.require_session()?;

    let mut view = RankingsView::new(ctx.api.clone(), args.major, Local::now().date_naive());
    view.refresh(&session).await?;
    if let Some(term) = args.search {
        view.search = term;
    }

    let rankings = view.filtered();
    if rankings.is_empty() {
        if view.search.is_empty() {
            println!("No classes ranked for {} yet.", view.major);
        } else {
            println!("No classes found matching \"{}\"", view.search);
        }
        return Ok(());
    }

    for (index, ranking) in rankings.iter().enumerate() {
        println!("#{} {} - {}", index + 1, ranking.class_code, ranking.class_name);
        println!(
            "    difficulty {:.1}/10 ({} reviews)",
            ranking.average_difficulty, ranking.total_submissions
        );
        for professor in &ranking.professors {
            let rating = if professor.avg_rating > 0.0 {
                format!(
                    "{} {:.1}/5 ({})",
                    output::stars(professor.avg_rating),
                    professor.avg_rating,
                    professor.rating_count
                )
            } else {
                "No ratings".to_string()
            };
            println!("    {:<24} {}", professor.name, rating);
        }
    }
    Ok(())
}

pub async fn rate_class(ctx: &Context, args: RateClassArgs) -> Result<()> {
    let session = ctx.require_session()?;

    let mut view = RankingsView::new(
        ctx.api.clone(),
        session.user.major.clone(),
        Local::now().date_naive(),
    );
    view.difficulty_form.class_code = args.class_code;
    view.difficulty_form.class_name = args.class_name;
    view.difficulty_form.professor = args.professor;
    view.difficulty_form.difficulty_rating = args.rating;
    if let Some(semester) = args.semester {
        view.difficulty_form.semester = semester;
    }

    if view.submit_difficulty(&session).await?.is_some() {
        println!("Difficulty rating submitted successfully!");
    }
    Ok(())
}

pub async fn rate_professor(ctx: &Context, args: RateProfessorArgs) -> Result<()> {
    let session = ctx.require_session()?;

    let mut view = RankingsView::new(
        ctx.api.clone(),
        session.user.major.clone(),
        Local::now().date_naive(),
    );
    view.professor_form.professor = args.professor;
    view.professor_form.class_code = args.class_code;
    view.professor_form.rating = args.rating;
    view.professor_form.review = args.review.unwrap_or_default();
    if let Some(semester) = args.semester {
        view.professor_form.semester = semester;
    }

    if view.submit_professor_rating(&session).await?.is_some() {
        println!("Professor rating submitted successfully!");
    }
    Ok(())
}
