//! Account commands: register, login, logout, whoami

use anyhow::Result;
use chrono::{Datelike, Local};
use clap::Args;

use client::api::AuthApi;
use client::views::{AuthMode, AuthView};

use super::Context;

#[derive(Args)]
pub struct RegisterArgs {
    /// UNC email address (@unc.edu, @live.unc.edu, or @ad.unc.edu)
    #[arg(long)]
    pub email: String,
    /// Password, at least 8 characters with letters and numbers
    #[arg(long)]
    pub password: String,
    /// Your major
    #[arg(long)]
    pub major: String,
    /// Expected graduation year (defaults to next year)
    #[arg(long)]
    pub grad_year: Option<i32>,
}

#[derive(Args)]
pub struct LoginArgs {
    /// UNC email address
    #[arg(long)]
    pub email: String,
    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn register(ctx: &Context, args: RegisterArgs) -> Result<()> {
    let current_year = Local::now().year();
    let mut view = AuthView::new(ctx.api.clone(), ctx.sessions.clone(), current_year);
    view.mode = AuthMode::Register;
    view.form.email = args.email;
    view.form.password = args.password;
    view.form.major = args.major;
    if let Some(year) = args.grad_year {
        view.form.grad_year = year;
    }

    if let Some(user) = view.submit().await? {
        println!(
            "Account created. Signed in as {} ({}, class of {}).",
            user.display_name, user.major, user.grad_year
        );
    }
    Ok(())
}

pub async fn login(ctx: &Context, args: LoginArgs) -> Result<()> {
    let current_year = Local::now().year();
    let mut view = AuthView::new(ctx.api.clone(), ctx.sessions.clone(), current_year);
    view.form.email = args.email;
    view.form.password = args.password;

    if let Some(user) = view.submit().await? {
        println!("Signed in as {}.", user.display_name);
    }
    Ok(())
}

pub fn logout(ctx: &Context) -> Result<()> {
    ctx.sessions.clear()?;
    println!("Signed out.");
    Ok(())
}

pub async fn whoami(ctx: &Context) -> Result<()> {
    let session = ctx.require_session()?;
    let user = ctx.api.current_user(&session).await?;

    println!("{} <{}>", user.display_name, user.email);
    println!("{}, class of {}", user.major, user.grad_year);
    Ok(())
}
