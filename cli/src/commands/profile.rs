//! Profile details and bug reports

use clap::Subcommand;

use tripline_core::App;

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Show the logged-in user's profile
    Show,
    /// File a bug report
    ReportBug { message: String },
}

pub async fn run(app: &App, cmd: ProfileCommand) -> anyhow::Result<()> {
    match cmd {
        ProfileCommand::Show => show(app).await,
        ProfileCommand::ReportBug { message } => report_bug(app, &message).await,
    }
}

async fn show(app: &App) -> anyhow::Result<()> {
    let user = app.profile().await?;

    println!("{} (@{})", user.full_name, user.username);
    println!("    Email:    {}", user.email);
    println!("    Location: {}, {}", user.city, user.country);
    println!("    Language: {}", user.language);
    if let Some(role) = &user.user_type {
        println!("    Role:     {role}");
    }

    Ok(())
}

async fn report_bug(app: &App, message: &str) -> anyhow::Result<()> {
    let report = app.report_bug(message).await?;
    println!("Bug report #{} submitted", report.report_id);
    Ok(())
}
