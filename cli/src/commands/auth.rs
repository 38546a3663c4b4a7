//! Login, logout, whoami, and signup

use clap::Args;

use tripline_core::{App, SessionState, SignUpRequest};

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account username
    pub username: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn login(app: &App, args: LoginArgs) -> anyhow::Result<()> {
    let user = app.login(&args.username, &args.password).await?;

    let name = user
        .full_name
        .or(user.username)
        .unwrap_or_else(|| "unknown".to_string());
    let role = user.user_type.unwrap_or_else(|| "client".to_string());
    println!("Logged in as {name} ({role})");

    Ok(())
}

pub fn logout(app: &App) -> anyhow::Result<()> {
    app.logout()?;
    println!("Logged out");
    Ok(())
}

pub fn whoami(app: &App) -> anyhow::Result<()> {
    match app.session().state() {
        SessionState::Present(user) => {
            let name = user
                .full_name
                .or(user.username)
                .unwrap_or_else(|| "unknown".to_string());
            println!(
                "{name} (userID {}, {})",
                user.user_id.unwrap_or_default(),
                user.user_type.unwrap_or_else(|| "client".to_string()),
            );
        }
        _ => println!("Not logged in"),
    }
    Ok(())
}

#[derive(Args, Debug)]
pub struct SignupArgs {
    #[arg(long)]
    pub full_name: String,
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub confirm_password: String,
    #[arg(long)]
    pub language: String,
    #[arg(long)]
    pub country: String,
    #[arg(long)]
    pub city: String,
}

pub async fn signup(app: &App, args: SignupArgs) -> anyhow::Result<()> {
    let request = SignUpRequest::client(
        args.full_name,
        args.username,
        args.email,
        args.password,
        args.language,
        args.country,
        args.city,
    );

    app.sign_up(&request, &args.confirm_password).await?;
    println!("Sign up successful; you can now log in");

    Ok(())
}
