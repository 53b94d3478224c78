//! Login, logout and current-user handlers.

use botcommand::{DashboardBackend, DashboardResult, login_error_message};
use tracing::info;

/// Sign in and keep the token in the session.
pub async fn login(backend: &dyn DashboardBackend, username: &str, password: &str) -> DashboardResult<()> {
    match backend.login(username, password).await {
        Ok(_) => {
            info!(username = %username, "Logged in");
            println!("Logged in as {}", username);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", login_error_message(&e));
            Err(e)
        }
    }
}

/// Forget the stored token.
pub fn logout(backend: &dyn DashboardBackend) -> DashboardResult<()> {
    backend.logout()?;
    println!("Logged out");
    Ok(())
}

/// Print the signed-in user.
pub async fn whoami(backend: &dyn DashboardBackend) -> DashboardResult<()> {
    if !backend.session().is_authenticated() {
        println!("Not logged in");
        return Ok(());
    }
    let user = backend.current_user().await?;
    println!("{} <{}>", user.username, user.email);
    Ok(())
}
