//! Welcome message configuration.

use serde::{Deserialize, Serialize};

/// Greeting posted when a member joins.
///
/// # Examples
///
/// ```
/// use botcommand_core::WelcomeConfig;
///
/// let config = WelcomeConfig::default();
/// assert_eq!(
///     config.render("Ada", "Rustaceans", 42),
///     "Welcome Ada to Rustaceans! Please read the rules in #rules."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeConfig {
    /// Channel the greeting is posted in
    pub channel: String,
    /// Template with `{user}`, `{server}` and `{count}` placeholders
    pub message: String,
    /// Also send the greeting by direct message
    pub send_dm: bool,
    /// Assign `role` to new members
    pub assign_role: bool,
    /// Role assigned when `assign_role` is set
    pub role: String,
}

impl Default for WelcomeConfig {
    fn default() -> Self {
        Self {
            channel: "welcome".to_string(),
            message: "Welcome {user} to {server}! Please read the rules in #rules.".to_string(),
            send_dm: false,
            assign_role: true,
            role: "Member".to_string(),
        }
    }
}

impl WelcomeConfig {
    /// Substitute the placeholders in the template.
    pub fn render(&self, user: &str, server: &str, count: u64) -> String {
        self.message
            .replace("{user}", user)
            .replace("{server}", server)
            .replace("{count}", &count.to_string())
    }
}
