use crate::constants;
use crate::error::BruteError;
use clap::Parser;

#[derive(Parser)]
#[command(name = "formbrute")]
#[command(version = constants::VERSION)]
#[command(about = "Credential bruteforcer for HTML login forms")]
#[command(long_about = "formbrute - dictionary attack against a GET login form, for lab targets you are authorized to test (DVWA and similar).

Every username is tried with every password in file order. A success moves
on to the next username. The run stops at once on a connection error, a
non-200 response, or a CSRF/session error reported by the target.

Examples:
  # Prompt for the target, use logins+passwords/users.txt and passwords.txt
  formbrute

  # DVWA with an authenticated session
  formbrute --url http://localhost:4280/vulnerabilities/brute/ \\
      --cookie PHPSESSID=1f2036c5bb525f5eaa4bf003aeb4d42c --cookie security=low

  # JSON summary, stop at the first hit
  formbrute --url http://127.0.0.1:3000/vulnerabilities/brute/ --stop-on-success -o json")]
pub struct Cli {
    /// Target login URL (prompted for when omitted)
    #[arg(long)]
    pub url: Option<String>,

    /// Path to file containing usernames
    #[arg(short, long, default_value = constants::DEFAULT_USERS_FILE)]
    pub users: String,

    /// Path to file containing passwords
    #[arg(short, long, default_value = constants::DEFAULT_PASSWORDS_FILE)]
    pub passwords: String,

    /// Session cookie sent with every request, NAME=VALUE (repeatable)
    #[arg(short, long = "cookie", value_parser = parse_cookie)]
    pub cookies: Vec<(String, String)>,

    /// Name of the submit field sent with each attempt
    #[arg(long, default_value = constants::DEFAULT_SUBMIT_FIELD)]
    pub submit_field: String,

    /// Value of the submit field
    #[arg(long, default_value = constants::DEFAULT_SUBMIT_VALUE)]
    pub submit_value: String,

    /// CSS selector of the block shown on a successful login
    #[arg(long, default_value = constants::DEFAULT_SUCCESS_SELECTOR)]
    pub success_selector: String,

    /// CSS selector of the block shown on a failed login
    #[arg(long, default_value = constants::DEFAULT_ERROR_SELECTOR)]
    pub error_selector: String,

    /// Text in the error block that means the session or CSRF token is invalid
    #[arg(long, default_value = constants::DEFAULT_SESSION_MARKER)]
    pub session_marker: String,

    /// Page text that counts as a successful login when no message block exists
    #[arg(long, default_value = constants::DEFAULT_WELCOME_MARKER)]
    pub welcome_marker: String,

    /// Do not treat a page with an image as a successful login
    #[arg(long)]
    pub no_image_heuristic: bool,

    /// Do not treat a page containing the welcome marker as a successful login
    #[arg(long)]
    pub no_welcome_heuristic: bool,

    /// Stop the whole run at the first working credential
    #[arg(long)]
    pub stop_on_success: bool,

    /// Request timeout in seconds (transport default when omitted)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Summary format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub output: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Cookies from the command line, or the built-in set when none were given.
    pub fn session_cookies(&self) -> Vec<(String, String)> {
        if self.cookies.is_empty() {
            constants::DEFAULT_COOKIES
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect()
        } else {
            self.cookies.clone()
        }
    }
}

pub fn parse_cookie(raw: &str) -> Result<(String, String), BruteError> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(BruteError::InvalidCookie(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_pairs() {
        assert_eq!(parse_cookie("security=low").unwrap(), ("security".to_string(), "low".to_string()));
        assert_eq!(parse_cookie("id=a=b").unwrap(), ("id".to_string(), "a=b".to_string()));
        assert_eq!(parse_cookie("empty=").unwrap(), ("empty".to_string(), String::new()));
        assert!(parse_cookie("novalue").is_err());
        assert!(parse_cookie("=value").is_err());
    }

    #[test]
    fn defaults_match_lab_setup() {
        let cli = Cli::try_parse_from(["formbrute"]).unwrap();

        assert!(cli.url.is_none());
        assert_eq!(cli.users, "logins+passwords/users.txt");
        assert_eq!(cli.passwords, "logins+passwords/passwords.txt");
        assert_eq!(cli.session_cookies(), vec![("security".to_string(), "low".to_string())]);
        assert_eq!(cli.submit_field, "Login");
        assert!(!cli.stop_on_success);
    }

    #[test]
    fn explicit_cookies_replace_defaults() {
        let cli = Cli::try_parse_from([
            "formbrute",
            "--url",
            "http://127.0.0.1:3000/vulnerabilities/brute/",
            "-c",
            "id=83mOjPvjoyEZGR2wW1Onwg",
            "--cookie",
            "security=high",
        ])
        .unwrap();

        assert_eq!(
            cli.session_cookies(),
            vec![
                ("id".to_string(), "83mOjPvjoyEZGR2wW1Onwg".to_string()),
                ("security".to_string(), "high".to_string()),
            ]
        );
    }

    #[test]
    fn malformed_cookie_is_rejected() {
        assert!(Cli::try_parse_from(["formbrute", "--cookie", "broken"]).is_err());
    }
}
