// Application constants
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Target used when the URL prompt is left empty
pub const DEFAULT_TARGET_URL: &str = "http://localhost:4280/vulnerabilities/brute/";

// Wordlists, relative to the working directory
pub const DEFAULT_USERS_FILE: &str = "logins+passwords/users.txt";
pub const DEFAULT_PASSWORDS_FILE: &str = "logins+passwords/passwords.txt";

// Cookies attached to every request when none are given on the command line.
// This is the DVWA difficulty cookie; session cookies (PHPSESSID, the lab
// server's `id`) change per login and must be passed with --cookie.
pub const DEFAULT_COOKIES: &[(&str, &str)] = &[("security", "low")];

// Login form fields
pub const USERNAME_FIELD: &str = "username";
pub const PASSWORD_FIELD: &str = "password";
pub const DEFAULT_SUBMIT_FIELD: &str = "Login";
pub const DEFAULT_SUBMIT_VALUE: &str = "Login";

// Response classification defaults
// Exact class attribute, so `class="success message"` is not a match
pub const DEFAULT_SUCCESS_SELECTOR: &str = r#"div[class="message success"]"#;
pub const DEFAULT_ERROR_SELECTOR: &str = r#"div[class="message error"]"#;
pub const DEFAULT_SESSION_MARKER: &str = "CSRF";
pub const DEFAULT_WELCOME_MARKER: &str = "Welcome";

// Slow response thresholds (in seconds)
pub const SLOW_RESPONSE_SECS: f64 = 5.0;
pub const VERY_SLOW_RESPONSE_SECS: f64 = 15.0;

// Process exit codes
pub const EXIT_ABORTED: i32 = 2;
