use crate::models::{AbortReason, BruteforceResults, RunOutcome};
use colored::*;

pub struct OutputFormatter;

impl OutputFormatter {
    // Real-time output helpers - print directly to stdout
    pub fn print_header(target: &str, users: usize, passwords: usize) {
        println!("{}", "=".repeat(80).bright_white());
        println!("{} {}", "[*] Target:".bright_cyan(), target.bright_yellow());
        println!(
            "{} Users: {}, Passwords: {}",
            "[*]".bright_cyan(),
            users.to_string().bright_white(),
            passwords.to_string().bright_white()
        );
        println!("{}\n", "=".repeat(80).bright_white());
    }

    pub fn print_user_header(username: &str) {
        println!("{}", format!("--- Attacking user: {} ---", username).bright_white().bold());
    }

    pub fn print_failure(password: &str) {
        println!("{} Incorrect: {}", "[-]".bright_black(), password);
    }

    pub fn print_success(username: &str, password: &str) {
        println!(
            "\n{} Login: '{}' | Password: '{}'",
            "[+] SUCCESS!".bright_green().bold(),
            username.bright_green(),
            password.bright_green()
        );
    }

    pub fn print_user_exhausted(username: &str) {
        println!("{} Password for '{}' not found.", "[-]".bright_yellow(), username);
    }

    pub fn print_abort(reason: &AbortReason) {
        match reason {
            AbortReason::Transport { message } => {
                eprintln!("{} {}", "[!] Error:".bright_red().bold(), message);
            }
            AbortReason::UnexpectedStatus { status } => {
                eprintln!(
                    "{} Server returned status {}",
                    "[!] Error:".bright_red().bold(),
                    status.to_string().bright_cyan()
                );
            }
            AbortReason::SessionInvalidated { .. } => {
                eprintln!(
                    "{} CSRF Token mismatch or Session expired.",
                    "[!] CRITICAL:".bright_red().bold()
                );
                eprintln!("    Check the session cookies passed with --cookie!");
            }
        }
    }

    pub fn format(results: &BruteforceResults, format: &str) -> String {
        match format {
            "json" => Self::format_json(results),
            _ => Self::format_table(results),
        }
    }

    fn format_json(results: &BruteforceResults) -> String {
        serde_json::to_string_pretty(results).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_table(results: &BruteforceResults) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", "=".repeat(80).bright_white()));
        output.push_str(&format!("{}\n", "Bruteforce Results".bright_white().bold()));
        output.push_str(&format!("  Target: {}\n", results.target.bright_yellow()));
        output.push_str(&format!("  Total Attempts: {}\n", results.total_attempts));
        output.push_str(&format!("  Failed: {}\n", results.failed_count));

        if !results.successful.is_empty() {
            output.push_str(&format!("  {} Successful Logins:\n", results.successful.len().to_string().bright_green().bold()));
            for cred in &results.successful {
                output.push_str(&format!("    {} / {}\n", cred.username.bright_green(), cred.password.bright_green()));
            }
        }
        if !results.exhausted_users.is_empty() {
            output.push_str(&format!("  Not Found: {}\n", results.exhausted_users.join(", ")));
        }

        let outcome = match &results.outcome {
            RunOutcome::Completed => "completed".bright_green().to_string(),
            RunOutcome::Stopped => "stopped after first success".bright_green().to_string(),
            RunOutcome::Aborted { reason } => format!("{} ({})", "aborted".bright_red().bold(), Self::describe(reason)),
        };
        output.push_str(&format!("  Run: {}\n", outcome));

        output
    }

    fn describe(reason: &AbortReason) -> String {
        match reason {
            AbortReason::Transport { message } => message.clone(),
            AbortReason::UnexpectedStatus { status } => format!("unexpected HTTP status {}", status),
            AbortReason::SessionInvalidated { username, password } => {
                format!("session invalidated at {}:{}", username, password)
            }
        }
    }
}
