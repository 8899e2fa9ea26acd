use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionTimeout,
    DnsError,
    SslError,
    WebsiteDown,
    Unknown,
}

#[derive(Debug, Clone)]
pub struct ErrorInfo {
    pub error_type: ErrorType,
    pub message: String,
}

pub struct ErrorDetector;

impl ErrorDetector {
    /// Work out why a request never produced a response.
    pub fn detect_request_error(error: &reqwest::Error) -> ErrorInfo {
        // Only the cause chain: the top-level message embeds the request URL
        let mut error_msg = String::new();
        let mut source = std::error::Error::source(error);
        while let Some(cause) = source {
            error_msg.push(' ');
            error_msg.push_str(&cause.to_string().to_lowercase());
            source = cause.source();
        }
        if let Some(host) = error.url().and_then(|url| url.host_str()) {
            error_msg = error_msg.replace(&host.to_lowercase(), "");
        }

        Self::detect_from_message(error.is_timeout(), error.is_connect(), &error_msg)
    }

    fn detect_from_message(is_timeout: bool, is_connect: bool, error_msg: &str) -> ErrorInfo {
        if is_timeout || error_msg.contains("timed out") {
            return ErrorInfo {
                error_type: ErrorType::ConnectionTimeout,
                message: "Connection timeout - target may be slow or unresponsive".to_string(),
            };
        }

        if error_msg.contains("dns") || error_msg.contains("resolve") || error_msg.contains("name resolution") {
            return ErrorInfo {
                error_type: ErrorType::DnsError,
                message: "DNS resolution failed - check the target host name".to_string(),
            };
        }

        if error_msg.contains("ssl") || error_msg.contains("tls") || error_msg.contains("certificate") {
            return ErrorInfo {
                error_type: ErrorType::SslError,
                message: "SSL/TLS error - certificate issue or connection problem".to_string(),
            };
        }

        if is_connect
            || error_msg.contains("connection refused")
            || error_msg.contains("connection reset")
            || error_msg.contains("network unreachable")
        {
            return ErrorInfo {
                error_type: ErrorType::WebsiteDown,
                message: "Connection failed - target may be down or unreachable".to_string(),
            };
        }

        ErrorInfo {
            error_type: ErrorType::Unknown,
            message: "Request failed before a response was received".to_string(),
        }
    }

    /// Print error alert to user
    pub fn alert_error(error_info: &ErrorInfo) {
        let icon = match error_info.error_type {
            ErrorType::ConnectionTimeout | ErrorType::SslError => "⏱".bright_yellow(),
            ErrorType::DnsError | ErrorType::WebsiteDown => "✗".bright_red(),
            ErrorType::Unknown => "?".bright_white(),
        };

        eprintln!(
            "{} {} {}",
            icon,
            "[ALERT]".bright_red().bold(),
            error_info.message.bright_yellow()
        );

        match error_info.error_type {
            ErrorType::DnsError => {
                eprintln!("   {} Check the URL entered at the prompt or passed with --url", "→".bright_blue());
            }
            ErrorType::WebsiteDown | ErrorType::ConnectionTimeout => {
                eprintln!("   {} Verify the target is running and reachable, then try again", "→".bright_blue());
            }
            _ => {}
        }
    }
}
