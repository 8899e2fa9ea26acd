use crate::constants;
use crate::error::{BruteError, Result};
use crate::error_detection::ErrorDetector;
use crate::models::LoginResponse;
use colored::*;
use reqwest::blocking::{Client, ClientBuilder, Request};
use reqwest::cookie::Jar;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// Everything a run needs to talk to the login form.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub target: String,
    pub cookies: Vec<(String, String)>,
    pub submit_field: String,
    pub submit_value: String,
    pub timeout: Option<Duration>,
    pub verbose: bool,
}

/// Sends one login attempt and hands back the raw answer.
pub trait LoginTransport {
    fn submit(&self, username: &str, password: &str) -> Result<LoginResponse>;
}

pub struct HttpClient {
    client: Client,
    target: Url,
    submit_field: String,
    submit_value: String,
    verbose: bool,
}

impl HttpClient {
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let target = Url::parse(&config.target)?;

        // Cookies are pinned to the target for the whole run
        let jar = Jar::default();
        for (name, value) in &config.cookies {
            jar.add_cookie_str(&format!("{}={}", name, value), &target);
        }

        let mut headers = HeaderMap::new();
        let user_agent = format!("formbrute/{}", constants::VERSION);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&user_agent).map_err(|e| BruteError::Client(e.to_string()))?,
        );

        let mut builder = ClientBuilder::new()
            .default_headers(headers)
            .cookie_provider(Arc::new(jar))
            .tls_built_in_root_certs(true);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| BruteError::Client(e.to_string()))?;

        Ok(Self {
            client,
            target,
            submit_field: config.submit_field.clone(),
            submit_value: config.submit_value.clone(),
            verbose: config.verbose,
        })
    }

    fn build_request(&self, username: &str, password: &str) -> Result<Request> {
        let params = [
            (constants::USERNAME_FIELD, username),
            (constants::PASSWORD_FIELD, password),
            (self.submit_field.as_str(), self.submit_value.as_str()),
        ];

        let request = self.client.get(self.target.clone()).query(&params).build()?;
        Ok(request)
    }

    fn check_response_time(&self, url: &str, elapsed: Duration) {
        let seconds = elapsed.as_secs_f64();

        if seconds >= constants::SLOW_RESPONSE_SECS && seconds < constants::VERY_SLOW_RESPONSE_SECS {
            eprintln!("{} Request to {} took {:.2}s - Possible throttling detected",
                "⚠".bright_yellow(),
                url.bright_cyan(),
                seconds);
        }
        else if seconds >= constants::VERY_SLOW_RESPONSE_SECS {
            eprintln!("{} Request to {} took {:.2}s - Very slow response, possible rate limiting or server issues",
                "⚠".bright_red().bold(),
                url.bright_cyan(),
                seconds);
        }
    }
}

impl LoginTransport for HttpClient {
    fn submit(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let request = self.build_request(username, password)?;
        let url = request.url().to_string();

        let start_time = Instant::now();
        let response = self.client.execute(request).map_err(|e| {
            ErrorDetector::alert_error(&ErrorDetector::detect_request_error(&e));
            BruteError::Transport(e)
        })?;
        let elapsed = start_time.elapsed();
        self.check_response_time(&url, elapsed);

        let status = response.status().as_u16();
        let body = response.text()?;

        if self.verbose {
            eprintln!(
                "{} GET {} -> {} ({} bytes, {:.0?})",
                "[v]".bright_black(),
                url.bright_black(),
                status,
                body.len(),
                elapsed
            );
        }

        Ok(LoginResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn config(target: &str) -> SessionConfig {
        SessionConfig {
            target: target.to_string(),
            cookies: vec![("security".to_string(), "low".to_string())],
            submit_field: "Login".to_string(),
            submit_value: "Login".to_string(),
            timeout: None,
            verbose: false,
        }
    }

    #[test]
    fn login_request_carries_query_parameters() {
        let client = HttpClient::new(&config("http://localhost:4280/vulnerabilities/brute/")).unwrap();
        let request = client.build_request("admin", "pass word&1").unwrap();

        assert_eq!(*request.method(), reqwest::Method::GET);
        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("username".to_string(), "admin".to_string()),
                ("password".to_string(), "pass word&1".to_string()),
                ("Login".to_string(), "Login".to_string()),
            ]
        );
        assert_eq!(request.url().path(), "/vulnerabilities/brute/");
    }

    /// Accepts `count` connections, answers each with a tiny page and
    /// returns the raw request heads it saw.
    fn capture_requests(listener: TcpListener, count: usize) -> thread::JoinHandle<Vec<String>> {
        thread::spawn(move || {
            let mut seen = vec![];
            for _ in 0..count {
                let (mut stream, _) = listener.accept().unwrap();
                let mut head = Vec::new();
                let mut buf = [0u8; 1024];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = stream.read(&mut buf).unwrap();
                    if n == 0 {
                        break;
                    }
                    head.extend_from_slice(&buf[..n]);
                }
                stream
                    .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok")
                    .unwrap();
                seen.push(String::from_utf8_lossy(&head).to_lowercase());
            }
            seen
        })
    }

    #[test]
    fn session_cookies_are_sent_with_every_attempt() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = capture_requests(listener, 2);

        let mut cfg = config(&format!("http://127.0.0.1:{}/vulnerabilities/brute/", port));
        cfg.cookies.push(("PHPSESSID".to_string(), "abc".to_string()));
        cfg.timeout = Some(Duration::from_secs(5));
        let client = HttpClient::new(&cfg).unwrap();

        for password in ["123", "letmein"] {
            let response = client.submit("admin", password).unwrap();
            assert_eq!(response.status, 200);
            assert_eq!(response.body, "ok");
        }

        let requests = server.join().unwrap();
        assert_eq!(requests.len(), 2);
        for request in &requests {
            let cookie_line = request
                .lines()
                .find(|line| line.starts_with("cookie:"))
                .unwrap_or_else(|| panic!("no cookie header in {}", request));
            assert!(cookie_line.contains("security=low"), "{}", cookie_line);
            assert!(cookie_line.contains("phpsessid=abc"), "{}", cookie_line);
        }
        assert!(requests[1].starts_with("get /vulnerabilities/brute/?username=admin&password=letmein&login=login "));
    }

    #[test]
    fn invalid_target_is_rejected() {
        let result = HttpClient::new(&config("not a url"));
        assert!(matches!(result, Err(BruteError::InvalidUrl(_))));
    }

    #[test]
    fn unreachable_target_is_a_transport_error() {
        // Port 9 on loopback (discard) is closed on test machines
        let mut cfg = config("http://127.0.0.1:9/login");
        cfg.timeout = Some(Duration::from_secs(2));
        let client = HttpClient::new(&cfg).unwrap();

        let result = client.submit("admin", "admin");
        assert!(matches!(result, Err(BruteError::Transport(_))));
    }
}
