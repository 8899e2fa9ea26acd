use crate::constants;
use crate::error::{BruteError, Result};
use crate::models::Classification;
use scraper::{Html, Selector};

/// Markers and switches that drive [`ResponseClassifier`].
#[derive(Debug, Clone)]
pub struct Heuristics {
    pub success_selector: String,
    pub error_selector: String,
    /// Text inside the error block that means the session/token is dead.
    pub session_marker: String,
    pub welcome_marker: String,
    pub image_heuristic: bool,
    pub welcome_heuristic: bool,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            success_selector: constants::DEFAULT_SUCCESS_SELECTOR.to_string(),
            error_selector: constants::DEFAULT_ERROR_SELECTOR.to_string(),
            session_marker: constants::DEFAULT_SESSION_MARKER.to_string(),
            welcome_marker: constants::DEFAULT_WELCOME_MARKER.to_string(),
            image_heuristic: true,
            welcome_heuristic: true,
        }
    }
}

pub struct ResponseClassifier {
    success: Selector,
    error: Selector,
    image: Selector,
    heuristics: Heuristics,
}

impl ResponseClassifier {
    pub fn new(heuristics: Heuristics) -> Result<Self> {
        Ok(Self {
            success: Self::parse_selector(&heuristics.success_selector)?,
            error: Self::parse_selector(&heuristics.error_selector)?,
            image: Self::parse_selector("img[src]")?,
            heuristics,
        })
    }

    /// Classifies a login response body. First matching rule wins:
    /// success block, error block (session marker or plain failure),
    /// image with a source, welcome text, and failure otherwise.
    pub fn classify(&self, html: &str) -> Classification {
        let document = Html::parse_document(html);

        if document.select(&self.success).next().is_some() {
            return Classification::Success;
        }

        if let Some(error_block) = document.select(&self.error).next() {
            let text: String = error_block.text().collect();
            if text.contains(&self.heuristics.session_marker) {
                return Classification::Indeterminate;
            }
            return Classification::Failure;
        }

        if self.heuristics.image_heuristic
            && document
                .select(&self.image)
                .filter_map(|img| img.value().attr("src"))
                .any(|src| !src.is_empty())
        {
            return Classification::Success;
        }

        if self.heuristics.welcome_heuristic {
            let text: String = document.root_element().text().collect();
            if text.contains(&self.heuristics.welcome_marker) {
                return Classification::Success;
            }
        }

        Classification::Failure
    }

    fn parse_selector(selector: &str) -> Result<Selector> {
        Selector::parse(selector).map_err(|e| BruteError::InvalidSelector {
            selector: selector.to_string(),
            reason: format!("{:?}", e),
        })
    }
}
