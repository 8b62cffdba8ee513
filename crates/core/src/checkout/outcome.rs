//! Submission outcomes

use serde_json::Value;

/// What the checkout endpoint told us to do next.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Continue on an external payment page.
    Redirect(String),

    /// The order was accepted; the body is kept for the confirmation view.
    Confirmed(Value),
}

impl SubmissionOutcome {
    /// Interprets a successful response body.
    ///
    /// A JSON object with a non-empty string `url` is a redirect; anything else is a confirmation.
    pub fn from_body(body: Value) -> Self {
        let url = body
            .get("url")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        match url {
            Some(url) => SubmissionOutcome::Redirect(url),
            None => SubmissionOutcome::Confirmed(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn url_means_redirect() {
        let outcome = SubmissionOutcome::from_body(json!({ "url": "https://pay.example/x" }));

        assert_eq!(
            outcome,
            SubmissionOutcome::Redirect("https://pay.example/x".to_string())
        );
    }

    #[test]
    fn missing_or_blank_url_means_confirmation() {
        let body = json!({ "orderId": "o-1" });

        assert_eq!(
            SubmissionOutcome::from_body(body.clone()),
            SubmissionOutcome::Confirmed(body)
        );
        assert!(matches!(
            SubmissionOutcome::from_body(json!({ "url": "" })),
            SubmissionOutcome::Confirmed(_)
        ));
        assert!(matches!(
            SubmissionOutcome::from_body(json!({ "url": 42 })),
            SubmissionOutcome::Confirmed(_)
        ));
        assert!(matches!(
            SubmissionOutcome::from_body(json!("ok")),
            SubmissionOutcome::Confirmed(_)
        ));
    }
}
