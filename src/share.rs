//! Share-link construction.
//!
//! The shared content is `"{text} - {author}"`, capped at [`SHARE_BUDGET`]
//! characters. Over-long quotes are cut at a raw character boundary and
//! marked with [`ELLIPSIS_MARKER`]; the author suffix is always kept whole
//! unless it alone exceeds the budget.

use url::Url;

use crate::error::QuoteError;
use crate::quote::Quote;

/// Maximum number of characters in the shared content.
pub const SHARE_BUDGET: usize = 280;

/// Appended to a truncated quote text.
pub const ELLIPSIS_MARKER: &str = "...\"";

/// Default intent endpoint; the content goes in its `text` parameter.
pub const DEFAULT_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// Share text plus the intent URL carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub text: String,
    pub url: String,
}

impl ShareLink {
    pub fn build(intent_base: &str, quote: &Quote) -> Result<Self, QuoteError> {
        let text = share_text(quote);
        let url = intent_url(intent_base, &text)?;
        Ok(Self { text, url })
    }
}

/// Content to share for `quote`, at most [`SHARE_BUDGET`] characters.
pub fn share_text(quote: &Quote) -> String {
    let suffix = format!(" - {}", quote.author);
    let full = format!("{}{}", quote.text, suffix);
    if full.chars().count() <= SHARE_BUDGET {
        return full;
    }

    let reserved = ELLIPSIS_MARKER.chars().count() + suffix.chars().count();
    let keep = SHARE_BUDGET.saturating_sub(reserved);
    let mut content: String = quote.text.chars().take(keep).collect();
    content.push_str(ELLIPSIS_MARKER);
    content.push_str(&suffix);

    if reserved > SHARE_BUDGET {
        content = content.chars().take(SHARE_BUDGET).collect();
    }
    content
}

/// Intent URL for an already-built share text.
pub fn intent_url(intent_base: &str, text: &str) -> Result<String, QuoteError> {
    let url = Url::parse_with_params(intent_base, &[("text", text)]).map_err(|source| {
        QuoteError::InvalidShareBase {
            url: intent_base.to_string(),
            source,
        }
    })?;
    Ok(url.into())
}

/// Intent URL for `quote`.
pub fn share_url(intent_base: &str, quote: &Quote) -> Result<String, QuoteError> {
    intent_url(intent_base, &share_text(quote))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_quote_is_verbatim() {
        let quote = Quote::new("Simplicity is the soul of efficiency.", "Austin Freeman");
        assert_eq!(
            share_text(&quote),
            "Simplicity is the soul of efficiency. - Austin Freeman"
        );
    }

    #[test]
    fn exactly_at_budget_is_verbatim() {
        // 276 + " - X" (4) = 280
        let quote = Quote::new("b".repeat(276), "X");
        let text = share_text(&quote);
        assert_eq!(text.chars().count(), SHARE_BUDGET);
        assert!(!text.contains(ELLIPSIS_MARKER));
    }

    #[test]
    fn one_over_budget_truncates() {
        let quote = Quote::new("b".repeat(277), "X");
        let text = share_text(&quote);
        assert_eq!(text.chars().count(), SHARE_BUDGET);
        assert!(text.ends_with("...\" - X"));
    }

    #[test]
    fn long_quote_is_cut_to_budget() {
        let quote = Quote::new("A".repeat(300), "X");
        let text = share_text(&quote);
        assert_eq!(text.chars().count(), 280);
        assert!(text.ends_with("...\" - X"));
        assert!(text.starts_with(&"A".repeat(272)));
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundary() {
        let quote = Quote::new("é".repeat(400), "Zoë");
        let text = share_text(&quote);
        assert_eq!(text.chars().count(), SHARE_BUDGET);
        assert!(text.ends_with("...\" - Zoë"));
    }

    #[test]
    fn oversized_author_is_still_capped() {
        let quote = Quote::new("short", "Y".repeat(400));
        let text = share_text(&quote);
        assert_eq!(text.chars().count(), SHARE_BUDGET);
        assert!(text.starts_with("...\" - YYY"));
    }

    #[test]
    fn url_encodes_text_parameter() {
        let quote = Quote::new("To be & not", "Me");
        let url = share_url(DEFAULT_INTENT_URL, &quote).unwrap();
        assert!(url.starts_with("https://twitter.com/intent/tweet?text="));
        assert!(!url.contains(" & "));

        let parsed = Url::parse(&url).unwrap();
        let (key, value) = parsed.query_pairs().next().unwrap();
        assert_eq!(key, "text");
        assert_eq!(value, "To be & not - Me");
    }

    #[test]
    fn invalid_base_is_reported() {
        let quote = Quote::new("a", "b");
        let err = share_url("not a url", &quote).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidShareBase { .. }));
    }

    #[test]
    fn share_link_bundles_text_and_url() {
        let quote = Quote::new("Hello", "World");
        let link = ShareLink::build(DEFAULT_INTENT_URL, &quote).unwrap();
        assert_eq!(link.text, "Hello - World");
        assert!(link.url.ends_with("text=Hello+-+World"));
    }
}
