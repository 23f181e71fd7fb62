//! Client configuration types.

use url::Url;
use vitrine_core::query::Params;

/// Configuration for a [`Storefront`](crate::Storefront).
///
/// Besides the base URL, a store-wide default locale and currency can be
/// set; they are added to every request's query parameters unless the call
/// already carries its own.
#[derive(Debug, Clone)]
pub struct Config {
    base_url: Url,
    locale: Option<String>,
    currency: Option<String>,
}

impl Config {
    /// Creates a configuration with the given base URL and no defaults.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            locale: None,
            currency: None,
        }
    }

    /// Sets the default locale (e.g. `fr`, `de-CH`).
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets the default currency (e.g. `EUR`).
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Base URL all paths are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Default locale, if configured.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Default currency, if configured.
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Folds configured defaults into a call's parameters. Explicit caller
    /// values win; defaults land after them.
    pub(crate) fn merge_defaults(&self, params: &Params) -> Params {
        let mut merged = params.clone();
        if let Some(locale) = &self.locale
            && !merged.contains_key("locale")
        {
            merged = merged.insert("locale", locale.clone());
        }
        if let Some(currency) = &self.currency
            && !merged.contains_key("currency")
        {
            merged = merged.insert("currency", currency.clone());
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use vitrine_core::query::to_query_string;

    use super::*;

    fn base() -> Url {
        Url::parse("https://shop.example.com").expect("valid URL")
    }

    #[test]
    fn no_defaults() {
        let config = Config::new(base());
        assert_eq!(config.locale(), None);
        assert_eq!(config.currency(), None);

        let params = Params::new().insert("page", 1);
        assert_eq!(to_query_string(&config.merge_defaults(&params)), "page=1");
    }

    #[test]
    fn defaults_are_appended() {
        let config = Config::new(base()).with_locale("fr").with_currency("EUR");

        let params = Params::new().insert("page", 1);
        assert_eq!(
            to_query_string(&config.merge_defaults(&params)),
            "page=1&locale=fr&currency=EUR"
        );
    }

    #[test]
    fn caller_values_win() {
        let config = Config::new(base()).with_locale("fr").with_currency("EUR");

        let params = Params::new().insert("currency", "USD");
        assert_eq!(
            to_query_string(&config.merge_defaults(&params)),
            "currency=USD&locale=fr"
        );
    }
}
