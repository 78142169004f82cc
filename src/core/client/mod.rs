//! Public client surface + builder.
//! Default endpoints and the UA live in `constants`.

mod constants;

use crate::core::YqError;
use constants::{DEFAULT_BASE_HISTORY, DEFAULT_BASE_QUOTES, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub use constants::MAX_SYMBOLS_PER_REQUEST;

/// Configured HTTP client plus the two CSV endpoints.
///
/// Cloning is cheap; clones share the underlying connection pool. The client holds
/// no per-request state, so one instance can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct YqClient {
    http: Client,
    base_quotes: Url,
    base_history: Url,
}

impl Default for YqClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl YqClient {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> YqClientBuilder {
        YqClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_quotes(&self) -> &Url {
        &self.base_quotes
    }
    pub(crate) fn base_history(&self) -> &Url {
        &self.base_history
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct YqClientBuilder {
    user_agent: Option<String>,
    base_quotes: Option<Url>,
    base_history: Option<Url>,
    proxy: Option<String>,
    custom_client: Option<Client>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl YqClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the snapshot endpoint (e.g., `https://download.finance.yahoo.com/d/quotes.csv`).
    #[must_use]
    pub fn base_quotes(mut self, url: Url) -> Self {
        self.base_quotes = Some(url);
        self
    }

    /// Override the history endpoint (e.g., `https://ichart.finance.yahoo.com/table.csv`).
    #[must_use]
    pub fn base_history(mut self, url: Url) -> Self {
        self.base_history = Some(url);
        self
    }

    /// Route all traffic through a proxy. Validated in [`build`](Self::build).
    #[must_use]
    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.proxy = Some(url.into());
        self
    }

    /// Use a preconfigured `reqwest::Client`.
    ///
    /// UA, proxy and timeout settings on this builder are ignored in that case;
    /// configure them on the supplied client instead.
    #[must_use]
    pub fn custom_client(mut self, client: Client) -> Self {
        self.custom_client = Some(client);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<YqClient, YqError> {
        let base_quotes = match self.base_quotes {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUOTES)?,
        };
        let base_history = match self.base_history {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_HISTORY)?,
        };

        let http = if let Some(c) = self.custom_client {
            c
        } else {
            let mut httpb =
                Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

            if let Some(p) = self.proxy.as_deref() {
                httpb = httpb.proxy(reqwest::Proxy::all(p)?);
            }
            if let Some(t) = self.timeout {
                httpb = httpb.timeout(t);
            }
            if let Some(ct) = self.connect_timeout {
                httpb = httpb.connect_timeout(ct);
            }
            httpb.build()?
        };

        Ok(YqClient {
            http,
            base_quotes,
            base_history,
        })
    }
}
