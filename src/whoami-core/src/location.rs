//! The page's visible URL.
//!
//! Only two query parameters matter: `redirectScheme` is read once at startup and
//! `principalId` mirrors the current principal. Every other parameter is left alone.

use url::Url;

pub const REDIRECT_SCHEME_PARAM: &str = "redirectScheme";
pub const PRINCIPAL_ID_PARAM: &str = "principalId";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLocation {
    url: Url,
}

impl PageLocation {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The scheme of the application waiting for a credential, if the page was opened by one.
    pub fn redirect_scheme(&self) -> Option<String> {
        self.get_param(REDIRECT_SCHEME_PARAM)
            .filter(|scheme| !scheme.is_empty())
    }

    pub fn principal_id(&self) -> Option<String> {
        self.get_param(PRINCIPAL_ID_PARAM)
    }

    pub fn with_redirect_scheme(mut self, scheme: &str) -> Self {
        self.replace_param(REDIRECT_SCHEME_PARAM, Some(scheme));
        self
    }

    pub fn set_principal_id(&mut self, principal: &str) {
        self.replace_param(PRINCIPAL_ID_PARAM, Some(principal));
    }

    pub fn clear_principal_id(&mut self) {
        self.replace_param(PRINCIPAL_ID_PARAM, None);
    }

    fn get_param(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// Sets `key` to `value` in place (keeping its position), appends it if absent,
    /// or removes it when `value` is `None`.
    fn replace_param(&mut self, key: &str, value: Option<&str>) {
        let mut pairs: Vec<(String, String)> = Vec::new();
        let mut replaced = false;
        for (k, v) in self.url.query_pairs() {
            if k != key {
                pairs.push((k.into_owned(), v.into_owned()));
            } else if let (Some(value), false) = (value, replaced) {
                pairs.push((k.into_owned(), value.to_string()));
                replaced = true;
            }
        }
        if let (Some(value), false) = (value, replaced) {
            pairs.push((key.to_string(), value.to_string()));
        }

        if pairs.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.query_pairs_mut().clear().extend_pairs(pairs);
        }
    }
}
