/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Access-key intake from the page URL and from the text field.

use url::form_urlencoded;

use crate::constants::{ACCESS_KEY_LENGTH, TOKEN_QUERY_PARAM};

/// Return the value of the `token` query parameter.
///
/// Accepts a full URL (`https://host/page?token=..#frag`), a bare search
/// string as found in `window.location.search` (`?token=..`), or a query
/// without the leading `?`. Only presence is checked: an empty value is
/// returned as an empty string, a missing parameter as `None`.
pub fn read_from_location_query(url: &str) -> Option<String> {
    let without_fragment = url.split('#').next().unwrap_or_default();
    let query = match without_fragment.split_once('?') {
        Some((_, query)) => query,
        None if without_fragment.contains("://") => return None,
        None => without_fragment,
    };
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == TOKEN_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// Normalise a raw text-field value into a candidate token.
pub fn on_user_edit(raw: &str) -> String {
    raw.trim().to_string()
}

/// `true` when `token` has exactly the length of a meeting access key.
pub fn is_access_key(token: &str) -> bool {
    token.chars().count() == ACCESS_KEY_LENGTH
}
