use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const MAPS_SEARCH_ENDPOINT: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Map search link for a named place in a city.
pub fn maps_search_url(place: &str, city: &str) -> String {
    let query = format!("{}, {}", place, city);
    format!(
        "{}{}",
        MAPS_SEARCH_ENDPOINT,
        utf8_percent_encode(&query, URI_COMPONENT)
    )
}
