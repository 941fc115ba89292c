use crate::models::page::PARAM_PREVIEW;

/// Link to the share page for `page_url`.
pub fn share_link(share_page: &str, page_url: &str) -> String {
    format!("{}?link={}", share_page, urlencoding::encode(page_url))
}

/// Preview variant of a shared link, with the menu button hidden.
pub fn shared_preview(link: &str) -> String {
    let separator = if link.contains('?') { '&' } else { '?' };
    format!("{}{}{}=true", link, separator, PARAM_PREVIEW)
}
