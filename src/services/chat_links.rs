//! ChatGPT destination URLs.

use url::form_urlencoded;

const CHATGPT_WEB_URL: &str = "https://chat.openai.com/";

/// App deep-link schemes, tried in preference order.
const APP_SCHEMES: [&str; 3] = ["chatgpt://", "openai://", "com.openai.chat://"];

fn encode(query: &str) -> String {
    form_urlencoded::byte_serialize(query.trim().as_bytes()).collect()
}

/// Web destination carrying the prompt as the `q` parameter.
pub fn web_url(query: &str) -> String {
    format!("{CHATGPT_WEB_URL}?q={}", encode(query))
}

/// Native-app deep-link candidates, in preference order.
pub fn app_url_candidates(query: &str) -> Vec<String> {
    let suffix = if query.trim().is_empty() { String::new() } else { format!("?q={}", encode(query)) };
    APP_SCHEMES.iter().map(|scheme| format!("{scheme}{suffix}")).collect()
}
