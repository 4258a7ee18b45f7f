use shared::{ConfigError, TrackerConfig};

/// Id of the optional `<script type="application/json">` block holding
/// tracker settings
pub const CONFIG_ELEMENT_ID: &str = "tracker-config";

/// Read settings from the page. `Ok(None)` when the page carries none.
pub fn load_from_page() -> Result<Option<TrackerConfig>, ConfigError> {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => TrackerConfig::from_json(&raw).map(Some),
        _ => Ok(None),
    }
}
