#![forbid(unsafe_code)]

//! The custom-code tag a site owner pastes into their footer.

use accesspro_core::{ConfigError, ToolbarConfig};

/// Render the `<script type="module">` tag that loads the bundle at
/// `bundle_url` and installs the toolbar once.
///
/// A default config installs with `install()`; anything else is embedded as
/// JSON and passed to `installWithConfig`.
pub fn custom_code_snippet(bundle_url: &str, config: &ToolbarConfig) -> Result<String, ConfigError> {
    let (import, call) = if *config == ToolbarConfig::default() {
        ("install", "install();".to_owned())
    } else {
        let json = config.to_json_string()?;
        (
            "installWithConfig",
            format!("installWithConfig({});", js_string_literal(&json)?),
        )
    };
    Ok(format!(
        "<script type=\"module\">\nimport init, {{ {import} }} from {url};\nawait init();\n{call}\n</script>",
        url = js_string_literal(bundle_url)?,
    ))
}

/// Quote `value` as a JS string literal that is safe inside a `<script>`.
fn js_string_literal(value: &str) -> Result<String, ConfigError> {
    let quoted = serde_json::to_string(value).map_err(ConfigError::Json)?;
    Ok(quoted.replace("</", "<\\/"))
}
