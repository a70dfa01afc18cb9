//! XML configuration support.
//! - Loads Options from a small XML document (quick_xml + serde).
//! - Unknown elements are rejected so misconfigurations surface early.
//!
//! Format (every element optional):
//! <safe_file>
//!   <mode>640</mode>                    <!-- octal; "0o640" and "0640" also accepted -->
//!   <read_attempts>3</read_attempts>
//!   <retry_delay_ms>10</retry_delay_ms>
//!   <log_level>normal</log_level>       <!-- quiet | normal | info | debug -->
//! </safe_file>

use anyhow::{Context, Result, anyhow};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::config::types::{LogLevel, Options};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "safe_file")]
#[serde(deny_unknown_fields)]
struct XmlOptions {
    #[serde(rename = "mode")]
    mode: Option<String>,
    #[serde(rename = "read_attempts", default, deserialize_with = "de_u64_trimmed_opt")]
    read_attempts: Option<u64>,
    #[serde(rename = "retry_delay_ms", default, deserialize_with = "de_u64_trimmed_opt")]
    retry_delay_ms: Option<u64>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
}

// Custom deserializer that trims surrounding whitespace for optional u64
fn de_u64_trimmed_opt<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<u64>().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Parse octal permission text such as "600", "0600" or "0o600".
fn parse_mode(s: &str) -> Result<u32> {
    let t = s.trim();
    let digits = t.strip_prefix("0o").unwrap_or(t);
    let mode = u32::from_str_radix(digits, 8).with_context(|| format!("invalid octal mode '{t}'"))?;
    if mode > 0o7777 {
        return Err(anyhow!("mode '{t}' out of range (max 7777)"));
    }
    Ok(mode)
}

// Map XmlOptions -> Options, starting from defaults.
fn xml_to_options(parsed: XmlOptions) -> Result<Options> {
    let mut opts = Options::default();

    if let Some(m) = parsed.mode.as_deref().filter(|m| !m.trim().is_empty()) {
        opts.mode = parse_mode(m)?;
    }
    if let Some(n) = parsed.read_attempts {
        opts.read_attempts = u32::try_from(n).context("read_attempts out of range")?;
    }
    if let Some(ms) = parsed.retry_delay_ms {
        opts.retry_delay = Duration::from_millis(ms);
    }
    if let Some(s) = parsed.log_level.as_deref() {
        opts.log_level = s.trim().parse::<LogLevel>().map_err(|e| anyhow!(e))?;
    }

    Ok(opts)
}

/// Parse Options from XML text.
pub fn parse_options_xml(contents: &str) -> Result<Options> {
    let parsed: XmlOptions = from_xml_str(contents).context("parse options xml")?;
    xml_to_options(parsed)
}

/// Load Options from a specific XML file path.
pub fn load_options_from_xml_path(path: &Path) -> Result<Options> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read options xml '{}'", path.display()))?;
    let opts = parse_options_xml(&contents)
        .with_context(|| format!("load options from '{}'", path.display()))?;
    debug!(path = %path.display(), ?opts, "loaded options");
    Ok(opts)
}
