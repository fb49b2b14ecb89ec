use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{MatcherError, Result};
use crate::matcher::{DynamicMatcher, MacMatcher, MacSet, MatcherGroup};
use crate::parser::{load, parse_text_mac_file};
use crate::provider::{DataListener, DataManager};

/// Prefix selecting a provider-backed entry
pub const PROVIDER_PREFIX: &str = "provider:";

/// One configured source of MAC addresses
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum SourceEntry {
    /// Address literal, e.g. `aa:bb:cc:dd:ee:ff`
    Literal(String),
    /// Tag of a data provider, written `provider:<tag>`
    Provider(String),
}

impl FromStr for SourceEntry {
    type Err = MatcherError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.strip_prefix(PROVIDER_PREFIX) {
            Some(tag) => {
                let tag = tag.trim();
                if tag.is_empty() {
                    return Err(MatcherError::InvalidFormat(format!(
                        "empty provider tag in {:?}",
                        s
                    )));
                }
                Ok(SourceEntry::Provider(tag.to_string()))
            }
            None => Ok(SourceEntry::Literal(s.to_string())),
        }
    }
}

impl TryFrom<String> for SourceEntry {
    type Error = MatcherError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for SourceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceEntry::Literal(s) => f.write_str(s),
            SourceEntry::Provider(tag) => write!(f, "{}{}", PROVIDER_PREFIX, tag),
        }
    }
}

/// Build a matcher group from raw entry strings.
///
/// See [`build_group`].
pub fn batch_load_provider<S: AsRef<str>>(entries: &[S], dm: &DataManager) -> Result<MatcherGroup> {
    let entries = entries
        .iter()
        .map(|s| s.as_ref().parse())
        .collect::<Result<Vec<SourceEntry>>>()?;
    build_group(&entries, dm)
}

/// Build a matcher group from parsed entries.
///
/// All literals share one static set, placed first. Each distinct provider
/// tag gets its own reloadable matcher registered as a listener on that
/// provider. On any error, listeners registered earlier in the same call are
/// removed before returning. Callers must close (or drop) the returned group
/// to detach it from its providers.
pub fn build_group(entries: &[SourceEntry], dm: &DataManager) -> Result<MatcherGroup> {
    // Dropping the group on an early return runs the closers registered so far
    let mut group = MatcherGroup::new();
    let mut static_set = MacSet::new();
    let mut cells = Vec::new();
    let mut seen = HashSet::new();

    for entry in entries {
        match entry {
            SourceEntry::Literal(s) => load(&mut static_set, s)?,
            SourceEntry::Provider(tag) => {
                if !seen.insert(tag.as_str()) {
                    tracing::debug!(provider = %tag, "duplicate provider entry skipped");
                    continue;
                }

                let provider = dm
                    .get_data_provider(tag)
                    .ok_or_else(|| MatcherError::SourceNotFound(tag.clone()))?;

                let cell = Arc::new(DynamicMatcher::new(parse_text_mac_file));
                let listener: Arc<dyn DataListener> = cell.clone();
                provider
                    .load_and_add_listener(listener.clone())
                    .map_err(|e| MatcherError::ProviderLoad {
                        tag: tag.clone(),
                        source: Box::new(e),
                    })?;

                group.append_closer(move || provider.delete_listener(&listener));
                cells.push(cell);
            }
        }
    }

    tracing::debug!(
        static_entries = static_set.len(),
        providers = cells.len(),
        "built MAC matcher group"
    );

    group.append(static_set);
    for cell in cells {
        group.append(cell);
    }
    Ok(group)
}
