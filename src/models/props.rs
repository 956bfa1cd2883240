//! Props handed to the app by the embedding page.

use std::collections::HashMap;

use serde::Deserialize;
use stories_core::Capability;

/// JSON props from the mount element's `data-props` attribute.
///
/// Only `canManage` is read. Other keys are kept so hosts can pass extra
/// data without breaking the parse.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StoriesProps {
    #[serde(rename = "canManage", default)]
    pub can_manage: bool,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl StoriesProps {
    /// Parse the raw attribute. A missing or blank attribute yields the defaults.
    pub fn from_attribute(raw: Option<&str>) -> Result<Self, serde_json::Error> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => serde_json::from_str(raw),
            None => Ok(Self::default()),
        }
    }

    /// Like [`from_attribute`](Self::from_attribute), falling back to
    /// read-only defaults on bad JSON.
    pub fn parse(raw: Option<&str>) -> Self {
        Self::from_attribute(raw).unwrap_or_else(|e| {
            web_sys::console::warn_1(&format!("Ignoring invalid props: {e}").into());
            Self::default()
        })
    }

    pub fn capability(&self) -> Capability {
        if self.can_manage {
            Capability::manage()
        } else {
            Capability::read_only()
        }
    }
}
