//! SequenceRecord and the OEIS JSON shapes it is decoded from

use super::{SectionKey, SectionValue, SequenceError, SequenceId};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A fetched OEIS entry
///
/// Immutable once fetched; keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub id: SequenceId,
    /// Short description, untrusted text
    pub name: String,
    /// Comma-separated terms without spaces
    pub data: String,
    /// Present, non-empty sections
    #[serde(default)]
    pub sections: BTreeMap<SectionKey, SectionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<u32>,
    /// Last edit time as reported by OEIS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<FixedOffset>>,
}

impl SequenceRecord {
    pub fn new(id: SequenceId, name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            data: data.into(),
            sections: BTreeMap::new(),
            revision: None,
            modified: None,
            created: None,
        }
    }

    /// Attach a section; empty values are dropped
    pub fn with_section(mut self, key: SectionKey, value: impl Into<SectionValue>) -> Self {
        let value = value.into();
        if value.is_empty() {
            self.sections.remove(&key);
        } else {
            self.sections.insert(key, value);
        }
        self
    }

    pub fn section(&self, key: SectionKey) -> Option<&SectionValue> {
        self.sections.get(&key).filter(|value| !value.is_empty())
    }

    /// The first few terms, for compact listings
    pub fn leading_terms(&self, count: usize) -> Vec<&str> {
        self.data
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .take(count)
            .collect()
    }
}

/// One entry of the OEIS JSON search format
///
/// Fields the renderer does not use are ignored. `references` is the
/// numeric count of citing entries, not the `reference` text section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawEntry {
    pub number: Option<u32>,
    pub name: String,
    pub data: String,
    pub offset: Option<SectionValue>,
    pub comment: Option<SectionValue>,
    pub reference: Option<SectionValue>,
    pub link: Option<SectionValue>,
    pub formula: Option<SectionValue>,
    pub example: Option<SectionValue>,
    pub maple: Option<SectionValue>,
    pub mathematica: Option<SectionValue>,
    pub program: Option<SectionValue>,
    pub xref: Option<SectionValue>,
    pub keyword: Option<SectionValue>,
    pub author: Option<SectionValue>,
    pub references: Option<u64>,
    pub revision: Option<u32>,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub time: Option<DateTime<FixedOffset>>,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub created: Option<DateTime<FixedOffset>>,
}

impl RawEntry {
    fn take_section(&mut self, key: SectionKey) -> Option<SectionValue> {
        match key {
            SectionKey::Offset => self.offset.take(),
            SectionKey::Comment => self.comment.take(),
            SectionKey::Reference => self.reference.take(),
            SectionKey::Link => self.link.take(),
            SectionKey::Formula => self.formula.take(),
            SectionKey::Example => self.example.take(),
            SectionKey::Maple => self.maple.take(),
            SectionKey::Mathematica => self.mathematica.take(),
            SectionKey::Program => self.program.take(),
            SectionKey::Xref => self.xref.take(),
            SectionKey::Keyword => self.keyword.take(),
            SectionKey::Author => self.author.take(),
        }
    }
}

impl TryFrom<RawEntry> for SequenceRecord {
    type Error = SequenceError;

    fn try_from(mut raw: RawEntry) -> Result<Self, Self::Error> {
        let number = raw.number.ok_or(SequenceError::MissingNumber)?;
        let id = SequenceId::from_number(number)?;
        let mut sections = BTreeMap::new();
        for key in SectionKey::ALL {
            if let Some(value) = raw.take_section(key).filter(|v| !v.is_empty()) {
                sections.insert(key, value);
            }
        }
        Ok(Self {
            id,
            name: raw.name,
            data: raw.data,
            sections,
            revision: raw.revision,
            modified: raw.time,
            created: raw.created,
        })
    }
}

/// Body of `GET /search?fmt=json`
///
/// The endpoint answers with a bare array of entries (or `null` when
/// nothing matches); older deployments wrap the list in an object.
/// Entries stay as raw JSON here so each one decodes on its own.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Entries(Vec<serde_json::Value>),
    Legacy {
        #[serde(default)]
        count: u64,
        #[serde(default)]
        results: Option<Vec<serde_json::Value>>,
    },
}

impl SearchResponse {
    /// Decode a response body; one result per entry
    ///
    /// Only a body that is not a search response at all is an error. A
    /// malformed entry yields an `Err` in its own slot.
    pub fn parse(body: &str) -> Result<Vec<Result<RawEntry, serde_json::Error>>, serde_json::Error> {
        let response: Option<SearchResponse> = serde_json::from_str(body)?;
        Ok(response
            .map(SearchResponse::into_entries)
            .unwrap_or_default()
            .into_iter()
            .map(serde_json::from_value)
            .collect())
    }

    pub fn into_entries(self) -> Vec<serde_json::Value> {
        match self {
            Self::Entries(entries) => entries,
            Self::Legacy { results, .. } => results.unwrap_or_default(),
        }
    }
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| DateTime::parse_from_rfc3339(&s).ok()))
}
