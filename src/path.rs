//! Structural address of a component value: `"<SegmentTag>/<Element>/<Component>"`.

use std::fmt;
use std::str::FromStr;

use crate::error::PathError;

/// Points at one component slot inside a segment, e.g. `UNH/1/0`.
///
/// Missing indices default to 0, so `"BGM"` and `"BGM/0/0"` address the same
/// slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdiPath {
    segment: String,
    element: u16,
    component: u16,
}

impl EdiPath {
    pub fn new(segment: impl Into<String>, element: u16, component: u16) -> Self {
        EdiPath {
            segment: segment.into(),
            element,
            component,
        }
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn element(&self) -> u16 {
        self.element
    }

    pub fn component(&self) -> u16 {
        self.component
    }
}

impl FromStr for EdiPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || PathError(s.to_string());
        let mut parts = s.split('/');
        let segment = parts.next().filter(|tag| !tag.is_empty()).ok_or_else(err)?;
        if !segment.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(err());
        }
        let element = match parts.next() {
            Some(text) => text.parse().map_err(|_| err())?,
            None => 0,
        };
        let component = match parts.next() {
            Some(text) => text.parse().map_err(|_| err())?,
            None => 0,
        };
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(EdiPath::new(segment, element, component))
    }
}

impl fmt::Display for EdiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.segment, self.element, self.component)
    }
}
