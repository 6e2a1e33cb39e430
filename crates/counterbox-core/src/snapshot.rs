//! Owned snapshot of a `CounterBox` and its two text renderings.
//!
//! A snapshot is plain data: it is copied out under the registry's read lock
//! and rendered afterwards, so no formatting or I/O ever runs while the lock
//! is held.

use std::fmt::{self, Write};

use serde::Serialize;

/// One metric's name and the value it held when the snapshot was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricValue {
    pub name: String,
    pub value: i64,
}

impl From<(String, i64)> for MetricValue {
    fn from((name, value): (String, i64)) -> Self {
        Self { name, value }
    }
}

/// Point-of-read copy of every metric in a [`CounterBox`].
///
/// Serializes to JSON as three named arrays; the plain-text forms are
/// [`Snapshot::http_body`] and the `Display` impl.
///
/// [`CounterBox`]: crate::CounterBox
#[derive(Debug, Clone, Default, Serialize)]
pub struct Snapshot {
    pub counters: Vec<MetricValue>,
    pub max: Vec<MetricValue>,
    pub min: Vec<MetricValue>,
}

impl Snapshot {
    pub(crate) fn sort(&mut self) {
        self.counters.sort_by(|a, b| a.name.cmp(&b.name));
        self.max.sort_by(|a, b| a.name.cmp(&b.name));
        self.min.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Plain-text body served by the HTTP handler.
    ///
    /// Literal layout, counts in the headers, blank line before the Max and
    /// Min sections, trailing newline:
    ///
    /// ```text
    /// Counters 2
    /// a=1
    /// b=2
    ///
    /// Max values 0
    ///
    /// Min values 1
    /// c=-3
    /// ```
    pub fn http_body(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Counters {}", self.counters.len());
        for m in &self.counters {
            let _ = writeln!(out, "{}={}", m.name, m.value);
        }
        let _ = writeln!(out, "\nMax values {}", self.max.len());
        for m in &self.max {
            let _ = writeln!(out, "{}={}", m.name, m.value);
        }
        let _ = writeln!(out, "\nMin values {}", self.min.len());
        for m in &self.min {
            let _ = writeln!(out, "{}={}", m.name, m.value);
        }
        out
    }
}

/// Human-readable dump. Headers are always present, entries are indented
/// two spaces, and there is no trailing newline:
///
/// ```text
/// == Counters ==
///   a: 2
/// == Min values ==
/// == Max values ==
/// ```
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("== Counters ==")?;
        for m in &self.counters {
            write!(f, "\n  {}: {}", m.name, m.value)?;
        }
        f.write_str("\n== Min values ==")?;
        for m in &self.min {
            write!(f, "\n  {}: {}", m.name, m.value)?;
        }
        f.write_str("\n== Max values ==")?;
        for m in &self.max {
            write!(f, "\n  {}: {}", m.name, m.value)?;
        }
        Ok(())
    }
}
