//! Converter resolution
//!
//! Two override tables (`custom` and `defaults`) are consulted through an
//! ordered list of short-circuit steps: custom-exact, custom-category,
//! default-exact, default-category. Exact type keys beat category keys
//! within a table regardless of priority; priority only breaks ties
//! between entries competing for the same key of one table, where the
//! higher priority wins and equal priorities go to the most recent
//! insert.

use indexmap::IndexMap;
use tracing::{debug, trace};
use xylem_config::ConverterSpec;

use crate::classify::{classify, Classification};
use crate::error::{XmlError, XmlResult};
use crate::registry::ConverterRegistry;
use crate::value::Value;

/// One resolution-table entry: a converter identifier with a priority
#[derive(Debug, Clone, PartialEq)]
pub struct TableEntry {
    identifier: String,
    priority: i64,
}

impl TableEntry {
    /// Create an entry
    pub fn new(identifier: impl Into<String>, priority: i64) -> Self {
        Self {
            identifier: identifier.into(),
            priority,
        }
    }

    /// The converter identifier
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The tie-breaking priority
    pub fn priority(&self) -> i64 {
        self.priority
    }
}

impl From<&ConverterSpec> for TableEntry {
    fn from(spec: &ConverterSpec) -> Self {
        Self::new(spec.identifier(), spec.priority())
    }
}

/// A resolution table keyed by exact type keys and category keys
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolutionTable {
    entries: IndexMap<String, TableEntry>,
}

impl ResolutionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from configured converter specs
    pub fn from_specs(specs: &IndexMap<String, ConverterSpec>) -> Self {
        let mut table = Self::new();
        for (key, spec) in specs {
            table.insert(key.clone(), TableEntry::from(spec));
        }
        table
    }

    /// Insert an entry under a key
    ///
    /// When the key is already present the higher-priority entry is kept;
    /// on equal priority the incoming entry replaces the existing one.
    pub fn insert(&mut self, key: impl Into<String>, entry: TableEntry) {
        match self.entries.entry(key.into()) {
            indexmap::map::Entry::Occupied(mut occupied) => {
                if entry.priority >= occupied.get().priority {
                    occupied.insert(entry);
                }
            }
            indexmap::map::Entry::Vacant(vacant) => {
                vacant.insert(entry);
            }
        }
    }

    /// Remove an entry by key
    pub fn remove(&mut self, key: &str) -> Option<TableEntry> {
        self.entries.shift_remove(key)
    }

    /// Look up an entry by key
    pub fn get(&self, key: &str) -> Option<&TableEntry> {
        self.entries.get(key)
    }

    /// True when the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One step of the resolution chain: a plain function of the
/// classification and the two tables, returning a candidate entry
type ResolverStep =
    for<'t> fn(&Classification, &'t ResolutionTable, &'t ResolutionTable) -> Option<&'t TableEntry>;

fn custom_exact<'t>(
    classification: &Classification,
    custom: &'t ResolutionTable,
    _defaults: &'t ResolutionTable,
) -> Option<&'t TableEntry> {
    classification
        .exact_type_key
        .as_deref()
        .and_then(|key| custom.get(key))
}

fn custom_category<'t>(
    classification: &Classification,
    custom: &'t ResolutionTable,
    _defaults: &'t ResolutionTable,
) -> Option<&'t TableEntry> {
    classification.category.key().and_then(|key| custom.get(key))
}

fn default_exact<'t>(
    classification: &Classification,
    _custom: &'t ResolutionTable,
    defaults: &'t ResolutionTable,
) -> Option<&'t TableEntry> {
    classification
        .exact_type_key
        .as_deref()
        .and_then(|key| defaults.get(key))
}

fn default_category<'t>(
    classification: &Classification,
    _custom: &'t ResolutionTable,
    defaults: &'t ResolutionTable,
) -> Option<&'t TableEntry> {
    classification.category.key().and_then(|key| defaults.get(key))
}

const STEPS: [(&str, ResolverStep); 4] = [
    ("custom-exact", custom_exact),
    ("custom-category", custom_category),
    ("default-exact", default_exact),
    ("default-category", default_category),
];

/// Resolve the converter identifier to use for a value
///
/// Steps whose candidate names an identifier the registry cannot produce
/// are skipped. Exhausting every step fails with
/// [`XmlError::NoConverterFound`].
pub fn resolve(
    value: &Value,
    custom: &ResolutionTable,
    defaults: &ResolutionTable,
    registry: &ConverterRegistry,
) -> XmlResult<String> {
    let classification = classify(value);

    for (step_name, step) in STEPS {
        let Some(entry) = step(&classification, custom, defaults) else {
            continue;
        };
        if !registry.is_resolvable(entry.identifier()) {
            trace!(
                step = step_name,
                identifier = entry.identifier(),
                "skipping unresolvable candidate"
            );
            continue;
        }
        debug!(
            step = step_name,
            identifier = entry.identifier(),
            category = ?classification.category,
            "resolved converter"
        );
        return Ok(entry.identifier().to_string());
    }

    Err(XmlError::no_converter(
        "could not find an appropriate converter",
    ))
}
