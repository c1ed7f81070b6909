//! Roster engine
//!
//! Owns the course rows of one grading session, keeps in-progress numeric
//! input apart from committed values, and runs the save-time checks.

use crate::core::error::RosterError;
use crate::core::grading::GradingScale;
use crate::core::models::{Category, CourseRecord, Field, Requirement};
use crate::core::notice::Notice;
use crate::core::summary::{compute_summary_with, Summary};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::{debug, info};

/// A single edit applied through [`Roster::update_field`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Set the category
    Category(Category),
    /// Set the requirement type
    Requirement(Requirement),
    /// Set the course name
    Name(String),
    /// Type raw text into a numeric field; held as a draft until blur
    Numeric(Field, String),
}

impl Edit {
    /// Build an edit for `field` from text as typed by the user
    ///
    /// # Errors
    /// Returns an error if a category or requirement label is not recognised
    pub fn parse(field: Field, raw: &str) -> Result<Self, String> {
        Ok(match field {
            Field::Category => Self::Category(raw.parse()?),
            Field::Requirement => Self::Requirement(raw.parse()?),
            Field::Name => Self::Name(raw.to_string()),
            _ => Self::Numeric(field, raw.to_string()),
        })
    }
}

/// Whether `raw` parses as an integer within `[min, max]`
#[must_use]
pub fn validate_value(raw: &str, min: u8, max: u8) -> bool {
    raw.trim()
        .parse::<i64>()
        .is_ok_and(|v| v >= i64::from(min) && v <= i64::from(max))
}

#[derive(Debug, Clone, Default)]
struct Entry {
    record: CourseRecord,
    drafts: BTreeMap<Field, String>,
    selected: bool,
}

impl Entry {
    fn sort_key(&self) -> (Category, Requirement, &str) {
        (
            self.record.category,
            self.record.requirement,
            self.record.name.as_str(),
        )
    }
}

/// Ordered collection of course records for one session
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<Entry>,
    scale: GradingScale,
    summary_visible: bool,
}

impl Roster {
    /// Create an empty roster graded under `scale`
    #[must_use]
    pub fn new(scale: GradingScale) -> Self {
        Self {
            entries: Vec::new(),
            scale,
            summary_visible: false,
        }
    }

    /// Create a roster from existing records, in the given order
    #[must_use]
    pub fn with_records(records: Vec<CourseRecord>, scale: GradingScale) -> Self {
        let entries = records
            .into_iter()
            .map(|record| Entry {
                record,
                ..Entry::default()
            })
            .collect();
        Self {
            entries,
            scale,
            summary_visible: false,
        }
    }

    /// Grading scale used for letter grades
    #[must_use]
    pub const fn scale(&self) -> GradingScale {
        self.scale
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the roster has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Committed record at `index`
    #[must_use]
    pub fn record(&self, index: usize) -> Option<&CourseRecord> {
        self.entries.get(index).map(|e| &e.record)
    }

    /// Committed records in current order
    pub fn records(&self) -> impl ExactSizeIterator<Item = &CourseRecord> {
        self.entries.iter().map(|e| &e.record)
    }

    /// Owned copy of the committed records
    #[must_use]
    pub fn to_records(&self) -> Vec<CourseRecord> {
        self.records().cloned().collect()
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut Entry, RosterError> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(RosterError::Index { index, len })
    }

    /// Append a row with default values and hide the summary
    pub fn add_record(&mut self) -> Notice {
        self.entries.push(Entry::default());
        self.summary_visible = false;
        let index = self.entries.len() - 1;
        debug!(index, "added course row");
        Notice::Added { index }
    }

    /// Apply an edit to the row at `index`
    ///
    /// Numeric input is not range-checked here; it is kept as a draft until
    /// [`validate_field`](Self::validate_field) resolves it.
    ///
    /// # Errors
    /// Returns [`RosterError::Index`] if `index` is out of bounds
    pub fn update_field(&mut self, index: usize, edit: Edit) -> Result<(), RosterError> {
        let entry = self.entry_mut(index)?;
        match edit {
            Edit::Category(category) => entry.record.category = category,
            Edit::Requirement(requirement) => entry.record.requirement = requirement,
            Edit::Name(name) => entry.record.name = name,
            Edit::Numeric(field, raw) if field.is_numeric() => {
                entry.drafts.insert(field, raw);
            }
            Edit::Numeric(field, _) => {
                debug!(index, %field, "ignored numeric edit on a text field");
                return Ok(());
            }
        }
        debug!(index, "updated course row");
        Ok(())
    }

    /// Pending draft text of a numeric field
    #[must_use]
    pub fn draft(&self, index: usize, field: Field) -> Option<&str> {
        self.entries
            .get(index)
            .and_then(|e| e.drafts.get(&field))
            .map(String::as_str)
    }

    /// Whether any row holds unresolved numeric input
    #[must_use]
    pub fn has_pending_drafts(&self) -> bool {
        self.entries.iter().any(|e| !e.drafts.is_empty())
    }

    /// Resolve the draft of `field` at `index`, as when the input loses focus
    ///
    /// Valid input becomes the committed value. Invalid input resets the field
    /// to its fallback value and the returned error carries the valid range.
    /// A field without a draft validates trivially.
    ///
    /// # Errors
    /// Returns [`RosterError::Index`] for a missing row and
    /// [`RosterError::FieldValidation`] when the draft was rejected
    pub fn validate_field(&mut self, index: usize, field: Field) -> Result<(), RosterError> {
        let entry = self.entry_mut(index)?;
        let Some((min, max)) = field.bounds() else {
            return Ok(());
        };
        let Some(raw) = entry.drafts.remove(&field) else {
            return Ok(());
        };

        if validate_value(&raw, min, max) {
            let value = raw.trim().parse::<u8>().unwrap_or(min);
            entry.record.set_numeric(field, value);
            debug!(index, %field, value, "accepted field input");
            Ok(())
        } else {
            let reset_to = field.reset_value();
            entry.record.set_numeric(field, reset_to);
            debug!(index, %field, raw = %raw, "rejected field input");
            Err(RosterError::FieldValidation {
                field,
                min,
                max,
                reset_to,
            })
        }
    }

    /// Resolve every pending draft, returning one error per rejected field
    pub fn blur_all(&mut self) -> Vec<RosterError> {
        let pending: Vec<(usize, Field)> = self
            .entries
            .iter()
            .enumerate()
            .flat_map(|(index, e)| e.drafts.keys().map(move |field| (index, *field)))
            .collect();

        pending
            .into_iter()
            .filter_map(|(index, field)| self.validate_field(index, field).err())
            .collect()
    }

    /// Flip the delete checkbox of the row at `index`, returning the new state
    ///
    /// # Errors
    /// Returns [`RosterError::Index`] if `index` is out of bounds
    pub fn toggle_selection(&mut self, index: usize) -> Result<bool, RosterError> {
        let entry = self.entry_mut(index)?;
        entry.selected = !entry.selected;
        Ok(entry.selected)
    }

    /// Indices of rows whose delete checkbox is ticked
    #[must_use]
    pub fn selected_indices(&self) -> BTreeSet<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.selected)
            .map(|(i, _)| i)
            .collect()
    }

    /// Delete the rows at `indices`, all interpreted against the roster before removal
    ///
    /// Remaining rows keep their relative order, every selection is cleared
    /// and the summary becomes visible.
    ///
    /// # Errors
    /// Returns [`RosterError::EmptySelection`] for an empty set and
    /// [`RosterError::Index`] if any index is out of bounds; nothing is removed
    /// in either case
    pub fn remove_records(&mut self, indices: &BTreeSet<usize>) -> Result<Notice, RosterError> {
        if indices.is_empty() {
            return Err(RosterError::EmptySelection);
        }
        let len = self.entries.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(RosterError::Index { index, len });
        }

        let names: Vec<String> = indices
            .iter()
            .map(|&i| self.entries[i].record.display_name().to_string())
            .collect();

        let mut position = 0;
        self.entries.retain(|_| {
            let keep = !indices.contains(&position);
            position += 1;
            keep
        });
        for entry in &mut self.entries {
            entry.selected = false;
        }
        self.summary_visible = true;

        info!(removed = names.len(), remaining = self.entries.len(), "deleted courses");
        Ok(Notice::Deleted { names })
    }

    /// Delete every selected row
    ///
    /// # Errors
    /// Same as [`remove_records`](Self::remove_records)
    pub fn remove_selected(&mut self) -> Result<Notice, RosterError> {
        let selected = self.selected_indices();
        self.remove_records(&selected)
    }

    /// Validate the whole roster and, on success, sort it and show the summary
    ///
    /// Checks run in order and stop at the first failure: non-blank names,
    /// every numeric field within its range, totals within 0..=100, unique
    /// names among non-failing courses. On
    /// success rows are stably sorted by category, requirement, then name.
    /// Pending drafts are not part of committed state and are left as they are.
    ///
    /// # Errors
    /// Returns [`RosterError::EmptyName`], [`RosterError::FieldRange`],
    /// [`RosterError::ScoreRange`] or [`RosterError::DuplicateName`]; the
    /// roster is unchanged on error
    pub fn commit(&mut self) -> Result<Notice, RosterError> {
        self.check()?;

        let names: Vec<String> = self
            .entries
            .iter()
            .map(|e| e.record.name.trim().to_string())
            .collect();

        self.entries.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        self.summary_visible = true;

        info!(courses = self.entries.len(), "saved roster");
        Ok(Notice::Saved { names })
    }

    fn check(&self) -> Result<(), RosterError> {
        if self
            .entries
            .iter()
            .any(|e| e.record.name.trim().is_empty())
        {
            return Err(RosterError::EmptyName);
        }

        for record in self.records() {
            for field in Field::NUMERIC {
                let (Some((min, max)), Some(value)) = (field.bounds(), record.numeric(field))
                else {
                    continue;
                };
                if !(min..=max).contains(&value) {
                    return Err(RosterError::FieldRange {
                        name: record.name.clone(),
                        field,
                        value,
                        min,
                        max,
                    });
                }
            }
        }

        if let Some(record) = self
            .records()
            .find(|r| !(0..=100).contains(&r.total_score()))
        {
            return Err(RosterError::ScoreRange {
                name: record.name.clone(),
                total: record.total_score(),
            });
        }

        let mut seen = HashSet::new();
        for record in self.records() {
            if record.grade(self.scale).is_failing() {
                continue;
            }
            if !seen.insert(record.name.as_str()) {
                return Err(RosterError::DuplicateName {
                    name: record.name.clone(),
                });
            }
        }

        Ok(())
    }

    /// Whether the summary row is currently shown
    #[must_use]
    pub const fn summary_visible(&self) -> bool {
        self.summary_visible
    }

    /// Summary of the committed records, regardless of visibility
    #[must_use]
    pub fn summary(&self) -> Summary {
        compute_summary_with(&self.to_records(), self.scale)
    }

    /// Summary if it is currently shown
    #[must_use]
    pub fn visible_summary(&self) -> Option<Summary> {
        self.summary_visible.then(|| self.summary())
    }
}
