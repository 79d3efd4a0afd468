//! Lab test selection.
//!
//! A lab booking is either a list of individual tests or a list of packages,
//! never both: they are billed and fulfilled differently. Adding an item of
//! the other kind starts the list over.

use serde::{Deserialize, Serialize};

/// Separator used when lab items are shown as one booking label.
pub const LAB_ITEM_SEPARATOR: &str = "، ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabMode {
    Single,
    Package,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "LabSelectionRepr", into = "LabSelectionRepr")]
pub enum LabSelection {
    #[default]
    Empty,
    Single(Vec<String>),
    Package(Vec<String>),
}

impl LabSelection {
    pub fn mode(&self) -> Option<LabMode> {
        match self {
            LabSelection::Empty => None,
            LabSelection::Single(_) => Some(LabMode::Single),
            LabSelection::Package(_) => Some(LabMode::Package),
        }
    }

    pub fn items(&self) -> &[String] {
        match self {
            LabSelection::Empty => &[],
            LabSelection::Single(items) | LabSelection::Package(items) => items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn is_package(&self) -> bool {
        matches!(self, LabSelection::Package(_))
    }

    fn add(&self, mode: LabMode, name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() {
            return self.clone();
        }

        let mut items = if self.mode() == Some(mode) {
            self.items().to_vec()
        } else {
            Vec::new()
        };
        if !items.iter().any(|item| item == name) {
            items.push(name.to_string());
        }

        match mode {
            LabMode::Single => LabSelection::Single(items),
            LabMode::Package => LabSelection::Package(items),
        }
    }

    /// Adds an individual test; replaces any packages.
    pub fn add_test(&self, name: &str) -> Self {
        self.add(LabMode::Single, name)
    }

    /// Adds a package; replaces any individual tests.
    pub fn add_package(&self, name: &str) -> Self {
        self.add(LabMode::Package, name)
    }

    pub fn remove(&self, name: &str) -> Self {
        let items: Vec<String> = self
            .items()
            .iter()
            .filter(|item| item.as_str() != name)
            .cloned()
            .collect();

        match (self.mode(), items.is_empty()) {
            (_, true) | (None, _) => LabSelection::Empty,
            (Some(LabMode::Single), false) => LabSelection::Single(items),
            (Some(LabMode::Package), false) => LabSelection::Package(items),
        }
    }

    pub fn clear(&self) -> Self {
        LabSelection::Empty
    }

    /// All items as one label, `None` when nothing is selected.
    pub fn label(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.items().join(LAB_ITEM_SEPARATOR))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LabSelectionRepr {
    #[serde(default)]
    mode: Option<LabMode>,
    #[serde(default)]
    items: Vec<String>,
}

impl TryFrom<LabSelectionRepr> for LabSelection {
    type Error = String;

    fn try_from(repr: LabSelectionRepr) -> Result<Self, Self::Error> {
        let mut seen: Vec<&str> = Vec::with_capacity(repr.items.len());
        for item in &repr.items {
            if item.trim().is_empty() {
                return Err("lab items must not be blank".to_string());
            }
            if seen.contains(&item.as_str()) {
                return Err(format!("duplicate lab item: {}", item));
            }
            seen.push(item);
        }

        match (repr.mode, repr.items.is_empty()) {
            (None, true) => Ok(LabSelection::Empty),
            (None, false) => Err("lab items given without a selection mode".to_string()),
            (Some(_), true) => Err("lab selection mode given without items".to_string()),
            (Some(LabMode::Single), false) => Ok(LabSelection::Single(repr.items)),
            (Some(LabMode::Package), false) => Ok(LabSelection::Package(repr.items)),
        }
    }
}

impl From<LabSelection> for LabSelectionRepr {
    fn from(selection: LabSelection) -> Self {
        let mode = selection.mode();
        let items = match selection {
            LabSelection::Empty => Vec::new(),
            LabSelection::Single(items) | LabSelection::Package(items) => items,
        };
        LabSelectionRepr { mode, items }
    }
}
