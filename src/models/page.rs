use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Snapshot of the host page: every table it renders, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub tables: Vec<Table>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Class of the element wrapping the table (e.g. `ta_grid_table`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub text: String,
    /// Inner label element (the `<span>` of a header cell)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colspan: Option<u32>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// Text content as the host would report it: own text, then label text.
    pub fn text_content(&self) -> String {
        match &self.label {
            Some(label) => format!("{}{}", self.text, label),
            None => self.text.clone(),
        }
    }
}

impl Row {
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        Self {
            cells: texts.iter().map(|t| Cell::text(t.as_ref())).collect(),
        }
    }
}

impl Table {
    pub fn in_container(container: &str, rows: Vec<Row>) -> Self {
        Self {
            container: Some(container.to_string()),
            rows,
        }
    }
}

impl Page {
    pub fn from_json(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        let mut json = self.to_json()?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }

    fn grid_indices(&self, grid_class: &str) -> Vec<usize> {
        self.tables
            .iter()
            .enumerate()
            .filter(|(_, t)| t.container.as_deref() == Some(grid_class))
            .map(|(i, _)| i)
            .collect()
    }

    /// Header and data table, i.e. the first two tables inside `grid_class`.
    pub fn grid_tables(&self, grid_class: &str) -> Option<(&Table, &Table)> {
        let idx = self.grid_indices(grid_class);
        match idx.as_slice() {
            [h, d, ..] => Some((&self.tables[*h], &self.tables[*d])),
            _ => None,
        }
    }

    pub fn grid_tables_mut(&mut self, grid_class: &str) -> Option<(&mut Table, &mut Table)> {
        let idx = self.grid_indices(grid_class);
        let (h, d) = match idx.as_slice() {
            [h, d, ..] => (*h, *d),
            _ => return None,
        };
        // indices are ascending, so the header lives in the left half
        let (left, right) = self.tables.split_at_mut(d);
        Some((&mut left[h], &mut right[0]))
    }

    /// The data table exists and holds more than its header row.
    pub fn is_ready(&self, grid_class: &str) -> bool {
        self.grid_tables(grid_class)
            .map(|(_, data)| data.rows.len() > 1)
            .unwrap_or(false)
    }
}
