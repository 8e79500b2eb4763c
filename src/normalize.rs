use std::collections::HashSet;

use crate::extract::RawCard;

/// Marker written in place of a missing optional field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Per-column cleanup. Returning `None` leaves the cell empty.
pub type Cleanup = fn(String) -> Option<String>;

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub cleanup: Cleanup,
}

/// Header of the required column plus the three optional columns.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub name: &'static str,
    pub columns: [Column; 3],
}

impl Schema {
    pub fn headers(&self) -> [&'static str; 4] {
        let [a, b, c] = self.columns;
        [self.name, a.header, b.header, c.header]
    }
}

/// Leaves the value as extracted.
pub fn keep(value: String) -> Option<String> {
    Some(value)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    pub name: String,
    pub fields: [Option<String>; 3],
}

impl Row {
    pub fn cells(&self) -> [Option<&str>; 4] {
        let [a, b, c] = &self.fields;
        [Some(self.name.as_str()), a.as_deref(), b.as_deref(), c.as_deref()]
    }
}

impl From<Row> for RawCard {
    fn from(row: Row) -> Self {
        RawCard {
            name: Some(row.name),
            fields: row.fields,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: [&'static str; 4],
    pub rows: Vec<Row>,
}

impl Table {
    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.headers.len())
    }
}

/// Turn extracted cards into the final table.
///
/// Missing optional fields become [`NOT_AVAILABLE`], nameless rows are
/// dropped, every optional column goes through its cleanup, then exact
/// duplicates are removed keeping the first occurrence. Input order is
/// otherwise preserved.
pub fn normalize(cards: Vec<RawCard>, schema: &Schema) -> Table {
    let mut seen = HashSet::new();
    let rows = cards
        .into_iter()
        .filter_map(|card| {
            let name = card.name?;
            let mut fields = card.fields.map(|f| f.filter(|v| !v.is_empty()));
            for (field, column) in fields.iter_mut().zip(schema.columns.iter()) {
                let value = field.take().unwrap_or_else(|| NOT_AVAILABLE.to_string());
                *field = (column.cleanup)(value);
            }
            Some(Row { name, fields })
        })
        .filter(|row| seen.insert(row.clone()))
        .collect();

    Table {
        headers: schema.headers(),
        rows,
    }
}

// ── Tests ──
