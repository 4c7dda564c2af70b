/// Decoded input rows handed to the pipeline.
///
/// Rows are positional: cell `i` belongs to `headers[i]`. Rows shorter than
/// the header are treated as padded with empty cells; extra cells are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Build a table from header/value pairs per row.
    ///
    /// Headers are collected in first-seen order; a row without a given
    /// header gets an empty cell for it.
    pub fn from_mappings<R, H, V>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = (H, V)>,
        H: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::default();
        let mut pending: Vec<Vec<(usize, String)>> = Vec::new();
        for row in rows {
            let mut cells = Vec::new();
            for (header, value) in row {
                let header = header.into();
                let idx = match table.headers.iter().position(|h| *h == header) {
                    Some(idx) => idx,
                    None => {
                        table.headers.push(header);
                        table.headers.len() - 1
                    }
                };
                cells.push((idx, value.into()));
            }
            pending.push(cells);
        }
        let width = table.headers.len();
        for cells in pending {
            let mut row = vec![String::new(); width];
            for (idx, value) in cells {
                row[idx] = value;
            }
            table.rows.push(row);
        }
        table
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell value, or `""` when the row is short.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }
}
