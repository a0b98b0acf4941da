//! Table rendering utilities for CLI outputs.

pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Left,
        }
    }

    pub fn right(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Right,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                match col.align {
                    Align::Left => out.push_str(&format!("{:<width$} ", row[i], width = col.width)),
                    Align::Right => {
                        out.push_str(&format!("{:>width$} ", row[i], width = col.width))
                    }
                }
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headers_and_aligned_rows() {
        let mut t = Table::new(vec![Column::left("NAME", 6), Column::right("KM", 5)]);
        t.add_row(vec!["run".into(), "3.5".into()]);
        let out = t.render();
        assert!(out.starts_with("NAME   KM"));
        assert!(out.contains("run      3.5"));
    }
}
