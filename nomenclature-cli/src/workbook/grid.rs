//! Untyped string grid built from a worksheet range

use calamine::{Data, ExcelDateTime, Range};

/// Rectangular grid of trimmed cell strings
///
/// Blank cells are empty strings. Rows are padded to the widest row so every
/// `(row, col)` inside `height() x width()` is addressable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
    width: usize,
}

impl Grid {
    /// Build a grid from raw string rows, trimming and padding as needed
    pub fn from_rows<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(|c| c.as_ref().trim().to_string()).collect())
            .collect();

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }

        Self { rows, width }
    }

    /// Build a grid from a calamine range
    pub fn from_range(range: &Range<Data>) -> Self {
        Self::from_rows(range.rows().map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>()))
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell text, or "" when out of bounds
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

/// Stringify a calamine cell
///
/// Whole floats lose their fractional part so `204.0` reads back as `"204"`.
/// Dates render as `YYYY-MM-DD HH:MM:SS`.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) if dt.is_datetime() => format_datetime(dt),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}

fn format_datetime(dt: &ExcelDateTime) -> String {
    let (year, month, day, hour, min, sec, _) = dt.to_ymd_hms_milli();
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        year, month, day, hour, min, sec
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::ExcelDateTimeType;

    #[test]
    fn test_from_rows_trims_and_pads() {
        let grid = Grid::from_rows(vec![vec!["  a ", "b"], vec!["c"]]);

        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.cell(0, 0), "a");
        assert_eq!(grid.cell(1, 1), "");
    }

    #[test]
    fn test_cell_out_of_bounds_is_blank() {
        let grid = Grid::from_rows(vec![vec!["x"]]);
        assert_eq!(grid.cell(5, 5), "");
    }

    #[test]
    fn test_cell_to_string_numbers() {
        assert_eq!(cell_to_string(&Data::Float(204.0)), "204");
        assert_eq!(cell_to_string(&Data::Float(6.29)), "6.29");
        assert_eq!(cell_to_string(&Data::Int(7)), "7");
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String(" FCU ".to_string())), "FCU");
    }

    #[test]
    fn test_cell_to_string_dates() {
        let date = ExcelDateTime::new(45000.0, ExcelDateTimeType::DateTime, false);
        assert_eq!(cell_to_string(&Data::DateTime(date)), "2023-03-15 00:00:00");

        let noon = ExcelDateTime::new(45000.5, ExcelDateTimeType::DateTime, false);
        assert_eq!(cell_to_string(&Data::DateTime(noon)), "2023-03-15 12:00:00");
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::from_rows(Vec::<Vec<&str>>::new());
        assert_eq!(grid.height(), 0);
        assert_eq!(grid.width(), 0);
    }
}
