use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{CsvProblem, DashboardError, Result};

use super::model::{CellValue, Row, Table};

// ---------------------------------------------------------------------------
// Memoized loader
// ---------------------------------------------------------------------------

/// Memo table of loaded files, keyed by path.
///
/// A path is read from disk at most once until [`TableCache::clear`]. Failed
/// loads are not stored, so a file that shows up later is picked up on the
/// next render.
#[derive(Debug, Default)]
pub struct TableCache {
    entries: HashMap<PathBuf, Arc<Table>>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the table for `path`, reading it on first use.
    pub fn load(&mut self, path: &Path) -> Result<Arc<Table>> {
        if let Some(table) = self.entries.get(path) {
            log::debug!("cache hit for {}", path.display());
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(load_table(path)?);
        log::info!(
            "Loaded {} with {} rows and columns {:?}",
            path.display(),
            table.len(),
            table.columns
        );
        self.entries.insert(path.to_path_buf(), Arc::clone(&table));
        Ok(table)
    }

    /// Forget everything; the next [`TableCache::load`] re-reads from disk.
    pub fn clear(&mut self) {
        log::debug!("dropping {} cached tables", self.entries.len());
        self.entries.clear();
    }
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse a CSV file with a header row into a [`Table`].
///
/// Column and row order are preserved. Types are inferred per column:
/// * every cell an integer, no gaps → `Integer`
/// * every non-empty cell numeric → `Float` (gaps become `NaN`)
/// * every cell `True`/`False` → `Bool`
/// * anything else → `String` (gaps become `Null`)
///
/// Empty cells and the usual NA spellings (`NA`, `N/A`, `null`, `None`,
/// `NaN`, ...) are missing values. Short rows are padded with missing values;
/// a row longer than the header is an error.
///
/// Anything that stops the bytes from being read (absent file, directory,
/// I/O failure mid-read) is reported as [`DashboardError::FileNotFound`].
pub fn load_table(path: &Path) -> Result<Table> {
    let not_found = || DashboardError::FileNotFound {
        path: path.to_path_buf(),
    };

    let is_file = std::fs::metadata(path).map(|m| m.is_file()).unwrap_or(false);
    if !is_file {
        log::debug!("{} is not a readable file", path.display());
        return Err(not_found());
    }
    let file = File::open(path).map_err(|e| {
        log::debug!("open {} failed: {e}", path.display());
        not_found()
    })?;

    read_table(file).map_err(|source| match source {
        CsvProblem::Csv(ref e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => {
            log::debug!("reading {} failed: {e}", path.display());
            not_found()
        }
        source => DashboardError::InvalidCsv {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn read_table<R: std::io::Read>(reader: R) -> Result<Table, CsvProblem> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if h.is_empty() {
                format!("Unnamed: {i}")
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut raw: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() > columns.len() {
            return Err(CsvProblem::TooManyFields {
                line: record.position().map_or(0, |p| p.line()),
                expected: columns.len(),
                found: record.len(),
            });
        }
        let mut cells: Vec<String> = record
            .iter()
            .map(|s| s.to_string())
            .collect();
        cells.resize(columns.len(), String::new());
        raw.push(cells);
    }

    let kinds: Vec<ColumnKind> = (0..columns.len())
        .map(|c| ColumnKind::infer(raw.iter().map(|r| r[c].as_str())))
        .collect();

    let rows = raw
        .into_iter()
        .map(|cells| Row {
            cells: cells
                .iter()
                .zip(&kinds)
                .map(|(s, kind)| kind.parse(s))
                .collect(),
        })
        .collect();

    Ok(Table::new(columns, rows))
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ColumnKind {
    Integer,
    Float,
    Bool,
    Text,
}

impl ColumnKind {
    fn infer<'a>(cells: impl Iterator<Item = &'a str>) -> Self {
        let mut any_gap = false;
        let mut all_int = true;
        let mut all_float = true;
        let mut all_bool = true;
        let mut any_value = false;

        for s in cells {
            if is_missing(s) {
                any_gap = true;
                continue;
            }
            any_value = true;
            all_int &= s.parse::<i64>().is_ok();
            all_float &= s.parse::<f64>().is_ok();
            all_bool &= parse_bool(s).is_some();
        }

        if !any_value {
            ColumnKind::Float
        } else if all_int && !any_gap {
            ColumnKind::Integer
        } else if all_float {
            ColumnKind::Float
        } else if all_bool && !any_gap {
            ColumnKind::Bool
        } else {
            ColumnKind::Text
        }
    }

    fn parse(self, s: &str) -> CellValue {
        match self {
            _ if is_missing(s) && self == ColumnKind::Float => CellValue::Float(f64::NAN),
            _ if is_missing(s) => CellValue::Null,
            ColumnKind::Integer => s.parse().map_or(CellValue::Null, CellValue::Integer),
            ColumnKind::Float => s.parse().map_or(CellValue::Null, CellValue::Float),
            ColumnKind::Bool => parse_bool(s).map_or(CellValue::Null, CellValue::Bool),
            ColumnKind::Text => CellValue::String(s.to_string()),
        }
    }
}

/// Cell spellings read as a missing value, the same set `pandas.read_csv`
/// uses by default.
const NA_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(s: &str) -> bool {
    NA_TOKENS.contains(&s)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "True" | "true" | "TRUE" => Some(true),
        "False" | "false" | "FALSE" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    fn write_csv(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn preserves_column_and_row_order() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "t.csv", "z,a,m\n3,x,1.5\n1,y,2.5\n2,z,0.5\n");

        let table = load_table(&path).unwrap();
        assert_eq!(table.columns, vec!["z", "a", "m"]);
        let firsts: Vec<_> = table.rows.iter().map(|r| r.cells[0].clone()).collect();
        assert_eq!(
            firsts,
            vec![CellValue::Integer(3), CellValue::Integer(1), CellValue::Integer(2)]
        );
    }

    #[test]
    fn infers_column_types_like_pandas() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "t.csv",
            ",epoch,gappy,flag,text\n0,1,4,True,hello\n1,2,,False,\n",
        );

        let table = load_table(&path).unwrap();
        assert_eq!(table.columns[0], "Unnamed: 0");
        let row = &table.rows[1].cells;
        assert_eq!(row[1], CellValue::Integer(2));
        assert!(matches!(row[2], CellValue::Float(v) if v.is_nan()));
        assert_eq!(table.rows[0].cells[2].to_string(), "4.0");
        assert_eq!(row[3], CellValue::Bool(false));
        assert_eq!(row[4], CellValue::Null);
    }

    #[test]
    fn short_rows_are_padded() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "t.csv", "a,b,c\nx,y\n");

        let table = load_table(&path).unwrap();
        assert_eq!(table.rows[0].cells.len(), 3);
        assert_eq!(table.rows[0].cells[2].to_string(), "nan");
    }

    #[test]
    fn na_spellings_are_missing_values() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "t.csv",
            "score,note\n0.5,NA\nN/A,null\nNaN,None\n1,ok\n",
        );

        let table = load_table(&path).unwrap();
        assert_eq!(table.rows[0].cells[0], CellValue::Float(0.5));
        assert!(matches!(table.rows[1].cells[0], CellValue::Float(v) if v.is_nan()));
        assert_eq!(table.rows[2].cells[0].to_string(), "nan");
        assert_eq!(table.rows[0].cells[1], CellValue::Null);
        assert_eq!(table.rows[1].cells[1], CellValue::Null);
        assert_eq!(table.rows[2].cells[1], CellValue::Null);
        assert_eq!(table.rows[3].cells[1], CellValue::String("ok".into()));
    }

    #[test]
    fn long_rows_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "t.csv", "a,b\n1,2\n3,4,LOST\n");

        let err = load_table(&path).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::InvalidCsv {
                source: CsvProblem::TooManyFields { line: 3, expected: 2, found: 3 },
                ..
            }
        ));
        assert!(err.to_string().contains("baris 3 berisi 3 kolom, seharusnya 2"));
    }

    #[test]
    fn directory_path_reports_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("crawl1.csv");
        std::fs::create_dir(&path).unwrap();

        let err = load_table(&path).unwrap_err();
        assert!(matches!(err, DashboardError::FileNotFound { .. }));
        assert_eq!(
            err.to_string(),
            format!("File {} tidak ditemukan.", path.display())
        );
    }

    #[test]
    fn invalid_utf8_is_not_a_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.csv");
        std::fs::write(&path, b"a,b\n\xff\xfe,1\n").unwrap();

        let err = load_table(&path).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidCsv { .. }));
    }

    #[test]
    fn missing_file_reports_not_found() {
        let err = load_table(Path::new("data/missing.csv")).unwrap_err();
        assert!(matches!(err, DashboardError::FileNotFound { .. }));
        assert_eq!(err.to_string(), "File data/missing.csv tidak ditemukan.");
    }

    #[test]
    fn cache_reads_each_path_once() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "t.csv", "a\n1\n");
        let mut cache = TableCache::new();

        let first = cache.load(&path).unwrap();
        write_csv(&dir, "t.csv", "a\n1\n2\n");
        let second = cache.load(&path).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);

        cache.clear();
        assert_eq!(cache.load(&path).unwrap().len(), 2);
    }

    #[test]
    fn failed_loads_are_not_cached() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("late.csv");
        let mut cache = TableCache::new();

        assert!(cache.load(&path).is_err());
        write_csv(&dir, "late.csv", "a\n1\n");
        assert_eq!(cache.load(&path).unwrap().len(), 1);
    }
}
