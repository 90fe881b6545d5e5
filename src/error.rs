use std::path::PathBuf;

use thiserror::Error;

use crate::data::model::CellValue;

/// Everything that can go wrong while rendering one page.
///
/// None of these are fatal: the page shows the message inline and the rest
/// of the dashboard stays usable.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("File {} tidak ditemukan.", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("File {} tidak dapat dibaca: {source}", .path.display())]
    InvalidCsv {
        path: PathBuf,
        #[source]
        source: CsvProblem,
    },

    #[error("Kolom {column} tidak ditemukan.")]
    MissingColumn { column: String },

    #[error("Tidak ada data untuk epoch {epoch}.")]
    NoMatchingRow { epoch: CellValue },
}

/// Why a file that could be opened still failed to parse.
#[derive(Debug, Error)]
pub enum CsvProblem {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("baris {line} berisi {found} kolom, seharusnya {expected}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },
}

pub type Result<T, E = DashboardError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_page_text() {
        let err = DashboardError::FileNotFound {
            path: PathBuf::from("data/missing.csv"),
        };
        assert_eq!(err.to_string(), "File data/missing.csv tidak ditemukan.");

        let err = DashboardError::MissingColumn {
            column: "Stemming".into(),
        };
        assert_eq!(err.to_string(), "Kolom Stemming tidak ditemukan.");

        let err = DashboardError::NoMatchingRow {
            epoch: CellValue::Integer(7),
        };
        assert_eq!(err.to_string(), "Tidak ada data untuk epoch 7.");
    }
}
