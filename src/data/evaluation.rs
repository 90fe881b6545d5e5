use crate::error::{DashboardError, Result};

use super::loss::EPOCH;
use super::model::{CellValue, Table};

/// The four metrics shown for one epoch, read verbatim from the file.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationSummary {
    pub epoch: CellValue,
    pub precision: CellValue,
    pub recall: CellValue,
    pub f1: CellValue,
    pub hamming_loss: CellValue,
}

impl EvaluationSummary {
    /// Label/value pairs in display order.
    pub fn fields(&self) -> [(&'static str, &CellValue); 4] {
        [
            ("Precision", &self.precision),
            ("Recall", &self.recall),
            ("F1 Score", &self.f1),
            ("Hamming Loss", &self.hamming_loss),
        ]
    }
}

/// Look up the metrics of `epoch`. When several rows share the epoch the
/// first one wins.
pub fn evaluation_for(table: &Table, epoch: &CellValue) -> Result<EvaluationSummary> {
    let [p, r, f, h] = ["precision", "recall", "f1", "hamming_loss"].map(|c| table.column_index(c));
    let (p, r, f, h) = (p?, r?, f?, h?);

    let row = table
        .rows_where(EPOCH, epoch)?
        .next()
        .ok_or_else(|| DashboardError::NoMatchingRow {
            epoch: epoch.clone(),
        })?;

    Ok(EvaluationSummary {
        epoch: epoch.clone(),
        precision: row.cells[p].clone(),
        recall: row.cells[r].clone(),
        f1: row.cells[f].clone(),
        hamming_loss: row.cells[h].clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Row;

    fn eval_table() -> Table {
        let row = |e: i64, p: f64, r: f64, f: f64, h: f64| Row {
            cells: [CellValue::Integer(e)]
                .into_iter()
                .chain([p, r, f, h].map(CellValue::Float))
                .collect(),
        };
        Table::new(
            ["epoch", "precision", "recall", "f1", "hamming_loss"]
                .map(String::from)
                .to_vec(),
            vec![
                row(1, 0.71234, 0.6, 0.65, 0.21),
                row(2, 0.8, 0.75, 0.774193548, 0.12),
                row(2, 0.1, 0.1, 0.1, 0.9),
            ],
        )
    }

    #[test]
    fn fields_are_verbatim() {
        let s = evaluation_for(&eval_table(), &CellValue::Integer(1)).unwrap();
        let shown: Vec<(&str, String)> = s.fields().iter().map(|(l, v)| (*l, v.to_string())).collect();
        assert_eq!(
            shown,
            vec![
                ("Precision", "0.71234".to_string()),
                ("Recall", "0.6".to_string()),
                ("F1 Score", "0.65".to_string()),
                ("Hamming Loss", "0.21".to_string()),
            ]
        );
    }

    #[test]
    fn duplicate_epoch_takes_first_row() {
        let s = evaluation_for(&eval_table(), &CellValue::Integer(2)).unwrap();
        assert_eq!(s.epoch, CellValue::Integer(2));
        assert_eq!(s.precision, CellValue::Float(0.8));
        assert_eq!(s.f1.to_string(), "0.774193548");
    }

    #[test]
    fn no_row_for_epoch_is_an_inline_error() {
        let err = evaluation_for(&eval_table(), &CellValue::Integer(5)).unwrap_err();
        assert_eq!(err.to_string(), "Tidak ada data untuk epoch 5.");
    }
}
