use crate::error::{DashboardError, Result};

use super::model::{CellValue, Table};

pub const EPOCH: &str = "epoch";
pub const ITERATION: &str = "iteration";
pub const TRAIN_LOSS: &str = "train_loss";
pub const VAL_LOSS: &str = "val_loss";

/// Training and validation loss of one epoch, as `[iteration, loss]` points.
#[derive(Debug, Clone, PartialEq)]
pub struct LossCurves {
    pub epoch: CellValue,
    pub train: Vec<[f64; 2]>,
    pub val: Vec<[f64; 2]>,
}

impl LossCurves {
    /// Chart title.
    pub fn title(&self) -> String {
        format!("Loss pada Epoch {}", self.epoch)
    }
}

/// Collect the loss points of `epoch`.
///
/// Points keep the row order of the file; iterations are not sorted.
/// Rows with a non-numeric iteration or loss are left out of that series.
pub fn loss_curves(table: &Table, epoch: &CellValue) -> Result<LossCurves> {
    let it = table.column_index(ITERATION)?;
    let tr = table.column_index(TRAIN_LOSS)?;
    let va = table.column_index(VAL_LOSS)?;

    let mut train = Vec::new();
    let mut val = Vec::new();
    let mut matched = 0usize;

    for row in table.rows_where(EPOCH, epoch)? {
        matched += 1;
        let Some(x) = row.cells[it].as_f64() else {
            log::warn!("epoch {epoch}: non-numeric iteration {}", row.cells[it]);
            continue;
        };
        if let Some(y) = row.cells[tr].as_f64() {
            train.push([x, y]);
        }
        if let Some(y) = row.cells[va].as_f64() {
            val.push([x, y]);
        }
    }

    if matched == 0 {
        return Err(DashboardError::NoMatchingRow {
            epoch: epoch.clone(),
        });
    }

    Ok(LossCurves {
        epoch: epoch.clone(),
        train,
        val,
    })
}
