//! Data layer: table model, loading, and the per-page lookups.
//!
//! Architecture:
//! ```text
//!   data/*.csv
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ loader        │  parse file → Table, memoized per path
//!   └──────────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ Table         │  ordered columns, ordered rows of CellValue
//!   └──────────────┘
//!        │
//!        ├──► filter      free-text search → row indices (first 10 shown)
//!        ├──► loss        epoch → training / validation curves
//!        └──► evaluation  epoch → precision, recall, f1, hamming loss
//! ```

pub mod evaluation;
pub mod filter;
pub mod loader;
pub mod loss;
pub mod model;
