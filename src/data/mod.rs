//! Data layer: core types and loading.
//!
//! ```text
//!  Housing.csv / PopChange.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Table (or NotFound / Empty)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Table    │  header-addressed columns of CellValue
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
