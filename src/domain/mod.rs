// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing what the
// pipeline works with. No process spawning, no CSV parsing,
// no drawing here; those live in ml/ and infra/.
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// Immutable run configuration and device selector
pub mod config;

// The four pipeline actions and menu parsing
pub mod command;

// Validation summary scalars
pub mod metrics;

// Line chart description (title, axes, series)
pub mod chart;

// Error taxonomy shared by all operations
pub mod error;

// Seams to the detection library and the charting library
pub mod traits;
