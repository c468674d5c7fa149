// Shared kernel used by every module

pub mod errors; // Shared error types
pub mod utils; // Logging helpers
