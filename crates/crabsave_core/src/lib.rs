pub mod bytes;
pub mod challenges;
pub mod core_api;
pub mod library;
pub mod offsets;
pub mod scan;
pub mod unlocks;
