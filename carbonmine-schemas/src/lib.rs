pub mod file_formats;
pub mod fuel;
pub mod impact;
pub mod measurement;
pub mod profile;
