
/// Generic JSON save functionality
pub mod json_io;
/// Progress bar styling
pub mod progress_bar;
