mod gemini;
mod judge;

pub use gemini::*;
pub use judge::*;
