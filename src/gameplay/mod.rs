mod choice;
mod outcome;
mod round;

pub use choice::*;
pub use outcome::*;
pub use round::*;
