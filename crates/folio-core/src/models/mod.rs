mod enums;
mod structs;
#[cfg(test)]
mod tests;

pub use enums::*;
pub use structs::*;
