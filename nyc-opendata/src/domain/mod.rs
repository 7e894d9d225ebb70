mod listing;

pub use listing::*;
