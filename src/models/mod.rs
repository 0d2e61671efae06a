pub mod listing;
pub mod price;
pub mod sale;

pub use listing::*;
pub use price::*;
pub use sale::*;
