pub mod generation;
pub mod lookup;
pub mod normalize;
pub mod test_utils;

pub use generation::{FetchGeneration, FetchTicket};
pub use lookup::LookupTable;
pub use normalize::{keys_match, names_match, normalize_name};
