pub mod query;
pub mod supabase;

pub use query::{Direction, Nulls, Query};
pub use supabase::SupabaseClient;
