pub mod allow_list_entry;
pub mod game_record;
pub mod search_response;

pub use allow_list_entry::AllowListEntry;
pub use game_record::{GameFields, GameRecord};
pub use search_response::{GameMatch, SearchResponse, ValidationResponse};
