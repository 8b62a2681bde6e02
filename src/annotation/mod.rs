mod parser;
mod wan_ids;

pub use parser::{ParserProfile, extract_wan_ids};
pub use wan_ids::WanIds;
