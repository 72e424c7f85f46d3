mod aggregate;
mod member;

pub use aggregate::{aggregate, roster, stats, TeamStats};
pub use member::{MemberId, TeamMember};
