pub mod store;

pub use store::{MemberKey, Members, MembershipRecord, MembershipStore};
