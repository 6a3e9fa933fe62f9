use std::sync::Arc;

use twilight_cache_inmemory::DefaultInMemoryCache;
use twilight_http::Client;

use crate::configs::guard::GuardConfig;
use crate::dbs::MembershipStore;
use crate::services::moderation::Moderation;

mod builder;
pub use builder::ContextBuilder;

pub struct Context {
    pub http: Arc<Client>,
    pub cache: DefaultInMemoryCache,
    pub store: MembershipStore,
    pub moderator: Arc<dyn Moderation>,
    pub config: GuardConfig,
}
