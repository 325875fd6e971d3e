pub mod order_mutation_service;
pub mod order_query_service;
pub mod user_service;

pub use order_mutation_service::OrderMutationService;
pub use order_query_service::OrderQueryService;
pub use user_service::UserService;
