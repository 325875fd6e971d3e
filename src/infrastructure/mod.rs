pub mod models;
pub mod order_repo;
pub mod user_repo;

#[cfg(test)]
pub(crate) mod test_support;

pub use order_repo::DieselOrderRepository;
pub use user_repo::DieselUserRepository;
