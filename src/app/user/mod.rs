//! 用户记录服务：创建、读取、更新、删除

pub mod handler;
pub mod memory;
pub mod model;
pub mod repository;

pub use handler::{routes, AppState};
pub use memory::MemoryUserRepository;
pub use model::{User, UserPayload};
pub use repository::{PgUserRepository, UserRepository};
