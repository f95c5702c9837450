//! 核心层：错误处理与响应映射

pub mod error;
pub mod response;
