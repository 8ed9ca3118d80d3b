//! 网关实现

pub(crate) mod common;
pub mod rest;
