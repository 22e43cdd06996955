//! Infrastructure implementations of domain repository contracts.

pub mod kv;

pub use kv::{DEPARTMENT_KEY_PREFIX, KvDepartmentRepository};
