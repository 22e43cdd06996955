//! UseCase layer.
//!
//! Presentation-facing operations. The mobile screens call these and
//! re-render from their results; every screen refresh goes back through
//! [`ListDepartmentsUseCase`] rather than patching in-memory state, so the
//! UI list stays a disposable projection of the store.

pub mod create_department;
pub mod delete_department;
pub mod list_departments;
pub mod rename_department;

pub use create_department::CreateDepartmentUseCase;
pub use delete_department::DeleteDepartmentUseCase;
pub use list_departments::ListDepartmentsUseCase;
pub use rename_department::RenameDepartmentUseCase;
