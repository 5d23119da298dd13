//! Application service layer.
//!
//! Services contain business logic and orchestrate the address book and its
//! repository. They provide a clean boundary between front ends and the
//! data access layer.

mod contact_service;

pub use contact_service::ContactService;
