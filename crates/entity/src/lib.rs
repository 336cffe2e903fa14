pub mod admin;
pub mod candidate;
pub mod compliance_record;
pub mod employee;
pub mod interview;
pub mod job;
pub mod leave_request;
pub mod payroll;
pub mod performance_review;
