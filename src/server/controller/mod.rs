//! HTTP request handlers.
//!
//! Controllers extract path, query and body parameters, convert DTOs into domain
//! parameters, call the service layer and convert the results back into DTOs.

pub mod student;

#[cfg(test)]
mod test;
