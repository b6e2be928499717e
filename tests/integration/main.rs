//! End-to-end tests over complete addon exports.
//!
//! - Hierophant fixture (a real export layout with comment header)
//! - Directive-only export from the profile format description
//! - Concurrent parsing of independent exports

mod hierophant;
