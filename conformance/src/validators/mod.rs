//! Validators: local style guide checks and the remote OOPS! pitfall scan.

pub mod oops;
pub mod styleguide;
