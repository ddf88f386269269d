//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Dashboard pages differ only in which resource panels they
//! show and what those panels permit.

pub mod academic_admin;
pub mod dashboard;
pub mod gbos_admin;
pub mod login;
pub mod student;
pub mod supervisor;
pub mod system_admin;
