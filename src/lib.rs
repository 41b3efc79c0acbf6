//! # Konto
//!
//! `konto` is a minimal user registration and authentication API backed by
//! PostgreSQL.
//!
//! ## Accounts
//!
//! Every user is a row in the `users` table: a UUID assigned at signup, a
//! display name, an email (unique across all accounts, used as the login
//! key) and a bcrypt password hash. Accounts are created once and never
//! mutated by this service.
//!
//! ## Passwords
//!
//! Plaintext passwords never reach the database. Signup hashes them with
//! bcrypt (fresh random salt per call); login verifies against the stored
//! hash. Two users with the same password end up with different hashes.

pub mod cli;
pub mod konto;
