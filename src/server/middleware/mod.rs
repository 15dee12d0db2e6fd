//! Request authentication and authorization.
//!
//! `claims` extracts and validates the bearer token of a request, while `auth` resolves
//! the token subject to a user and checks the permissions an endpoint requires.

pub mod auth;
pub mod claims;

#[cfg(test)]
mod test;
