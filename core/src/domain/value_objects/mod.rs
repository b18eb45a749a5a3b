//! Value objects returned by the authentication flows.

pub mod token_pair;

pub use token_pair::TokenPair;
