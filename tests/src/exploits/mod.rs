//! # Exploit Simulations
//!
//! Attack scenarios drawn from real bridge and settlement incidents:
//! replayed release authorizations, unauthorized role use, and value
//! creation out of thin air. Every test here must FAIL the attack.

pub mod value_conservation;
