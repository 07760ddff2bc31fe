// SPDX-License-Identifier: MPL-2.0
//! Domain layer: plain data types and pure logic, no I/O.

pub mod market;
pub mod nft;

pub use nft::{Creator, Listing, Nft, SessionUser};
