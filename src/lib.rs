//! # Rangelens
//!
//! Read-only math engine for inspecting concentrated liquidity positions
//! in Uniswap v3-style pools.
//!
//! This crate takes the packed square-root price a pool stores on chain
//! and a position's tick range and liquidity, and answers three
//! questions:
//!
//! - **What is the price?** [`compute_prices`](math::compute_prices)
//!   unpacks the price and quotes it in both directions, adjusted for
//!   token decimals.
//! - **Where is the price on the tick grid?**
//!   [`tick_from_packed_price`](math::tick_from_packed_price) inverts the
//!   `1.0001^tick` relationship.
//! - **What does a position hold?**
//!   [`compute_amounts`](math::compute_amounts) splits a position's
//!   liquidity into token balances relative to its range.
//!
//! Everything is a pure function over validated value types; the crate
//! performs no I/O and keeps no state between calls.
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rangelens = "0.1"
//! ```
//!
//! ## Inspect a position
//!
//! ```rust
//! use rangelens::domain::{
//!     Decimals, Liquidity, PackedPrice, PositionSnapshot, Tick, TokenMeta,
//! };
//! use rangelens::math::{compute_amounts, compute_prices, tick_from_packed_price};
//!
//! // 1. Token metadata (a 6-decimal stable against an 18-decimal asset)
//! let usdc = TokenMeta::new(Decimals::new(6).expect("valid decimals"));
//! let weth = TokenMeta::new(Decimals::new(18).expect("valid decimals"));
//!
//! // 2. The pool's packed square-root price, as read from chain
//! let packed: PackedPrice = "79228162514264337593543950336".parse().expect("valid price");
//!
//! // 3. A position over the range [-600, 600)
//! let position = PositionSnapshot::new(
//!     Tick::new(-600).expect("valid tick"),
//!     Tick::new(600).expect("valid tick"),
//!     Liquidity::new(1_000_000_000),
//!     usdc,
//!     weth,
//! )
//! .expect("valid position");
//!
//! // 4. Ask the three questions
//! let prices = compute_prices(&packed, usdc.decimals(), weth.decimals()).expect("prices");
//! let tick = tick_from_packed_price(&packed).expect("tick");
//! let amounts = compute_amounts(&position, &packed).expect("amounts");
//!
//! assert_eq!(tick.get(), 0);
//! assert!(position.is_in_range(tick));
//! assert!(amounts.amount0() > 0.0 && amounts.amount1() > 0.0);
//! assert!(prices.price_of_token0() > 0.0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Consumer   │  builds snapshots from chain reads
//! └──────┬──────┘
//!        │ PackedPrice, PoolSnapshot, PositionSnapshot
//!        ▼
//! ┌─────────────┐
//! │    Math      │  compute_prices, tick_from_packed_price, compute_amounts
//! └──────┬──────┘
//!        │ validated value types
//!        ▼
//! ┌─────────────┐
//! │   Domain     │  PackedPrice, Tick, Decimals, Liquidity, …
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`PackedPrice`](domain::PackedPrice), [`Tick`](domain::Tick), [`PositionSnapshot`](domain::PositionSnapshot), etc. |
//! | [`math`]   | Price conversion, tick math, position amounts |
//! | [`error`]  | [`LensError`](error::LensError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and functions |

pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
