//! Core logic for the deperiod window code.
//!
//! An `n`-bit input is mapped to an `n + 1`-bit word in which every window
//! of `l` consecutive bits has minimal period at least `p`. Whenever a window
//! is too periodic the encoder drops the part of it implied by the period and
//! reuses the freed bits to record where the collapse happened; the decoder
//! replays the records in reverse. The extra bit terminates the record stack.
//!
//! ```
//! use deperiod::{decode, encode, Config};
//!
//! let cfg = Config::default(); // n = 20, l = 20, p = 14
//! let input = vec![false; 20];
//! let word = encode(&input, &cfg).unwrap();
//! assert_eq!(word.len(), 21);
//! assert_eq!(decode(&word, &cfg).unwrap(), input);
//! ```

pub mod bits;
pub mod config;
pub mod corrector;
pub mod decoder;
pub mod encoder;
mod error;
pub mod io_utils;
pub mod logging;
pub mod period;
pub mod record;
pub mod verify;

pub use bits::{format_bits, from_binary, parse_bits, to_binary};
pub use config::{min_window_len, Config};
pub use decoder::decode;
pub use encoder::{encode, encode_with_stats, EncodeStats, Encoded};
pub use error::DeperiodError;
pub use period::{compute_min_period, compute_periods, compute_z};
pub use record::CorrectionRecord;
