/* itoa-bench -- Experimental integer-to-decimal conversion strategies
 * and benchmarks for Rust.
 *
 * The author disclaims copyright to this source code.  In place of
 * a legal notice, here is a blessing:
 *
 *    May you do good and not evil.
 *    May you find forgiveness for yourself and forgive others.
 *    May you share freely, never taking more than you give.
 *
 * See LICENSE.txt for the exact and precise legal mumbo-jumbo.
 * This legal notice and blessing is shamelessly adopted from
 * the SQLite library.
 */

mod num;

pub mod error;
pub mod config;
pub mod int2dec;
pub mod verify;
pub mod bench;

pub use error::VerifyError;
pub use num::Magnitude;
