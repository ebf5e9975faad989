//! A runtime-helper-style example: a division helper that aborts on a
//! divisor of zero instead of producing a bogus result.
//!
//! Run it with two numbers, for example `cargo run 84 2`. Passing a zero
//! divisor terminates the process through the fatal trap.

/// The kind of helper a compiled binary links against: for out-of-range
/// input there is no representable result, so there is no code path past
/// the abort.
fn div_helper(n: u64, d: u64) -> u64 {
    if d == 0 {
        fatal_trap::program::abort();
    }
    n / d
}

fn main() {
    let mut args = std::env::args().skip(1);
    let n = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(84);
    let d = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(2);
    println!("{}", div_helper(n, d));
}
