//! Error: `&mut i64` has no printf conversion.

fn main() {
    let mut count = 0i64;
    printx::printf!("abc%n\n", &mut count);
}
