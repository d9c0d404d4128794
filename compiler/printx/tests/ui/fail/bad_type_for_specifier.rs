//! Error: format expects argument of different type.

fn main() {
    printx::printf!("%d\n", 1.5f64);
}
