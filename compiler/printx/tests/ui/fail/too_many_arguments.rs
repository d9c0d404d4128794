//! Error: too many arguments for format.

fn main() {
    printx::printf!("%d\n", 1, 2);
}
