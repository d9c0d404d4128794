//! Error: field precision specifier not allowed for type.

fn main() {
    printx::printf!("%.5?\n", "text");
}
