//! Error: format %n expects argument of type int*.

fn main() {
    let count = 0i32;
    printx::printf!("abc%n\n", &count);
}
