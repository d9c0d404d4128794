//! Error: PrintfArg derive needs a fieldless enum or an accessor.

use printx::PrintfArg;

#[derive(PrintfArg)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

fn main() {}
