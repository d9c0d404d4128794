//! Error: PrintfArg derive needs a fieldless enum or an accessor.

use printx::PrintfArg;

#[derive(PrintfArg)]
pub enum Shape {
    Circle(u32),
    Square,
}

fn main() {}
