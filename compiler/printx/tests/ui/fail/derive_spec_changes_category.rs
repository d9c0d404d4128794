//! Error: `spec` override must keep the conversion category.

use printx::PrintfArg;

#[derive(PrintfArg)]
#[printx(spec = "s")]
#[repr(i32)]
pub enum Bad {
    A = 1,
}

fn main() {}
