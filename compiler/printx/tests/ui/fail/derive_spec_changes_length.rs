//! Error: `spec` override must keep the length sub-specifier.

use printx::PrintfArg;

#[derive(PrintfArg)]
#[printx(spec = "lld")]
#[repr(u8)]
pub enum Bad {
    A = 1,
}

fn main() {}
