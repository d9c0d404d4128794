//! Error: only one of `text` and `chars` may be given.

use std::ffi::CStr;

use printx::PrintfArg;

#[derive(PrintfArg)]
#[printx(text = as_c_str)]
#[printx(chars = as_str)]
pub struct Name(&'static CStr);

impl Name {
    fn as_c_str(&self) -> &CStr {
        self.0
    }

    fn as_str(&self) -> &str {
        ""
    }
}

fn main() {}
