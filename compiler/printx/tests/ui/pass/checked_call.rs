//! A checked call with a derived argument type compiles and runs.

use printx::PrintfArg;

#[derive(PrintfArg, Clone, Copy)]
#[printx(spec = "x")]
#[repr(u32)]
pub enum Mode {
    Exec = 1,
    Read = 4,
}

fn main() {
    let mut buf = [0u8; 64];
    let mut count = 0;
    let written = printx::sprintf!(&mut buf, "%? %s %?%n", Mode::Read, "name", 2.5, &mut count);
    assert_eq!(written, 10);
    assert_eq!(count, written);
    assert_eq!(&buf[..10], b"4 name 2.5");
}
