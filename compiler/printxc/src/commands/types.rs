//! The `types` command: list the builtin classifications.

use std::io::Write;

use printx_types::ctype::{BUILTINS, CLASS_RULES};

use super::EXIT_OK;

/// Print every builtin type with its descriptor, then the rule names.
pub fn list_types(stdout: &mut impl Write) -> i32 {
    let _ = writeln!(stdout, "Builtin types:");
    for (name, descriptor) in BUILTINS {
        let _ = writeln!(stdout, "  {name:<20} {descriptor}");
    }
    let _ = writeln!(stdout);
    let _ = writeln!(stdout, "Rules, in priority order:");
    for rule in CLASS_RULES {
        let _ = writeln!(stdout, "  {}", rule.name);
    }
    EXIT_OK
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

    use super::*;

    #[test]
    fn lists_builtins_and_rules() {
        let mut stdout = Vec::new();
        assert_eq!(list_types(&mut stdout), EXIT_OK);
        let text = String::from_utf8(stdout).unwrap();
        assert!(text.starts_with("Builtin types:\n"));
        assert!(text.contains("  unsigned long        %lu\n"));
        assert!(text.contains("  char                 %c [promotes-to-int]\n"));
        assert!(text.contains("  char*                %s [prints-as-pointer]\n"));
        assert!(text.ends_with("  text-accessor\n  character-sequence\n"));
    }
}
