//! Declarative classification rules.
//!
//! Rules are evaluated in order; the first rule that returns a descriptor
//! decides. Adding a rule only requires an entry in `CLASS_RULES`.

use printx_ir::{SpecFlags, TypeDescriptor};

use super::spelling::{Base, Declarator, Spelling, TemplateArg};

/// A named classification rule.
#[derive(Clone, Copy, Debug)]
pub struct ClassRule {
    /// Human-readable name for debugging and `printxc types`.
    pub name: &'static str,

    /// Returns the descriptor if the rule applies.
    pub classify: fn(&Spelling) -> Option<TypeDescriptor>,
}

impl ClassRule {
    const fn new(name: &'static str, classify: fn(&Spelling) -> Option<TypeDescriptor>) -> Self {
        ClassRule { name, classify }
    }
}

const PROMOTED: SpecFlags = SpecFlags::PROMOTES_TO_INT;
const INT: TypeDescriptor = TypeDescriptor::new("d", PROMOTED);

/// Builtin types and their descriptors, keyed by canonical spelling.
///
/// Qualified pointees spell differently, so `int const*` is not `int*`.
pub static BUILTINS: &[(&str, TypeDescriptor)] = &[
    ("bool", TypeDescriptor::new("d", PROMOTED)),
    ("char", TypeDescriptor::new("c", PROMOTED)),
    ("signed char", TypeDescriptor::new("hhd", PROMOTED)),
    ("unsigned char", TypeDescriptor::new("hhu", PROMOTED)),
    ("short", TypeDescriptor::new("hd", PROMOTED)),
    ("unsigned short", TypeDescriptor::new("hu", PROMOTED)),
    ("int", INT),
    ("unsigned int", TypeDescriptor::new("u", PROMOTED)),
    ("long", TypeDescriptor::plain("ld")),
    ("unsigned long", TypeDescriptor::plain("lu")),
    ("long long", TypeDescriptor::plain("lld")),
    ("unsigned long long", TypeDescriptor::plain("llu")),
    ("float", TypeDescriptor::plain("g")),
    ("double", TypeDescriptor::plain("g")),
    ("long double", TypeDescriptor::plain("Lg")),
    ("std::nullptr_t", TypeDescriptor::POINTER),
    ("int*", TypeDescriptor::POSITION),
    ("char*", TypeDescriptor::C_STRING),
    ("size_t", TypeDescriptor::plain("zu")),
    ("std::size_t", TypeDescriptor::plain("zu")),
    ("ssize_t", TypeDescriptor::plain("zd")),
    ("ptrdiff_t", TypeDescriptor::plain("td")),
    ("std::ptrdiff_t", TypeDescriptor::plain("td")),
    ("intmax_t", TypeDescriptor::plain("jd")),
    ("std::intmax_t", TypeDescriptor::plain("jd")),
    ("uintmax_t", TypeDescriptor::plain("ju")),
    ("std::uintmax_t", TypeDescriptor::plain("ju")),
];

/// All classification rules, in priority order.
pub static CLASS_RULES: &[ClassRule] = &[
    ClassRule::new("builtin", builtin),
    ClassRule::new("character-array", character_array),
    ClassRule::new("pointer-decay", pointer_decay),
    ClassRule::new("enumeration", enumeration),
    ClassRule::new("text-accessor", text_accessor),
    ClassRule::new("character-sequence", character_sequence),
];

/// Text accessor types, printed through their NUL-terminated buffer.
static TEXT_ACCESSORS: &[&str] = &["std::string", "std::pmr::string", "std::filesystem::path"];

/// Containers of `char`, printed as length plus data.
static CHAR_CONTAINERS: &[&str] = &[
    "std::basic_string_view",
    "std::span",
    "std::vector",
    "std::array",
];

fn builtin(spelling: &Spelling) -> Option<TypeDescriptor> {
    if matches!(spelling.base, Base::Enum { .. }) {
        return None;
    }
    let key = spelling.to_string();
    BUILTINS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|&(_, descriptor)| descriptor)
}

fn character_array(spelling: &Spelling) -> Option<TypeDescriptor> {
    let decays = matches!(
        spelling.declarators.as_slice(),
        [Declarator::Array(_) | Declarator::Pointer]
    );
    let element = Spelling::plain(spelling.base.clone());
    (decays && element.is("char")).then_some(TypeDescriptor::C_STRING)
}

fn pointer_decay(spelling: &Spelling) -> Option<TypeDescriptor> {
    spelling.outermost().map(|_| TypeDescriptor::POINTER)
}

/// Enumerations print as their underlying type, `int` if unspecified.
fn enumeration(spelling: &Spelling) -> Option<TypeDescriptor> {
    match &spelling.base {
        Base::Enum {
            underlying: Some(underlying),
            ..
        } => builtin(underlying),
        Base::Enum {
            underlying: None, ..
        } => Some(INT),
        Base::Named { .. } => None,
    }
}

fn text_accessor(spelling: &Spelling) -> Option<TypeDescriptor> {
    let name = spelling.name();
    let accessor = TEXT_ACCESSORS.contains(&name)
        || (name == "std::basic_string" && first_arg_is_char(spelling));
    (accessor && spelling.declarators.is_empty()).then_some(TypeDescriptor::TEXT)
}

fn character_sequence(spelling: &Spelling) -> Option<TypeDescriptor> {
    let name = spelling.name();
    let sequence = name == "std::string_view"
        || (CHAR_CONTAINERS.contains(&name) && first_arg_is_char(spelling));
    (sequence && spelling.declarators.is_empty()).then_some(TypeDescriptor::CHAR_SEQUENCE)
}

fn first_arg_is_char(spelling: &Spelling) -> bool {
    matches!(spelling.args().first(), Some(TemplateArg::Type(arg)) if arg.is("char"))
}
