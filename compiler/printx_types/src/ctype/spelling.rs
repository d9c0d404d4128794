//! Parsing of C/C++ type spellings.
//!
//! Turns text such as `char const (&)[6]` or `enum class E : unsigned long`
//! into a [`Spelling`]: a canonical base name plus the pointer and array
//! declarators around it. References and top-level qualifiers are dropped
//! since they do not change how a value is passed to printf. Qualifiers on
//! the base type of a pointer or array are kept: `int const*` cannot be
//! written through.

use std::fmt;

/// One pointer or array level around a base type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Declarator {
    Pointer,
    Array(Option<usize>),
}

/// A template argument.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TemplateArg {
    Type(Spelling),
    Value(usize),
}

/// The type a spelling's declarators apply to.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Base {
    /// A builtin (canonical keyword order) or a qualified name.
    Named {
        name: String,
        args: Vec<TemplateArg>,
    },
    /// `enum [class] Name [: underlying]`.
    Enum {
        name: String,
        underlying: Option<Box<Spelling>>,
    },
}

/// `const`/`volatile` on a base type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Qualifiers {
    pub is_const: bool,
    pub is_volatile: bool,
}

impl Qualifiers {
    pub const NONE: Qualifiers = Qualifiers {
        is_const: false,
        is_volatile: false,
    };
}

/// A parsed type spelling.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Spelling {
    pub base: Base,
    /// Qualifiers of the base type; always empty without declarators.
    pub qualifiers: Qualifiers,
    /// Innermost first: `char*[3]` is `[Pointer, Array(Some(3))]`.
    pub declarators: Vec<Declarator>,
}

impl Spelling {
    /// Parse a spelling.
    ///
    /// # Errors
    ///
    /// Returns a short reason if the text is not a type this parser
    /// understands.
    pub fn parse(text: &str) -> Result<Spelling, &'static str> {
        let tokens = tokenize(text)?;
        if tokens.is_empty() {
            return Err("empty type");
        }
        let mut parser = Parser { tokens: &tokens, pos: 0 };
        let spelling = parser.parse_type()?;
        match parser.peek() {
            None => Ok(spelling),
            Some(_) => Err("unexpected trailing tokens"),
        }
    }

    /// Base name without template arguments (`std::span` for
    /// `std::span<char>`, the enum's name for an enumeration).
    pub fn name(&self) -> &str {
        match &self.base {
            Base::Named { name, .. } | Base::Enum { name, .. } => name,
        }
    }

    /// Template arguments of the base type.
    pub fn args(&self) -> &[TemplateArg] {
        match &self.base {
            Base::Named { args, .. } => args,
            Base::Enum { .. } => &[],
        }
    }

    /// The declarator applied last, e.g. the array in `char*[3]`.
    pub fn outermost(&self) -> Option<Declarator> {
        self.declarators.last().copied()
    }

    /// A spelling with no declarators.
    pub fn plain(base: Base) -> Spelling {
        Spelling {
            base,
            qualifiers: Qualifiers::NONE,
            declarators: Vec::new(),
        }
    }

    /// Whether this is the plain type `name` with no arguments or
    /// declarators. Qualifiers are ignored.
    pub fn is(&self, name: &str) -> bool {
        matches!(&self.base, Base::Named { name: n, args } if n == name && args.is_empty())
            && self.declarators.is_empty()
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        let args = self.args();
        if !args.is_empty() {
            f.write_str("<")?;
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                match arg {
                    TemplateArg::Type(spelling) => write!(f, "{spelling}")?,
                    TemplateArg::Value(value) => write!(f, "{value}")?,
                }
            }
            f.write_str(">")?;
        }
        if self.qualifiers.is_const {
            f.write_str(" const")?;
        }
        if self.qualifiers.is_volatile {
            f.write_str(" volatile")?;
        }
        for declarator in &self.declarators {
            match declarator {
                Declarator::Pointer => f.write_str("*")?,
                Declarator::Array(Some(len)) => write!(f, "[{len}]")?,
                Declarator::Array(None) => f.write_str("[]")?,
            }
        }
        Ok(())
    }
}

// Tokens

#[derive(Clone, Eq, PartialEq, Debug)]
enum Token {
    Word(String),
    Number(usize),
    Scope,
    Punct(u8),
}

fn tokenize(text: &str) -> Result<Vec<Token>, &'static str> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;
    while let Some(&byte) = bytes.get(pos) {
        match byte {
            b' ' | b'\t' | b'\n' | b'\r' => pos += 1,
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                let start = pos;
                while bytes
                    .get(pos)
                    .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_')
                {
                    pos += 1;
                }
                tokens.push(Token::Word(text[start..pos].to_string()));
            }
            b'0'..=b'9' => {
                let mut value = 0usize;
                while let Some(digit) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(usize::from(digit - b'0')))
                        .ok_or("array bound overflows")?;
                    pos += 1;
                }
                tokens.push(Token::Number(value));
            }
            b':' if bytes.get(pos + 1) == Some(&b':') => {
                tokens.push(Token::Scope);
                pos += 2;
            }
            b':' | b'*' | b'&' | b'(' | b')' | b'[' | b']' | b'<' | b'>' | b',' => {
                tokens.push(Token::Punct(byte));
                pos += 1;
            }
            _ => return Err("unexpected character"),
        }
    }
    Ok(tokens)
}

// Builtin keyword sets

/// Counts of the keywords that make up a builtin arithmetic type.
#[derive(Default)]
struct Keywords {
    signed: u8,
    unsigned: u8,
    char: u8,
    short: u8,
    int: u8,
    long: u8,
    float: u8,
    double: u8,
    bool: u8,
    void: u8,
}

impl Keywords {
    fn add(&mut self, word: &str) -> bool {
        let slot = match word {
            "signed" => &mut self.signed,
            "unsigned" => &mut self.unsigned,
            "char" => &mut self.char,
            "short" => &mut self.short,
            "int" => &mut self.int,
            "long" => &mut self.long,
            "float" => &mut self.float,
            "double" => &mut self.double,
            "bool" => &mut self.bool,
            "void" => &mut self.void,
            _ => return false,
        };
        *slot = slot.saturating_add(1);
        true
    }

    fn is_empty(&self) -> bool {
        self.canonical_parts() == (0, 0, 0, 0, 0, 0, 0) && self.int == 0 && !self.has_sign()
    }

    fn has_sign(&self) -> bool {
        self.signed > 0 || self.unsigned > 0
    }

    fn canonical_parts(&self) -> (u8, u8, u8, u8, u8, u8, u8) {
        (
            self.char,
            self.short,
            self.long,
            self.float,
            self.double,
            self.bool,
            self.void,
        )
    }

    /// Canonical spelling: `unsigned` is `unsigned int`, `signed short` is
    /// `short`, `long int` is `long`.
    fn canonical(&self) -> Result<&'static str, &'static str> {
        let unsigned = match (self.signed, self.unsigned) {
            (0 | 1, 0) => false,
            (0, 1) => true,
            _ => return Err("conflicting signedness"),
        };
        if self.int > 1 || self.long > 2 {
            return Err("repeated type keyword");
        }
        let plain = !self.has_sign() && self.int == 0;
        let name = match self.canonical_parts() {
            (1, 0, 0, 0, 0, 0, 0) if self.int == 0 => match (self.signed, unsigned) {
                (_, true) => "unsigned char",
                (0, false) => "char",
                _ => "signed char",
            },
            (0, 1, 0, 0, 0, 0, 0) if unsigned => "unsigned short",
            (0, 1, 0, 0, 0, 0, 0) => "short",
            (0, 0, 1, 0, 0, 0, 0) if unsigned => "unsigned long",
            (0, 0, 1, 0, 0, 0, 0) => "long",
            (0, 0, 2, 0, 0, 0, 0) if unsigned => "unsigned long long",
            (0, 0, 2, 0, 0, 0, 0) => "long long",
            (0, 0, 0, 0, 0, 0, 0) if unsigned => "unsigned int",
            (0, 0, 0, 0, 0, 0, 0) => "int",
            (0, 0, 0, 1, 0, 0, 0) if plain => "float",
            (0, 0, 0, 0, 1, 0, 0) if plain => "double",
            (0, 0, 1, 0, 1, 0, 0) if plain => "long double",
            (0, 0, 0, 0, 0, 1, 0) if plain => "bool",
            (0, 0, 0, 0, 0, 0, 1) if plain => "void",
            _ => return Err("invalid combination of type keywords"),
        };
        Ok(name)
    }
}

// Parser

struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eat_punct(&mut self, punct: u8) -> bool {
        if self.peek() == Some(&Token::Punct(punct)) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn eat_word(&mut self, word: &str) -> bool {
        if matches!(self.peek(), Some(Token::Word(w)) if w == word) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect_punct(&mut self, punct: u8, reason: &'static str) -> Result<(), &'static str> {
        if self.eat_punct(punct) {
            Ok(())
        } else {
            Err(reason)
        }
    }

    fn parse_type(&mut self) -> Result<Spelling, &'static str> {
        let mut qualifiers = Qualifiers::NONE;
        let base = self.parse_base(&mut qualifiers)?;
        let mut declarators = Vec::new();
        self.parse_declarators(&mut declarators)?;
        if declarators.is_empty() {
            qualifiers = Qualifiers::NONE;
        }
        Ok(Spelling {
            base,
            qualifiers,
            declarators,
        })
    }

    fn parse_base(&mut self, qualifiers: &mut Qualifiers) -> Result<Base, &'static str> {
        let mut keywords = Keywords::default();
        let mut base = None;
        while let Some(Token::Word(word)) = self.peek() {
            match word.as_str() {
                "const" => {
                    qualifiers.is_const = true;
                    self.bump();
                }
                "volatile" => {
                    qualifiers.is_volatile = true;
                    self.bump();
                }
                "struct" | "class" | "union" | "typename" if base.is_none() => self.bump(),
                "enum" if base.is_none() && keywords.is_empty() => {
                    self.bump();
                    let _ = self.eat_word("class") || self.eat_word("struct");
                    let name = self.qualified_name()?;
                    let underlying = if self.eat_punct(b':') {
                        let mut ignored = Qualifiers::NONE;
                        let underlying = self.parse_base(&mut ignored)?;
                        Some(Box::new(Spelling::plain(underlying)))
                    } else {
                        None
                    };
                    base = Some(Base::Enum { name, underlying });
                }
                _ => {
                    let word = word.clone();
                    if keywords.add(&word) {
                        if base.is_some() {
                            return Err("type keyword after a type name");
                        }
                        self.bump();
                    } else if base.is_none() && keywords.is_empty() {
                        let name = self.qualified_name()?;
                        let args = self.parse_template_args()?;
                        base = Some(Base::Named { name, args });
                    } else {
                        return Err("unexpected word");
                    }
                }
            }
        }
        if self.peek() == Some(&Token::Scope) && base.is_none() && keywords.is_empty() {
            let name = self.qualified_name()?;
            let args = self.parse_template_args()?;
            return Ok(Base::Named { name, args });
        }
        match base {
            Some(base) => Ok(base),
            None if keywords.is_empty() => Err("missing type name"),
            None => Ok(Base::Named {
                name: keywords.canonical()?.to_string(),
                args: Vec::new(),
            }),
        }
    }

    /// `std::filesystem::path`, with a leading `::` dropped.
    fn qualified_name(&mut self) -> Result<String, &'static str> {
        if self.peek() == Some(&Token::Scope) {
            self.bump();
        }
        let mut name = String::new();
        loop {
            match self.peek() {
                Some(Token::Word(word)) => {
                    name.push_str(word);
                    self.bump();
                }
                _ => return Err("expected a name"),
            }
            if self.peek() == Some(&Token::Scope) {
                self.bump();
                name.push_str("::");
            } else {
                return Ok(name);
            }
        }
    }

    fn parse_template_args(&mut self) -> Result<Vec<TemplateArg>, &'static str> {
        let mut args = Vec::new();
        if !self.eat_punct(b'<') {
            return Ok(args);
        }
        if self.eat_punct(b'>') {
            return Ok(args);
        }
        loop {
            if let Some(&Token::Number(value)) = self.peek() {
                self.bump();
                args.push(TemplateArg::Value(value));
            } else {
                args.push(TemplateArg::Type(self.parse_type()?));
            }
            if self.eat_punct(b'>') {
                return Ok(args);
            }
            self.expect_punct(b',', "expected `,` or `>` in template arguments")?;
        }
    }

    /// Pointers and references before any arrays, then arrays, then a
    /// parenthesized group which applies outermost. Qualifiers here apply to
    /// a pointer itself and are dropped.
    fn parse_declarators(&mut self, out: &mut Vec<Declarator>) -> Result<(), &'static str> {
        loop {
            if self.eat_punct(b'*') {
                out.push(Declarator::Pointer);
                continue;
            }
            if !(self.eat_punct(b'&') || self.eat_word("const") || self.eat_word("volatile")) {
                break;
            }
        }
        let mut group = Vec::new();
        if self.eat_punct(b'(') {
            self.parse_declarators(&mut group)?;
            self.expect_punct(b')', "unbalanced `(`")?;
        }
        let mut arrays = Vec::new();
        while self.eat_punct(b'[') {
            let len = match self.peek() {
                Some(&Token::Number(len)) => {
                    self.bump();
                    Some(len)
                }
                _ => None,
            };
            self.expect_punct(b']', "unbalanced `[`")?;
            arrays.push(Declarator::Array(len));
        }
        out.extend(arrays.into_iter().rev());
        out.extend(group);
        Ok(())
    }
}
