use logos::Logos;

/// The kind of a lexical token.
///
/// This enum defines every token the language recognizes. Lexical garbage
/// never aborts tokenization: malformed numbers, unterminated strings, lone
/// `&`/`|`, and unrecognized characters all surface as [`TokenKind::Illegal`]
/// tokens, which the parser later reports as positioned errors.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\v\f\r\n]+")]
pub enum TokenKind {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Int,
    /// Float literal tokens, such as `3.14`. A trailing dot (`1.`) still
    /// lexes as a float; only a second dot makes the lexeme illegal.
    #[regex(r"[0-9]+\.[0-9]*")]
    Float,
    /// String literal tokens. The body is everything between the quotes,
    /// with no escape processing.
    #[regex(r#""[^"]*""#)]
    Str,
    /// Identifier tokens: variable or function names such as `x` or `area`.
    /// `❓` is accepted as an identifier-start code point.
    #[regex(r"\p{L}[\p{L}0-9_]*")]
    #[regex(r"❓[\p{L}0-9_]*")]
    Ident,
    /// `return`
    #[token("return")]
    Return,
    /// `var`, `val`, `define`, `let`
    #[token("var")]
    #[token("val")]
    #[token("define")]
    #[token("let")]
    Var,
    /// `const`
    #[token("const")]
    Const,
    /// `func`, `fun`, `fn`, `funky`, `def`
    #[token("func")]
    #[token("fun")]
    #[token("fn")]
    #[token("funky")]
    #[token("def")]
    Fun,
    /// `if`, `❓`
    #[token("if")]
    #[token("❓", priority = 10)]
    If,
    /// `for`
    #[token("for")]
    For,
    /// `while`, `loop`, `forever`
    #[token("while")]
    #[token("loop")]
    #[token("forever")]
    While,
    /// `and`, `plus`, `&&`
    #[token("and")]
    #[token("plus")]
    #[token("&&")]
    And,
    /// `or`, `perhaps`, `||`
    #[token("or")]
    #[token("perhaps")]
    #[token("||")]
    Or,
    /// `not`, `!`
    #[token("not")]
    #[token("!")]
    Not,
    /// `{`
    #[token("{")]
    OpenCurly,
    /// `}`
    #[token("}")]
    CloseCurly,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `[`
    #[token("[")]
    OpenBracket,
    /// `]`
    #[token("]")]
    CloseBracket,
    /// `+`
    #[token("+")]
    Add,
    /// `-`
    #[token("-")]
    Sub,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `%`
    #[token("%")]
    Mod,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `==`
    #[token("==")]
    De,
    /// `!=`
    #[token("!=")]
    Ne,
    /// `>`
    #[token(">")]
    Gt,
    /// `<`
    #[token("<")]
    Lt,
    /// `>=`
    #[token(">=")]
    Gte,
    /// `<=`
    #[token("<=")]
    Lte,
    /// `=`
    #[token("=")]
    Equals,

    /// Lexemes the language rejects: numbers with more than one dot, a
    /// string left open at end of input, and `&`/`|` outside of `&&`/`||`.
    /// Anything no other pattern matches lands here as well.
    #[regex(r"[0-9]+\.[0-9]*\.[0-9.]*")]
    #[regex(r#""[^"]*"#)]
    #[token("&")]
    #[token("|")]
    Illegal,

    /// End of input. Appended once by [`tokenize`]; never produced by the
    /// generated lexer itself.
    Eof,
}

/// A source location, pointing at a token's first character.
///
/// Lines start at 1. Columns are 1-based and counted in characters, so a
/// token at the start of a line has column 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// The 1-based source line.
    pub line:   usize,
    /// The 1-based source column of the token's first character.
    pub column: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.line, self.column)
    }
}

/// A lexical token: its kind, its lexeme, and where it starts.
///
/// `value` holds the literal lexeme for most kinds. String literals store
/// the body without the surrounding quotes; an unterminated string stores
/// the partial body it managed to read.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token's kind.
    pub kind:  TokenKind,
    /// The token's lexeme.
    pub value: String,
    /// The position of the token's first character.
    pub pos:   Position,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} '{}' at {}", self.kind, self.value, self.pos)
    }
}

/// Walks the source once, translating byte offsets into line/column
/// positions. Token spans arrive in increasing order, so a single forward
/// pass covers the whole token list.
struct Cursor<'src> {
    rest:   std::str::Chars<'src>,
    offset: usize,
    line:   usize,
    column: usize,
}

impl<'src> Cursor<'src> {
    fn new(source: &'src str) -> Self {
        Self { rest:   source.chars(),
               offset: 0,
               line:   1,
               column: 0, }
    }

    fn advance_to(&mut self, target: usize) {
        while self.offset < target {
            let Some(c) = self.rest.next() else { break };
            self.offset += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }

    /// Position of the character starting at `byte_offset`.
    fn position_of(&mut self, byte_offset: usize) -> Position {
        self.advance_to(byte_offset);
        Position { line:   self.line,
                   column: self.column + 1, }
    }

    /// Resting position one past the final character.
    fn end_position(&mut self, source_len: usize) -> Position {
        self.advance_to(source_len);
        Position { line:   self.line,
                   column: self.column, }
    }
}

/// Tokenizes a full source string.
///
/// The returned list always ends with exactly one [`TokenKind::Eof`] token.
/// Tokenization never fails; invalid input becomes [`TokenKind::Illegal`]
/// tokens carrying the offending lexeme.
///
/// # Example
/// ```
/// use a0::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("val x = 1");
/// let kinds: Vec<_> = tokens.iter().map(|token| token.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Var,
///                 TokenKind::Ident,
///                 TokenKind::Equals,
///                 TokenKind::Int,
///                 TokenKind::Eof]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = TokenKind::lexer(source);
    let mut cursor = Cursor::new(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let pos = cursor.position_of(lexer.span().start);
        let kind = result.unwrap_or(TokenKind::Illegal);
        tokens.push(Token { kind,
                            value: token_value(kind, lexer.slice()),
                            pos });
    }

    tokens.push(Token { kind:  TokenKind::Eof,
                        value: String::new(),
                        pos:   cursor.end_position(source.len()), });

    tokens
}

/// Extracts a token's value from its matched slice. String bodies lose
/// their delimiters; an unterminated string keeps its partial body.
fn token_value(kind: TokenKind, slice: &str) -> String {
    match kind {
        TokenKind::Str => slice[1..slice.len() - 1].to_string(),
        TokenKind::Illegal if slice.starts_with('"') => slice[1..].to_string(),
        _ => slice.to_string(),
    }
}
