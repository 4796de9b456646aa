//! Line lexer for descriptor files.
//!
//! A descriptor line is a command word followed by an argument. Logos
//! recognises the command keywords; anything else that is not whitespace is a
//! `Word`. The argument is every word after the command, rejoined with single
//! spaces, so keywords inside an argument (`name struct`) are just text.

use logos::Logos;

/// Tokens of one descriptor line.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    #[token("arch")]
    Arch,

    #[token("base")]
    Base,

    #[token("struct")]
    Struct,

    #[token("union")]
    Union,

    #[token("enum")]
    Enum,

    #[token("field")]
    Field,

    #[token("enumerator")]
    Enumerator,

    #[token("name")]
    Name,

    #[token("alias")]
    Alias,

    #[token("size")]
    Size,

    #[token("type")]
    Type,

    #[token("offset")]
    Offset,

    #[token("pdepth")]
    PointerDepth,

    #[token("arrsize")]
    ArraySize,

    #[token("const")]
    Const,

    #[token("isstruct")]
    IsStruct,

    /// Enumerator name.
    #[token("ek")]
    EnumKey,

    /// Enumerator value.
    #[token("ev")]
    EnumValue,

    /// Any other run of non-whitespace: unknown commands and argument words.
    #[regex(r"[^ \t\r\n\x0B\x0C]+", allow_greedy = true)]
    Word,

    #[regex(r"[ \t\r\n\x0B\x0C]+")]
    Whitespace,
}

/// A lexed descriptor line: command token plus its argument text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'s> {
    pub command: Token,
    /// Raw command text, kept for diagnostics on unknown commands.
    pub word: &'s str,
    pub arg: String,
}

/// Lex one line. Returns `None` for blank lines.
pub fn lex_line(line: &str) -> Option<Line<'_>> {
    let mut lexer = Token::lexer(line);
    let mut command: Option<(Token, &str)> = None;
    let mut words: Vec<&str> = Vec::new();

    while let Some(token) = lexer.next() {
        // Word and Whitespace together cover every character.
        let Ok(token) = token else { continue };
        if token == Token::Whitespace {
            continue;
        }
        let text = lexer.slice();
        if command.is_none() {
            command = Some((token, text));
        } else {
            words.push(text);
        }
    }

    let (command, word) = command?;
    Some(Line {
        command,
        word,
        arg: words.join(" "),
    })
}
