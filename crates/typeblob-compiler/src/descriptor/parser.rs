//! Parser for one descriptor file.
//!
//! A file is a flat command stream. `base`/`struct`/`union`/`enum` open a
//! record, `field`/`enumerator` open a member inside it, and every other
//! command sets one attribute of whichever block is open. A record is
//! committed when the next record starts or the file ends, and only if it
//! acquired a name; a member is committed under the same rule when the next
//! member or record starts.
//!
//! ## Recovery
//!
//! Nothing in a descriptor is fatal. Malformed integers become `0`, unknown
//! commands are ignored, attributes with no open block to land on are
//! dropped. The only error is a full string volume, which aborts the run.

use std::str::FromStr;

use tracing::{debug, trace, warn};
use typeblob_core::{ArchWidth, WriteError};
use typeblob_format::{TypeCode, TypeId};

use super::Context;
use super::lexer::{Line, Token, lex_line};
use crate::types::{EnumeratorDescriptor, FieldDescriptor, TypeBody, TypeRecord};

/// Parse one descriptor file, returning its records in declaration order.
///
/// Strings are interned into `ctx` as they are seen, and the first `arch`
/// directive of the run fixes the arch width.
pub fn parse(source: &str, ctx: &mut Context) -> Result<Vec<TypeRecord>, WriteError> {
    let mut parser = Parser::new(ctx);
    for line in source.lines() {
        if let Some(line) = lex_line(line) {
            parser.command(line)?;
        }
    }
    Ok(parser.finish())
}

/// Integer argument with the descriptor fallback policy: anything that does
/// not parse (including out-of-range and negative-for-unsigned) is `0`.
fn parse_int<T: FromStr + Default>(arg: &str) -> T {
    arg.parse().unwrap_or_default()
}

fn parse_flag(arg: &str) -> bool {
    arg == "true"
}

struct RecordDraft {
    name: Option<String>,
    size: i64,
    aliases: Vec<String>,
    body: TypeBody,
}

/// Member attributes collected before we know which kind of member they
/// become; the owning record decides.
#[derive(Default)]
struct MemberDraft {
    name: Option<String>,
    type_name: String,
    offset: i64,
    pointer_depth: u32,
    array_size: i64,
    is_const: bool,
    is_struct_like: bool,
    value: i64,
}

impl RecordDraft {
    fn new(code: TypeCode) -> Self {
        Self {
            name: None,
            size: 0,
            aliases: Vec::new(),
            body: TypeBody::empty(code),
        }
    }

    fn push_member(&mut self, name: String, m: MemberDraft) {
        match &mut self.body {
            TypeBody::Base => {
                trace!(member = %name, "dropping member of base type");
            }
            TypeBody::Struct { fields } | TypeBody::Union { fields } => {
                fields.push(FieldDescriptor {
                    name,
                    type_name: m.type_name,
                    offset: m.offset,
                    pointer_depth: m.pointer_depth,
                    array_size: m.array_size,
                    is_const: m.is_const,
                    is_struct_like: m.is_struct_like,
                });
            }
            TypeBody::Enum { enumerators } => {
                enumerators.push(EnumeratorDescriptor {
                    name,
                    value: m.value,
                });
            }
        }
    }
}

struct Parser<'c> {
    ctx: &'c mut Context,
    records: Vec<TypeRecord>,
    record: Option<RecordDraft>,
    member: Option<MemberDraft>,
}

impl<'c> Parser<'c> {
    fn new(ctx: &'c mut Context) -> Self {
        Self {
            ctx,
            records: Vec::new(),
            record: None,
            member: None,
        }
    }

    fn command(&mut self, line: Line<'_>) -> Result<(), WriteError> {
        let arg = line.arg;
        match line.command {
            Token::Arch => self.arch(&arg),

            Token::Base => self.start_record(TypeCode::Base),
            Token::Struct => self.start_record(TypeCode::Struct),
            Token::Union => self.start_record(TypeCode::Union),
            Token::Enum => self.start_record(TypeCode::Enum),

            Token::Field | Token::Enumerator => {
                self.flush_member();
                self.member = Some(MemberDraft::default());
            }

            Token::Name => {
                self.ctx.intern(&arg)?;
                if let Some(member) = &mut self.member {
                    member.name = Some(arg);
                } else if let Some(record) = &mut self.record {
                    record.name = Some(arg);
                }
            }
            Token::Alias => {
                self.ctx.intern(&arg)?;
                if let Some(record) = &mut self.record
                    && !matches!(record.body, TypeBody::Base)
                {
                    record.aliases.push(arg);
                }
            }
            Token::Size => {
                if let Some(record) = &mut self.record {
                    record.size = parse_int(&arg);
                }
            }

            Token::Type => {
                self.ctx.intern(&arg)?;
                if let Some(member) = &mut self.member {
                    member.type_name = arg;
                }
            }
            Token::EnumKey => {
                self.ctx.intern(&arg)?;
                if let Some(member) = &mut self.member {
                    member.name = Some(arg);
                }
            }
            Token::Offset => self.with_member(|m| m.offset = parse_int(&arg)),
            Token::PointerDepth => self.with_member(|m| m.pointer_depth = parse_int(&arg)),
            Token::ArraySize => self.with_member(|m| m.array_size = parse_int(&arg)),
            Token::Const => self.with_member(|m| m.is_const = parse_flag(&arg)),
            Token::IsStruct => self.with_member(|m| m.is_struct_like = parse_flag(&arg)),
            Token::EnumValue => self.with_member(|m| m.value = parse_int(&arg)),

            Token::Word | Token::Whitespace => {
                trace!(command = line.word, "ignoring unknown descriptor command");
            }
        }
        Ok(())
    }

    fn with_member(&mut self, f: impl FnOnce(&mut MemberDraft)) {
        if let Some(member) = &mut self.member {
            f(member);
        }
    }

    fn arch(&mut self, arg: &str) {
        let Some(width) = ArchWidth::from_bytes(parse_int(arg)) else {
            warn!(value = arg, "ignoring arch directive: width must be 4 or 8");
            return;
        };
        if !self.ctx.set_arch(width) && self.ctx.arch() != Some(width) {
            debug!(
                requested = width.bytes(),
                kept = ?self.ctx.arch(),
                "arch width already fixed; ignoring later directive"
            );
        }
    }

    fn start_record(&mut self, code: TypeCode) {
        self.flush_record();
        self.record = Some(RecordDraft::new(code));
    }

    fn flush_member(&mut self) {
        let Some(mut member) = self.member.take() else {
            return;
        };
        let Some(name) = member.name.take() else {
            return;
        };
        if let Some(record) = &mut self.record {
            record.push_member(name, member);
        }
    }

    fn flush_record(&mut self) {
        self.flush_member();
        let Some(record) = self.record.take() else {
            return;
        };
        let Some(name) = record.name else {
            trace!("dropping unnamed record");
            return;
        };
        self.records.push(TypeRecord {
            name,
            id: TypeId::UNRESOLVED,
            size: record.size,
            aliases: record.aliases,
            body: record.body,
        });
    }

    fn finish(mut self) -> Vec<TypeRecord> {
        self.flush_record();
        self.records
    }
}
