//! Assembly mirror of the blob, for linking it into a binary.

use std::fmt::Write as _;

use typeblob_format::{ASM_BYTES_PER_LINE, END_SYMBOL, START_SYMBOL};

/// Render `bytes` as a preprocessed assembly source placing them in the
/// platform's read-only data section between the start and end symbols.
pub fn render_asm(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 6 + 512);

    out.push_str("#ifdef __APPLE__\n");
    out.push_str("    .section __TEXT,__const\n");
    out.push_str("#elif defined(_WIN32)\n");
    out.push_str("    .section .rdata\n");
    out.push_str("#else\n");
    out.push_str("    .section .rodata\n");
    out.push_str("#endif\n\n");

    let _ = writeln!(out, "    .global {START_SYMBOL}");
    let _ = writeln!(out, "    .global {END_SYMBOL}");
    let _ = writeln!(out, "{START_SYMBOL}:");

    for line in bytes.chunks(ASM_BYTES_PER_LINE) {
        out.push_str("\n    .byte ");
        for (i, byte) in line.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "0x{byte:02x}");
        }
    }

    let _ = writeln!(out, "\n{END_SYMBOL}:");

    out.push_str("\n#ifdef __GNUC__\n");
    out.push_str("\n#ifndef __APPLE__\n");
    out.push_str("    .section .note.GNU-stack,\"\",@progbits\n");
    out.push_str("#endif\n");
    out.push_str("#endif\n");
    out
}
