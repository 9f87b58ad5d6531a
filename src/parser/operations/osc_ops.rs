//! OSC (Operating System Command) dispatch: window/icon title, palette,
//! hyperlink, clipboard, and notification handlers. Each payload is parsed
//! into a structured [`OscEvent`] and queued for the embedder - this crate
//! never interprets title/clipboard/notification content, only recognizes
//! and structures it, per spec.md §4.F and §9's "explicit Event variant"
//! redesign note.

use crate::core::events::{OscEvent, TerminalEvent};
use crate::parser::perform::AnsiPerformer;

fn field<'a>(params: &[&'a [u8]], idx: usize) -> &'a str {
    params.get(idx).map_or("", |b| std::str::from_utf8(b).unwrap_or(""))
}

fn emit(performer: &mut AnsiPerformer, event: OscEvent) {
    performer.events.push(TerminalEvent::Osc(event));
}

pub fn dispatch_osc(performer: &mut AnsiPerformer, params: &[&[u8]], _bell_terminated: bool) {
    let Some(ps_bytes) = params.first() else { return };
    let Ok(ps) = std::str::from_utf8(ps_bytes) else { return };
    let Ok(ps_num) = ps.parse::<u32>() else {
        tracing::trace!(ps, "ignoring non-numeric OSC selector");
        return;
    };

    match ps_num {
        0 => emit(performer, OscEvent::SetWindowAndIconTitle(field(params, 1).to_string())),
        1 => emit(performer, OscEvent::SetIconName(field(params, 1).to_string())),
        2 => emit(performer, OscEvent::SetWindowTitle(field(params, 1).to_string())),
        4 => dispatch_palette(performer, params),
        7 => emit(performer, OscEvent::SetWorkingDirectory(field(params, 1).to_string())),
        8 => dispatch_hyperlink(performer, params),
        9 => emit(performer, OscEvent::Notify(field(params, 1).to_string())),
        10 | 11 | 12 => dispatch_dynamic_color(performer, params, (ps_num - 10) as u8),
        52 => dispatch_clipboard(performer, params),
        104 => dispatch_reset_palette(performer, params),
        110 => emit(performer, OscEvent::ResetDynamicColor(0)),
        111 => emit(performer, OscEvent::ResetDynamicColor(1)),
        112 => emit(performer, OscEvent::ResetDynamicColor(2)),
        777 => dispatch_urxvt(performer, params),
        1337 => emit(performer, OscEvent::Iterm2(field(params, 1).to_string())),
        _ => tracing::trace!(ps_num, "ignoring unhandled OSC selector"),
    }
}

/// `OSC 4 ; Pc ; spec ; Pc ; spec ; ...` - one or more index/spec pairs in
/// a single sequence.
fn dispatch_palette(performer: &mut AnsiPerformer, params: &[&[u8]]) {
    let mut i = 1;
    while i < params.len() {
        let Ok(index) = field(params, i).parse::<u16>() else { break };
        if index > 255 {
            break;
        }
        let raw = field(params, i + 1);
        let spec = if raw == "?" { None } else { Some(raw.to_string()) };
        emit(performer, OscEvent::PaletteColor { index: index as u8, spec });
        i += 2;
    }
}

/// `OSC 8 ; params ; URI` - `params` carries `id=...` among colon-separated
/// sub-fields; an empty URI ends the current hyperlink span.
fn dispatch_hyperlink(performer: &mut AnsiPerformer, params: &[&[u8]]) {
    let uri = field(params, 2);
    if uri.is_empty() {
        emit(performer, OscEvent::HyperlinkEnd);
        performer.screen().attrs.hyperlink_id = None;
        return;
    }
    let id = field(params, 1)
        .split(':')
        .find_map(|kv| kv.strip_prefix("id="))
        .unwrap_or("")
        .to_string();
    let idx = performer.screen().intern_hyperlink(&id, uri);
    performer.screen().attrs.hyperlink_id = Some(idx);
    emit(performer, OscEvent::HyperlinkBegin { id, uri: uri.to_string() });
}

/// `OSC 10/11/12 ; spec` with the "extended form" of additional specs for
/// the contiguous following indices (`OSC 10;fg;bg;cursor`).
fn dispatch_dynamic_color(performer: &mut AnsiPerformer, params: &[&[u8]], which: u8) {
    for (offset, raw) in params.iter().skip(1).enumerate() {
        let text = std::str::from_utf8(raw).unwrap_or("");
        let spec = if text == "?" { None } else { Some(text.to_string()) };
        emit(performer, OscEvent::DynamicColor { which: which + offset as u8, spec });
    }
}

/// `OSC 52 ; Pc ; Pd` - clipboard selection + base64 payload, or `?` query.
fn dispatch_clipboard(performer: &mut AnsiPerformer, params: &[&[u8]]) {
    let selection = field(params, 1).chars().next().unwrap_or('c');
    let payload = field(params, 2);
    if payload == "?" {
        emit(performer, OscEvent::ClipboardQuery { selection });
    } else {
        emit(performer, OscEvent::ClipboardSet { selection, base64: payload.to_string() });
    }
}

/// `OSC 104` (bare) resets the whole palette; `OSC 104 ; index` resets one
/// entry.
fn dispatch_reset_palette(performer: &mut AnsiPerformer, params: &[&[u8]]) {
    if let Ok(index) = field(params, 1).parse::<u8>() {
        emit(performer, OscEvent::PaletteColor { index, spec: None });
        return;
    }
    emit(performer, OscEvent::ResetPalette);
}

/// `OSC 777 ; notify ; title ; body` (URxvt notify module).
fn dispatch_urxvt(performer: &mut AnsiPerformer, params: &[&[u8]]) {
    if field(params, 1) != "notify" {
        return;
    }
    emit(
        performer,
        OscEvent::UrxvtNotify { title: field(params, 2).to_string(), body: field(params, 3).to_string() },
    );
}
