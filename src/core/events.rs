//! Events the Terminal Facade emits back to an embedder.
//!
//! spec.md §9 redesigns the original's duck-typed callback objects (pubsub,
//! `onPaste`, `onCopy`, `onResize`) into explicit variants returned from
//! `feed`, rather than a registered-handler mechanism - there is no
//! reflection-style subscription here, callers just inspect the `Vec`
//! `feed` hands back.

/// A parsed OSC (Operating System Command) sequence, delivered to the
/// embedder as-is; this crate never interprets title/clipboard/notification
/// content, only recognizes and structures it (spec.md §4.F).
#[derive(Debug, Clone, PartialEq)]
pub enum OscEvent {
    SetWindowTitle(String),
    SetIconName(String),
    SetWindowAndIconTitle(String),
    SetWorkingDirectory(String),
    /// OSC 4: palette query/set. `None` spec means a query (`?`); `Some`
    /// carries the raw color spec string (`rgb:RRRR/GGGG/BBBB` or any CSS
    /// color), left unparsed for the renderer.
    PaletteColor { index: u8, spec: Option<String> },
    /// OSC 8 hyperlink span begin: `id` may be empty.
    HyperlinkBegin { id: String, uri: String },
    HyperlinkEnd,
    Notify(String),
    /// OSC 10/11/12 with an index distinguishing which (0=fg,1=bg,2=cursor);
    /// `None` spec means a query.
    DynamicColor { which: u8, spec: Option<String> },
    ClipboardSet { selection: char, base64: String },
    ClipboardQuery { selection: char },
    ResetPalette,
    ResetDynamicColor(u8),
    UrxvtNotify { title: String, body: String },
    Iterm2(String),
}

/// An explicit event variant emitted by the facade, replacing the source's
/// duck-typed `onResize`/`onPaste`/`onCopy`/`onFocus` callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum TerminalEvent {
    Resize(usize, usize),
    Paste(Vec<u8>),
    CopyRequested,
    FocusChanged(bool),
    Osc(OscEvent),
}

/// DSR (Device Status Report) request kinds, `CSI n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DsrRequestType {
    RequestStatus,
    RequestCursorPosition,
    Other(u16),
}

impl From<&vte::Params> for DsrRequestType {
    fn from(params: &vte::Params) -> Self {
        let n = params.iter().next().and_then(|s| s.first().copied()).unwrap_or(0);
        match n {
            5 => DsrRequestType::RequestStatus,
            6 => DsrRequestType::RequestCursorPosition,
            other => DsrRequestType::Other(other),
        }
    }
}
