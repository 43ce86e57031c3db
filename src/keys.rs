//! Key codes as reported by `KeyboardEvent.keyCode`
//!
//! Use the constants with [`crate::stage::Stage::is_key_down`], or
//! [`key_code`] to look a key up by name.

pub const A: u32 = 65;
pub const B: u32 = 66;
pub const C: u32 = 67;
pub const D: u32 = 68;
pub const E: u32 = 69;
pub const F: u32 = 70;
pub const G: u32 = 71;
pub const H: u32 = 72;
pub const I: u32 = 73;
pub const J: u32 = 74;
pub const K: u32 = 75;
pub const L: u32 = 76;
pub const M: u32 = 77;
pub const N: u32 = 78;
pub const O: u32 = 79;
pub const P: u32 = 80;
pub const Q: u32 = 81;
pub const R: u32 = 82;
pub const S: u32 = 83;
pub const T: u32 = 84;
pub const U: u32 = 85;
pub const V: u32 = 86;
pub const W: u32 = 87;
pub const X: u32 = 88;
pub const Y: u32 = 89;
pub const Z: u32 = 90;

pub const ZERO: u32 = 48;
pub const ONE: u32 = 49;
pub const TWO: u32 = 50;
pub const THREE: u32 = 51;
pub const FOUR: u32 = 52;
pub const FIVE: u32 = 53;
pub const SIX: u32 = 54;
pub const SEVEN: u32 = 55;
pub const EIGHT: u32 = 56;
pub const NINE: u32 = 57;

pub const F1: u32 = 112;
pub const F2: u32 = 113;
pub const F3: u32 = 114;
pub const F4: u32 = 115;
pub const F5: u32 = 116;
pub const F6: u32 = 117;
pub const F7: u32 = 118;
pub const F8: u32 = 119;
pub const F9: u32 = 120;
pub const F10: u32 = 121;
pub const F11: u32 = 122;
pub const F12: u32 = 123;

pub const BACKSPACE: u32 = 8;
pub const TAB: u32 = 9;
pub const ENTER: u32 = 13;
pub const SHIFT: u32 = 16;
pub const CTRL: u32 = 17;
pub const ALT: u32 = 18;
pub const ESCAPE: u32 = 27;
pub const SPACE: u32 = 32;
/// Windows key, or Command on macOS
pub const META: u32 = 91;

pub const LEFT: u32 = 37;
pub const UP: u32 = 38;
pub const RIGHT: u32 = 39;
pub const DOWN: u32 = 40;

pub const SEMICOLON: u32 = 186;
pub const EQUALS: u32 = 187;
pub const COMMA: u32 = 188;
pub const DASH: u32 = 189;
pub const PERIOD: u32 = 190;
pub const SLASH: u32 = 191;
pub const LEFT_BRACKET: u32 = 219;
pub const BACKSLASH: u32 = 220;
pub const RIGHT_BRACKET: u32 = 221;
pub const APOSTROPHE: u32 = 222;

/// Name and alias table, all lowercase
const NAMES: &[(&str, u32)] = &[
    ("a", A),
    ("b", B),
    ("c", C),
    ("d", D),
    ("e", E),
    ("f", F),
    ("g", G),
    ("h", H),
    ("i", I),
    ("j", J),
    ("k", K),
    ("l", L),
    ("m", M),
    ("n", N),
    ("o", O),
    ("p", P),
    ("q", Q),
    ("r", R),
    ("s", S),
    ("t", T),
    ("u", U),
    ("v", V),
    ("w", W),
    ("x", X),
    ("y", Y),
    ("z", Z),
    ("zero", ZERO),
    ("one", ONE),
    ("two", TWO),
    ("three", THREE),
    ("four", FOUR),
    ("five", FIVE),
    ("six", SIX),
    ("seven", SEVEN),
    ("eight", EIGHT),
    ("nine", NINE),
    ("f1", F1),
    ("f2", F2),
    ("f3", F3),
    ("f4", F4),
    ("f5", F5),
    ("f6", F6),
    ("f7", F7),
    ("f8", F8),
    ("f9", F9),
    ("f10", F10),
    ("f11", F11),
    ("f12", F12),
    ("backspace", BACKSPACE),
    ("tab", TAB),
    ("enter", ENTER),
    ("return", ENTER),
    ("shift", SHIFT),
    ("ctrl", CTRL),
    ("control", CTRL),
    ("alt", ALT),
    ("esc", ESCAPE),
    ("escape", ESCAPE),
    ("space", SPACE),
    ("win", META),
    ("cmd", META),
    ("meta", META),
    ("left", LEFT),
    ("leftarrow", LEFT),
    ("up", UP),
    ("uparrow", UP),
    ("right", RIGHT),
    ("rightarrow", RIGHT),
    ("down", DOWN),
    ("downarrow", DOWN),
    ("semicolon", SEMICOLON),
    ("colon", SEMICOLON),
    ("equals", EQUALS),
    ("plus", EQUALS),
    ("comma", COMMA),
    ("lessthan", COMMA),
    ("dash", DASH),
    ("underscore", DASH),
    ("period", PERIOD),
    ("dot", PERIOD),
    ("fullstop", PERIOD),
    ("greaterthan", PERIOD),
    ("morethan", PERIOD),
    ("slash", SLASH),
    ("forwardslash", SLASH),
    ("question", SLASH),
    ("questionmark", SLASH),
    ("leftbracket", LEFT_BRACKET),
    ("ltbracket", LEFT_BRACKET),
    ("leftsquarebracket", LEFT_BRACKET),
    ("backslash", BACKSLASH),
    ("pole", BACKSLASH),
    ("rightbracket", RIGHT_BRACKET),
    ("rtbracket", RIGHT_BRACKET),
    ("rightsquarebracket", RIGHT_BRACKET),
    ("apostrophe", APOSTROPHE),
    ("quote", APOSTROPHE),
    ("speechmark", APOSTROPHE),
];

/// Look up a key code by name, ignoring case
pub fn key_code(name: &str) -> Option<u32> {
    let name = name.trim().to_lowercase();
    NAMES.iter().find(|(n, _)| *n == name).map(|&(_, code)| code)
}

/// First name registered for `code`
pub fn key_name(code: u32) -> Option<&'static str> {
    NAMES.iter().find(|&&(_, c)| c == code).map(|&(n, _)| n)
}
