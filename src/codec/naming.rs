//! Naming-convention translator.
//!
//! Internal field identifiers are word-separated lower case. The wire
//! format mixes three conventions:
//!
//! - camelCase for structural-record keys (`net_devices` -> `netDevices`);
//! - PascalCase for model-record attribute names and for the node-local
//!   physical-layer override (`data_mode` -> `DataMode`);
//! - a short list of literal exceptions that bypass both rules and must be
//!   checked first in both directions.

/// Attribute names whose reverse translation must not go through the
/// algorithm: acronym/number runs it would misparse. Checked before
/// [`pascal_to_snake`] on decode.
const ATTRIBUTE_NAME_OVERRIDES: &[(&str, &str)] = &[
    ("RoITrigger", "ro_i_trigger"),
    (
        "LiIonEnergySourceInitialEnergyJ",
        "li_ion_energy_source_initial_energy_j",
    ),
];

/// Uppercase the first character of `word`, then append the rest verbatim.
fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.push_str(chars.as_str());
    }
}

/// `net_devices` -> `netDevices`. Default rule for structural records.
///
/// The structural codecs spell their keys as literals; this function states
/// the rule those literals follow, and the tests hold them to it.
pub fn to_camel_case(snake: &str) -> String {
    let mut words = snake.split('_');
    let mut out = String::with_capacity(snake.len());
    if let Some(first) = words.next() {
        out.push_str(first);
    }
    for word in words {
        push_capitalized(&mut out, word);
    }
    out
}

/// `data_mode` -> `DataMode`. Rule for model-record attribute names and
/// for the PascalCase-styled override record.
pub fn snake_to_pascal(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    for word in snake.split('_') {
        push_capitalized(&mut out, word);
    }
    out
}

/// `RxGain` -> `rx_gain`. Reverse rule for model-record attribute names.
///
/// Inserts a separator before an uppercase letter that follows a
/// lowercase/digit, or before the start of a capitalized word run, then
/// lowercases everything. Callers must consult the literal override table
/// first; use [`attribute_field_name`] for the combined lookup.
pub fn pascal_to_snake(pascal: &str) -> String {
    let chars: Vec<char> = pascal.chars().collect();
    let mut out = String::with_capacity(pascal.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let after_lower = chars[i - 1].is_ascii_lowercase() || chars[i - 1].is_ascii_digit();
            let starts_word = chars
                .get(i + 1)
                .is_some_and(|next| next.is_ascii_lowercase());
            if (after_lower || starts_word) && !out.ends_with('_') {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// Translate a wire attribute name into an internal field identifier,
/// applying the literal overrides before the algorithmic rule.
pub fn attribute_field_name(wire_name: &str) -> String {
    for (wire, internal) in ATTRIBUTE_NAME_OVERRIDES {
        if *wire == wire_name {
            return (*internal).to_string();
        }
    }
    pascal_to_snake(wire_name)
}
