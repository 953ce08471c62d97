use crate::escape;
use crate::store::Variables;

pub(crate) fn to_bytes(variables: &Variables) -> Vec<u8> {
    let mut lines: Vec<(String, String)> = variables
        .iter()
        .map(|(key, value)| (escape::encode(key.as_bytes()), escape::encode(value)))
        .collect();
    lines.sort_by(|a, b| a.0.cmp(&b.0));

    let mut out = String::new();
    for (key, value) in lines {
        out.push_str(&key);
        out.push('=');
        out.push_str(&value);
        out.push('\n');
    }
    out.into_bytes()
}
