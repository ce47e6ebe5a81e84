//! The selector subset the slices use: compound selectors (`tag#id.class[attr]`) and
//! comma-separated lists. Combinators are not supported.

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AttrOp {
    Exists,
    Equals(String),
    Prefix(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AttrMatch {
    pub(crate) name: String,
    pub(crate) op: AttrOp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Compound {
    pub(crate) tag: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attrs: Vec<AttrMatch>,
}

/// Parses `a, b, c` into its compounds.
pub(crate) fn parse_list(selector: &str) -> Result<Vec<Compound>, String> {
    split_top_level(selector).into_iter().map(parse_compound).collect()
}

fn split_top_level(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0_u32;
    let mut start = 0;
    for (i, ch) in selector.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&selector[start..i]);
                start = i + 1;
            },
            _ => {},
        }
    }
    parts.push(&selector[start..]);
    parts
}

pub(crate) fn parse_compound(raw: &str) -> Result<Compound, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("empty selector".to_owned());
    }

    let mut out = Compound::default();
    let mut chars = raw.chars().peekable();

    if chars.peek().is_some_and(|c| is_ident(*c) || *c == '*') {
        let tag = take_ident(&mut chars, true);
        if tag != "*" {
            out.tag = Some(tag.to_ascii_lowercase());
        }
    }

    while let Some(ch) = chars.next() {
        match ch {
            '#' => out.id = Some(non_empty(take_ident(&mut chars, false), raw)?),
            '.' => out.classes.push(non_empty(take_ident(&mut chars, false), raw)?),
            '[' => out.attrs.push(parse_attr(&mut chars, raw)?),
            c if c.is_whitespace() => return Err(format!("combinators are not supported: `{raw}`")),
            c => return Err(format!("unexpected `{c}` in `{raw}`")),
        }
    }

    Ok(out)
}

fn parse_attr(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    raw: &str,
) -> Result<AttrMatch, String> {
    let name = non_empty(take_ident(chars, false), raw)?;
    let op = match chars.next() {
        Some(']') => return Ok(AttrMatch { name, op: AttrOp::Exists }),
        Some('=') => AttrOp::Equals(String::new()),
        Some('^') if chars.next() == Some('=') => AttrOp::Prefix(String::new()),
        _ => return Err(format!("malformed attribute selector in `{raw}`")),
    };

    let value = take_value(chars);
    if chars.next() != Some(']') {
        return Err(format!("unterminated attribute selector in `{raw}`"));
    }

    let op = match op {
        AttrOp::Prefix(_) => AttrOp::Prefix(value),
        _ => AttrOp::Equals(value),
    };
    Ok(AttrMatch { name, op })
}

fn take_value(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let quote = chars.peek().copied().filter(|c| *c == '"' || *c == '\'');
    let mut value = String::new();

    if let Some(q) = quote {
        chars.next();
        for ch in chars.by_ref() {
            if ch == q {
                break;
            }
            value.push(ch);
        }
    } else {
        while let Some(ch) = chars.peek().copied() {
            if ch == ']' {
                break;
            }
            value.push(ch);
            chars.next();
        }
    }
    value
}

fn take_ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, allow_star: bool) -> String {
    let mut ident = String::new();
    while let Some(ch) = chars.peek().copied() {
        if is_ident(ch) || (allow_star && ch == '*' && ident.is_empty()) {
            ident.push(ch);
            chars.next();
        } else {
            break;
        }
    }
    ident
}

const fn is_ident(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}

fn non_empty(ident: String, raw: &str) -> Result<String, String> {
    if ident.is_empty() { Err(format!("missing name in `{raw}`")) } else { Ok(ident) }
}
