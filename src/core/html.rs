// src/core/html.rs
//
// Hand-rolled, case-insensitive HTML scanning. The wiki table markup is
// machine-generated and regular enough that local slicing within known
// blocks holds up fine without a DOM parser.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Next `<o ...> ... </c>` block at or after `from`, over a pre-lowered
/// document (`lc = to_lower(doc)`, lowercase patterns). Returns the byte
/// range of the whole block, closing tag included; offsets are valid in
/// the original too, since `to_lower` maps ASCII only and preserves
/// byte lengths. Callers scanning many blocks of a large document
/// lowercase it once instead of per call.
pub fn next_tag_block_lc(lc: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let start = lc.get(from..)?.find(o)? + from;
    let open_end = lc[start..].find('>')? + start + 1;
    let end = lc[open_end..].find(c)? + open_end + c.len();
    Some((start, end))
}

/// Opening tag of a block: everything up to and including the first '>'.
pub fn tag_opener(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Attribute value from a tag opener; quoted or bare values, attribute
/// name matched case-insensitively. `name="v"`, `name='v'` and `name=v`
/// all work; whitespace around '=' does not (the wiki never emits it).
pub fn attr_ci(opener: &str, name: &str) -> Option<String> {
    attr_span_ci(opener, name).map(|(s, e)| opener[s..e].to_string())
}

/// Byte range of the attribute's value within the opener, quotes
/// excluded. For callers that need to splice around the value.
pub fn attr_span_ci(opener: &str, name: &str) -> Option<(usize, usize)> {
    let lc = to_lower(opener);
    let pat = format!("{}=", to_lower(name));

    let mut from = 0usize;
    let at = loop {
        let rel = lc.get(from..)?.find(&pat)?;
        let at = from + rel;
        // Must start an attribute name, not end a longer one.
        let starts_name = at == 0
            || matches!(lc.as_bytes()[at - 1], b' ' | b'\t' | b'\r' | b'\n');
        if starts_name {
            break at;
        }
        from = at + pat.len();
    };

    let val = &opener[at + pat.len()..];
    let (quote, skip) = match val.as_bytes().first() {
        Some(b'"') => ('"', 1),
        Some(b'\'') => ('\'', 1),
        _ => ('\0', 0),
    };
    let start = at + pat.len() + skip;
    let val = &opener[start..];
    let end = if quote != '\0' {
        val.find(quote)?
    } else {
        val.find(|c: char| c.is_ascii_whitespace() || c == '>')
            .unwrap_or(val.len())
    };
    Some((start, start + end))
}

/// Whole-token membership in the opener's class list.
pub fn has_class(opener: &str, class: &str) -> bool {
    match attr_ci(opener, "class") {
        Some(list) => list
            .split_ascii_whitespace()
            .any(|c| c.eq_ignore_ascii_case(class)),
        None => false,
    }
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}
