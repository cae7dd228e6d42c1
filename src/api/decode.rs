//! Text decoding for trivia API payloads.
//!
//! Questions are requested with `encode=url3986`, so every string arrives
//! percent-encoded. Some questions also carry HTML entities inside the
//! encoded text, which are resolved after the percent decoding.

/// Longest entity name we try to resolve, `#x1F600` included.
const MAX_ENTITY_LEN: usize = 8;

/// Decode percent-encoding, then HTML entities. Never fails: invalid UTF-8 is
/// replaced and unknown entities are kept as written.
pub fn decode_text(raw: &str) -> String {
    let bytes = urlencoding::decode_binary(raw.as_bytes());
    decode_entities(&String::from_utf8_lossy(&bytes))
}

pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp + 1..];

        let resolved = tail
            .find(';')
            .filter(|&end| end > 0 && end <= MAX_ENTITY_LEN)
            .and_then(|end| entity(&tail[..end]).map(|ch| (ch, end + 1)));

        match resolved {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

fn entity(name: &str) -> Option<char> {
    if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix('x').or_else(|| number.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse().ok()?,
        };
        return char::from_u32(code);
    }

    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201c}',
        "rdquo" => '\u{201d}',
        "hellip" => '\u{2026}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "deg" => '\u{b0}',
        "eacute" => '\u{e9}',
        "uuml" => '\u{fc}',
        "ouml" => '\u{f6}',
        _ => return None,
    };
    Some(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_rfc3986_text() {
        assert_eq!(
            decode_text("Entertainment%3A%20Video%20Games"),
            "Entertainment: Video Games"
        );
        assert_eq!(decode_text("Who%20wrote%20%22Hamlet%22%3F"), "Who wrote \"Hamlet\"?");
    }

    #[test]
    fn decodes_named_and_numeric_entities() {
        assert_eq!(decode_entities("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(decode_entities("&quot;Hi&quot; &#039;there&#39;"), "\"Hi\" 'there'");
        assert_eq!(decode_entities("Pok&eacute;mon &#x2013; Red"), "Pokémon – Red");
    }

    #[test]
    fn decodes_entities_hidden_behind_percent_encoding() {
        assert_eq!(decode_text("Tom%20%26amp%3B%20Jerry"), "Tom & Jerry");
    }

    #[test]
    fn keeps_unknown_or_unterminated_entities() {
        assert_eq!(decode_entities("AT&T"), "AT&T");
        assert_eq!(decode_entities("a && b; c"), "a && b; c");
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
        assert_eq!(decode_entities("trailing &"), "trailing &");
    }

    #[test]
    fn invalid_utf8_does_not_panic() {
        assert_eq!(decode_text("ok%FF"), "ok\u{fffd}");
    }
}
