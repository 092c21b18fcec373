/// Decodes a percent-encoded string (`%XX`) and converts `+` to space.
pub fn url_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hi = (bytes[i + 1] as char).to_digit(16);
                let lo = (bytes[i + 2] as char).to_digit(16);
                match (hi, lo) {
                    (Some(h), Some(l)) => {
                        out.push(((h << 4) | l) as u8);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Parses `key=value&key2=value2` into a `Vec` of `(key, value)` pairs.
pub fn parse_form(body: &str) -> Vec<(String, String)> {
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let mut it = pair.splitn(2, '=');
            let k = it.next()?;
            let v = it.next().unwrap_or("");
            Some((url_decode(k), url_decode(v)))
        })
        .collect()
}

/// Looks up a key in parsed form pairs, returning the value if found.
pub fn form_get<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

/// Parses a comma-separated list of pixel intensities.
///
/// Every value must be a number in [0, 1].
pub fn parse_pixels(raw: &str) -> Result<Vec<f64>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let v: f64 = s.parse().map_err(|_| format!("not a number: {s:?}"))?;
            if (0.0..=1.0).contains(&v) {
                Ok(v)
            } else {
                Err(format!("pixel value {v} outside [0, 1]"))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_percent_and_plus() {
        assert_eq!(url_decode("0%2C1%2C1+x"), "0,1,1 x");
        assert_eq!(url_decode("100%"), "100%");
    }

    #[test]
    fn finds_form_field() {
        let pairs = parse_form("a=1&pixels=0%2C1&b=");
        assert_eq!(form_get(&pairs, "pixels"), Some("0,1"));
        assert_eq!(form_get(&pairs, "b"), Some(""));
        assert_eq!(form_get(&pairs, "missing"), None);
    }

    #[test]
    fn parses_pixel_list() {
        assert_eq!(parse_pixels("0, 1,0.5").unwrap(), vec![0.0, 1.0, 0.5]);
        assert!(parse_pixels("0,2").is_err());
        assert!(parse_pixels("0,x").is_err());
    }
}
