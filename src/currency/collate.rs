use std::cmp::Ordering;

/// Compares two strings the way a default (root) collation orders them.
///
/// Letters are compared case- and accent-insensitively first, then accents
/// decide, then case with lowercase first, and finally raw code points so the
/// order is total. At the first level whitespace sorts before punctuation and
/// symbols, which sort before digits, which sort before letters.
pub fn compare_locale(a: &str, b: &str) -> Ordering {
    let primary = |s: &str| -> Vec<(u8, char)> {
        s.chars()
            .flat_map(|c| fold_accent(c).to_lowercase())
            .map(|c| (char_class(c), c))
            .collect()
    };
    primary(a)
        .cmp(&primary(b))
        .then_with(|| {
            let secondary = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<String>();
            secondary(a).cmp(&secondary(b))
        })
        .then_with(|| compare_case(a, b))
        .then_with(|| a.cmp(b))
}

fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        1
    }
}

fn compare_case(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) if y.is_uppercase() => return Ordering::Less,
            (false, true) if x.is_uppercase() => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'ç' => 'c',
        'Ç' => 'C',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'O',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        other => other,
    }
}
