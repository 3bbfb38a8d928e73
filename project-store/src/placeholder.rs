//! Inline SVG placeholder art, as `data:` URLs.

const SVG_DATA_PREFIX: &str = "data:image/svg+xml;utf8,";

pub const LOGO_GRADIENT: (&str, &str) = ("#34d399", "#06b6d4");
const BANNER_GRADIENT: (&str, &str) = ("#0ea5e9", "#10b981");

/// 128x128 rounded tile with `text` centered on a diagonal gradient.
pub fn svg_logo(text: &str, from: &str, to: &str) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='128' height='128'>\
         <defs><linearGradient id='g' x1='0' y1='0' x2='1' y2='1'>\
         <stop offset='0%' stop-color='{from}'/><stop offset='100%' stop-color='{to}'/>\
         </linearGradient></defs>\
         <rect width='100%' height='100%' rx='24' fill='url(#g)'/>\
         <text x='50%' y='55%' dominant-baseline='middle' text-anchor='middle' \
         font-family='Inter,Arial' font-size='56' fill='white' font-weight='700'>{text}</text>\
         </svg>",
        text = escape_xml(text),
    );
    data_url(&svg)
}

/// 1200x480 banner with `title` centered.
pub fn svg_banner(title: &str) -> String {
    let (from, to) = BANNER_GRADIENT;
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='1200' height='480'>\
         <defs><linearGradient id='g' x1='0' y1='0' x2='1' y2='1'>\
         <stop offset='0%' stop-color='{from}'/><stop offset='100%' stop-color='{to}'/>\
         </linearGradient></defs>\
         <rect width='100%' height='100%' fill='url(#g)'/>\
         <text x='50%' y='55%' dominant-baseline='middle' text-anchor='middle' \
         font-family='Inter,Arial' font-size='64' fill='white' font-weight='800'>{title}</text>\
         </svg>",
        title = escape_xml(title),
    );
    data_url(&svg)
}

/// First letter of up to the first two words, uppercased.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .take(2)
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

fn data_url(svg: &str) -> String {
    format!("{SVG_DATA_PREFIX}{}", urlencoding::encode(svg))
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("MasterPass"), "M");
        assert_eq!(initials("AlgoArt Guild"), "AG");
        assert_eq!(initials("open ledger tools"), "OL");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn logo_is_percent_encoded_svg() {
        let url = svg_logo("AG", LOGO_GRADIENT.0, LOGO_GRADIENT.1);
        assert!(url.starts_with("data:image/svg+xml;utf8,%3Csvg"));
        assert!(!url[SVG_DATA_PREFIX.len()..].contains(' '));

        let decoded = urlencoding::decode(&url[SVG_DATA_PREFIX.len()..]).expect("utf8");
        assert!(decoded.contains(">AG</text>"));
        assert!(decoded.contains("stop-color='#34d399'"));
    }

    #[test]
    fn banner_escapes_markup_in_title() {
        let url = svg_banner("R&D <Lab>");
        let decoded = urlencoding::decode(&url[SVG_DATA_PREFIX.len()..]).expect("utf8");
        assert!(decoded.contains(">R&amp;D &lt;Lab&gt;</text>"));
        assert!(decoded.contains("width='1200'"));
    }
}
