/// 头像的首字母与背景色
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub initials: String,
    pub color: String,
}

const FALLBACK_INITIALS: &str = "?";
const FALLBACK_COLOR: &str = "#ccc";

/// 由显示名确定性地生成头像
///
/// 首字母取按单个空格切分后前两段的首字符；色相为各字符编码之和对 360 取模。
pub fn generate_avatar(name: &str) -> Avatar {
    if name.is_empty() {
        return Avatar {
            initials: FALLBACK_INITIALS.to_string(),
            color: FALLBACK_COLOR.to_string(),
        };
    }

    let initials: String = name
        .split(' ')
        .take(2)
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    let hash: u64 = name
        .chars()
        .map(|c| {
            let mut units = [0u16; 2];
            u64::from(c.encode_utf16(&mut units)[0])
        })
        .sum();
    let hue = hash % 360;

    Avatar {
        initials,
        color: format!("hsl({}, 70%, 50%)", hue),
    }
}
