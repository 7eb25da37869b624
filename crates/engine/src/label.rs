/// 生成显示用标签：非 ASCII 字母数字替换为空格，再按单词首字母大写。
///
/// 紧跟在字母之后的字母小写，其余字母大写，因此 `"my_file-2.md"` 得到
/// `"My File 2 Md"`，`"v2beta"` 得到 `"V2Beta"`。
pub fn format_label(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_letter = false;
    for c in name.chars() {
        if c.is_ascii_alphabetic() {
            out.push(if prev_letter {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            });
            prev_letter = true;
        } else {
            out.push(if c.is_ascii_digit() { c } else { ' ' });
            prev_letter = false;
        }
    }
    out
}
