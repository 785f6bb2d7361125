use crate::core::host_info::HostInfo;
use colored::*;

/// Render one field as `"  Label    : value"`.
///
/// The indent, label (left-aligned, padded to 9) and colon are pink; the
/// value is unstyled. Empty values render as "N/A".
pub fn field_line(label: &str, value: &str) -> String {
    let shown = if value.is_empty() { "N/A" } else { value };
    format!(
        "{}{}",
        format!("  {:<9}: ", label).truecolor(255, 192, 203),
        shown
    )
}

/// Render the whole field block in display order, one line per field,
/// with a trailing blank line.
pub fn render_host_info(info: &HostInfo) -> String {
    let mut out = String::new();
    for (label, value) in info.labeled_fields() {
        out.push_str(&field_line(label, value));
        out.push('\n');
    }
    out.push('\n');
    out
}

pub fn print_host_info(info: &HostInfo) {
    print!("{}", render_host_info(info));
}
