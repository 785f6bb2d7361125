use crate::core::host_info::collect_host_info;
use crate::ui::{print_host_info, print_logo};
use anyhow::Result;

/// Run one fetch pass: banner first, then collect, then the field block.
///
/// A fatal collection error still leaves the banner on screen.
pub fn execute() -> Result<()> {
    print_logo();
    let info = collect_host_info()?;
    print_host_info(&info);
    Ok(())
}
