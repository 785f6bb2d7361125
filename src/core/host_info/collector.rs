use crate::core::host_info::types::HostInfo;
use crate::core::host_info::{cpu, host, memory, os, packages, portage, session, uptime};
use crate::error::Result;
use log::warn;

/// Collect all host information in one pass.
///
/// Every lookup degrades independently to "N/A" (or stays empty) when it
/// fails; only a `portageq` spawn failure aborts the collection.
pub fn collect_host_info() -> Result<HostInfo> {
    let os = os::collect().unwrap_or_else(|e| {
        warn!("Failed to read OS identity: {}", e);
        os::get_fallback()
    });

    let identity = host::collect();

    let uptime = uptime::collect().unwrap_or_else(|e| {
        warn!("Failed to read uptime: {}", e);
        "N/A".to_string()
    });

    let packages = packages::collect().unwrap_or_else(|e| {
        warn!("Failed to count packages: {}", e);
        "N/A".to_string()
    });

    let shell = session::shell().unwrap_or_else(|| "N/A".to_string());
    let terminal = session::terminal().unwrap_or_else(|| "N/A".to_string());

    let cpu = cpu::collect().unwrap_or_else(|e| {
        warn!("Failed to read CPU model: {}", e);
        "N/A".to_string()
    });

    let memory = memory::collect().unwrap_or_else(|e| {
        warn!("Failed to read memory usage: {}", e);
        "N/A".to_string()
    });

    let portage = portage::version()?;

    let profile = portage::profile().unwrap_or_else(|e| {
        warn!("Failed to resolve make.profile: {}", e);
        "N/A".to_string()
    });

    Ok(HostInfo {
        os,
        host: identity.node_name,
        kernel: identity.kernel_release,
        uptime,
        packages,
        shell,
        terminal,
        cpu,
        memory,
        portage,
        profile,
    })
}
