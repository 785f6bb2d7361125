use sysinfo::System;

/// Node name and kernel release as reported by the OS.
#[derive(Debug, Clone, Default)]
pub struct NodeIdentity {
    pub node_name: String,
    pub kernel_release: String,
}

/// Query the node name and kernel release. Values that cannot be
/// determined stay empty; the renderer shows them as "N/A".
pub fn collect() -> NodeIdentity {
    NodeIdentity {
        node_name: System::host_name().unwrap_or_default(),
        kernel_release: System::kernel_version().unwrap_or_default(),
    }
}
