/// Complete host information snapshot
///
/// Every field is always present; a value that could not be collected is
/// either "N/A" or an empty string (the renderer shows both as "N/A").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostInfo {
    pub os: String,
    pub host: String,
    pub kernel: String,
    pub uptime: String,
    pub packages: String,
    pub shell: String,
    pub terminal: String,
    pub cpu: String,
    pub memory: String,
    pub portage: String,
    pub profile: String,
}

impl HostInfo {
    /// Field labels and values in display order.
    pub fn labeled_fields(&self) -> [(&'static str, &str); 11] {
        [
            ("OS", self.os.as_str()),
            ("Host", self.host.as_str()),
            ("Kernel", self.kernel.as_str()),
            ("Uptime", self.uptime.as_str()),
            ("Packages", self.packages.as_str()),
            ("Shell", self.shell.as_str()),
            ("Terminal", self.terminal.as_str()),
            ("CPU", self.cpu.as_str()),
            ("Memory", self.memory.as_str()),
            ("Portage", self.portage.as_str()),
            ("Profile", self.profile.as_str()),
        ]
    }
}
