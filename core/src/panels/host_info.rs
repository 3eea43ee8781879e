use webcheck_common::address::hostname;

use crate::boundary::Panel;

/// Label/TLD breakdown for a classified URL. Works on the normalized form,
/// which always carries an explicit scheme.
pub struct HostnamePanel {
    address: String,
}

impl HostnamePanel {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
        }
    }
}

impl Panel for HostnamePanel {
    fn name(&self) -> &str {
        "Hostname Info"
    }

    fn render(&mut self) -> Vec<String> {
        let (scheme, host) = hostname::split_scheme(&self.address);
        let labels: Vec<&str> = host.split('.').collect();
        let tld = labels.last().copied().unwrap_or_default();

        vec![
            format!(
                "Scheme: {}",
                scheme.map(|s| s.trim_end_matches("://")).unwrap_or("none")
            ),
            format!("Hostname: {host}"),
            format!("Labels: {}", labels.join(" > ")),
            format!("TLD: {tld}"),
            format!(
                "Length: {} of {} max",
                host.len(),
                hostname::MAX_HOSTNAME_LEN
            ),
        ]
    }
}
