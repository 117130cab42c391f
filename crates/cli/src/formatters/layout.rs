//! Column layouts of the reports printed by each subcommand.

/// One output column: the heading shown and the record field it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub field: &'static str,
    /// Drop fractional seconds (`2024-01-15T10:30:00.000+00:00` becomes
    /// `2024-01-15T10:30:00`) in table output.
    pub timestamp: bool,
}

impl Column {
    const fn text(header: &'static str, field: &'static str) -> Self {
        Self {
            header,
            field,
            timestamp: false,
        }
    }

    const fn timestamp(header: &'static str, field: &'static str) -> Self {
        Self {
            header,
            field,
            timestamp: true,
        }
    }
}

/// Ordered columns of a report plus the line shown when it has no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLayout {
    /// Stable machine name used when several reports share one document.
    pub key: &'static str,
    pub title: &'static str,
    pub columns: &'static [Column],
    pub empty_message: &'static str,
}

impl ReportLayout {
    pub fn headers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.header)
    }
}

pub const FIREWALL_FULL: ReportLayout = ReportLayout {
    key: "firewall",
    title: "Firewall logs",
    columns: &[
        Column::timestamp("_time", "_time"),
        Column::text("host", "host"),
        Column::text("src_zone", "src_zone"),
        Column::text("src_int", "src_interface"),
        Column::text("src_ip", "src_ip"),
        Column::text("user", "user"),
        Column::text("dest_zone", "dest_zone"),
        Column::text("dest_int", "dest_interface"),
        Column::text("dest_ip", "dest_ip"),
        Column::text("dest_port", "dest_port"),
        Column::text("transport", "transport"),
        Column::text("application", "application"),
        Column::text("rule", "rule"),
        Column::text("action", "action"),
        Column::text("bytes", "bytes"),
    ],
    empty_message: "No firewall logs located.",
};

pub const FIREWALL_SHORT: ReportLayout = ReportLayout {
    key: "firewall",
    title: "Firewall logs",
    columns: &[
        Column::timestamp("_time", "_time"),
        Column::text("host", "host"),
        Column::text("src_ip", "src_ip"),
        Column::text("dest_ip", "dest_ip"),
        Column::text("dest_port", "dest_port"),
        Column::text("application", "application"),
        Column::text("action", "action"),
    ],
    empty_message: "No firewall logs located.",
};

pub const WINDOWS_DHCP: ReportLayout = ReportLayout {
    key: "windows_dhcp",
    title: "Windows DHCP logs",
    columns: &[
        Column::text("date", "date"),
        Column::text("time", "time"),
        Column::text("description", "description"),
        Column::text("dest", "dest"),
        Column::text("dest_ip", "dest_ip"),
        Column::text("mac", "mac"),
        Column::text("signature", "signature"),
        Column::text("host", "host"),
    ],
    empty_message: "No Windows DHCP logs located.",
};

pub const PA_DHCP: ReportLayout = ReportLayout {
    key: "pa_dhcp",
    title: "PA DHCP logs",
    columns: &[
        Column::text("generated_time", "generated_time"),
        Column::text("dvc_name", "dvc_name"),
        Column::text("description", "description"),
    ],
    empty_message: "No PA DHCP logs located.",
};

pub const LOGONS: ReportLayout = ReportLayout {
    key: "logons",
    title: "Windows user logons",
    columns: &[
        Column::text("User", "user"),
        Column::text("Host", "host"),
        Column::text("EventCode", "EventCode"),
    ],
    empty_message: "No Windows User logs located.",
};
